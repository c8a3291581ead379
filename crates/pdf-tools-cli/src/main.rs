use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pdf_images::constants::pt_to_mm;
use pdf_images::{
    BuildError, DocumentLayout, DocumentOptions, ImageCollection, ItemId, ItemIssue, Margins,
    OrientationChoice, OrientationOverride, PaperSize,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pdft", about = "Image to PDF tools CLI", version)]
struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a PDF with one page per image
    Build {
        /// Input images, in page order
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        /// Output PDF file (".pdf" is appended if missing)
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Show page geometry and statistics without writing a PDF
    Plan {
        /// Input images, in page order
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Load document options from a JSON file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Save the effective document options to a JSON file
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// Base paper size
    #[arg(long, value_enum)]
    page_size: Option<PaperArg>,

    /// Orientation for images without their own setting
    #[arg(long, value_enum)]
    orientation: Option<OrientationArg>,

    /// Margin in mm (uniform on all sides)
    #[arg(long)]
    margin: Option<f32>,

    /// Left margin in mm
    #[arg(long)]
    margin_left: Option<f32>,

    /// Right margin in mm
    #[arg(long)]
    margin_right: Option<f32>,

    /// Top margin in mm
    #[arg(long)]
    margin_top: Option<f32>,

    /// Bottom margin in mm
    #[arg(long)]
    margin_bottom: Option<f32>,

    /// Rotate image N (1-based) clockwise by DEG degrees
    #[arg(long = "rotate", value_name = "N=DEG", value_parser = parse_rotate)]
    rotate: Vec<(usize, i32)>,

    /// Orientation of image N (1-based)
    #[arg(long = "orient", value_name = "N=MODE", value_parser = parse_orient)]
    orient: Vec<(usize, OrientArg)>,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum PaperArg {
    A4,
    Letter,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OrientationArg {
    Auto,
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
enum OrientArg {
    Default,
    Auto,
    Portrait,
    Landscape,
}

impl From<PaperArg> for PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A4 => Self::A4,
            PaperArg::Letter => Self::Letter,
        }
    }
}

impl From<OrientationArg> for OrientationChoice {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Auto => Self::Auto,
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<OrientArg> for OrientationOverride {
    fn from(arg: OrientArg) -> Self {
        match arg {
            OrientArg::Default => Self::Default,
            OrientArg::Auto => Self::Auto,
            OrientArg::Portrait => Self::Portrait,
            OrientArg::Landscape => Self::Landscape,
        }
    }
}

/// Split `N=VALUE` into a 1-based position and the raw value
fn split_indexed(s: &str) -> std::result::Result<(usize, &str), String> {
    let (position, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected N=VALUE, got {:?}", s))?;
    let position: usize = position
        .trim()
        .parse()
        .map_err(|_| format!("invalid image position {:?}", position))?;
    if position == 0 {
        return Err("image positions start at 1".to_string());
    }
    Ok((position, value.trim()))
}

fn parse_rotate(s: &str) -> std::result::Result<(usize, i32), String> {
    let (position, value) = split_indexed(s)?;
    let degrees = value
        .parse()
        .map_err(|_| format!("invalid rotation {:?}", value))?;
    Ok((position, degrees))
}

fn parse_orient(s: &str) -> std::result::Result<(usize, OrientArg), String> {
    let (position, value) = split_indexed(s)?;
    let mode = <OrientArg as ValueEnum>::from_str(value, true)?;
    Ok((position, mode))
}

impl LayoutArgs {
    /// Config file (or defaults) with command-line flags layered on top
    async fn document_options(&self) -> Result<DocumentOptions> {
        let mut options = match &self.config {
            Some(path) => DocumentOptions::load(path)
                .await
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => DocumentOptions::default(),
        };

        if let Some(page_size) = self.page_size {
            options.page_size = page_size.into();
        }
        if let Some(orientation) = self.orientation {
            options.default_orientation = orientation.into();
        }
        if let Some(margin) = self.margin {
            options.margins = Margins::uniform(margin);
        }
        if let Some(left) = self.margin_left {
            options.margins.left_mm = left;
        }
        if let Some(right) = self.margin_right {
            options.margins.right_mm = right;
        }
        if let Some(top) = self.margin_top {
            options.margins.top_mm = top;
        }
        if let Some(bottom) = self.margin_bottom {
            options.margins.bottom_mm = bottom;
        }

        options.validate()?;

        if let Some(path) = &self.save_config {
            options
                .save(path)
                .await
                .with_context(|| format!("Failed to save config {}", path.display()))?;
            log::info!("Saved options to {}", path.display());
        }

        Ok(options)
    }

    /// Apply `--rotate` and `--orient` to items added in command-line order
    fn apply_item_settings(&self, collection: &mut ImageCollection, ids: &[ItemId]) -> Result<()> {
        let lookup = |position: usize| -> Result<ItemId> {
            match ids.get(position - 1) {
                Some(id) => Ok(*id),
                None => bail!(
                    "image position {} is out of range (1..={})",
                    position,
                    ids.len()
                ),
            }
        };

        for &(position, degrees) in &self.rotate {
            collection.set_rotation(lookup(position)?, degrees);
        }
        for &(position, mode) in &self.orient {
            collection.set_orientation(lookup(position)?, mode.into());
        }
        Ok(())
    }
}

async fn load_collection(images: &[PathBuf], layout: &LayoutArgs) -> Result<ImageCollection> {
    let items = pdf_images::load_image_items(images)
        .await
        .context("Failed to read input images")?;
    log::info!("Loaded {} image(s)", items.len());

    let mut collection = ImageCollection::new();
    let ids = collection.add_many(items.into_iter().map(|item| (item.name, item.data)));
    layout.apply_item_settings(&mut collection, &ids)?;
    Ok(collection)
}

/// `output` with its file name forced to end in `.pdf`
fn output_path(output: &Path) -> PathBuf {
    let name = output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    output.with_file_name(pdf_images::ensure_pdf_extension(&name))
}

fn print_issues(heading: &str, issues: &[ItemIssue]) {
    if issues.is_empty() {
        return;
    }
    println!("{}:", heading);
    for issue in issues {
        println!("  {}", issue);
    }
}

fn print_plan(layout: &DocumentLayout) {
    println!("Page Layout:");
    for (i, page) in layout.pages.iter().enumerate() {
        let rect = page.placement.rect;
        println!(
            "  {:>3}. {} ({}x{} px) → {:?} {:.0}x{:.0} mm, drawn at ({:.1}, {:.1}) size {:.1}x{:.1} pt, scale {:.4}",
            i + 1,
            page.name,
            page.image_width,
            page.image_height,
            page.orientation,
            pt_to_mm(page.page_width),
            pt_to_mm(page.page_height),
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            page.placement.scale
        );
    }
}

fn print_statistics(layout: &DocumentLayout) {
    let stats = pdf_images::calculate_statistics(layout);
    println!("Document Statistics:");
    println!("  Pages: {}", stats.pages);
    println!("  Portrait pages: {}", stats.portrait_pages);
    println!("  Landscape pages: {}", stats.landscape_pages);
    println!("  Skipped images: {}", stats.skipped_items);
    println!("  Warnings: {}", stats.warnings);
}

fn init_logging(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match cli.command {
        Commands::Build {
            images,
            output,
            layout,
        } => {
            let options = layout.document_options().await?;
            let collection = load_collection(&images, &layout).await?;
            let items = collection.snapshot();

            let assembled = match pdf_images::build_document_async(&items, &options).await {
                Ok(assembled) => assembled,
                Err(BuildError::NoPagesProduced { skipped }) => {
                    print_issues("Skipped", &skipped);
                    bail!("No pages produced from {} image(s)", items.len());
                }
                Err(e) => return Err(e).context("Failed to build PDF"),
            };

            print_issues("Skipped", &assembled.layout.skipped);
            print_issues("Warnings", &assembled.layout.warnings);

            let output = output_path(&output);
            pdf_images::save_pdf(&assembled.bytes, &output)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "Built {} page(s) → {}",
                assembled.page_count(),
                output.display()
            );
        }

        Commands::Plan { images, layout } => {
            let options = layout.document_options().await?;
            let collection = load_collection(&images, &layout).await?;
            let items = collection.snapshot();

            let planned = match pdf_images::layout_document_async(&items, &options).await {
                Ok(planned) => planned,
                Err(BuildError::NoPagesProduced { skipped }) => {
                    print_issues("Skipped", &skipped);
                    bail!("No pages produced from {} image(s)", items.len());
                }
                Err(e) => return Err(e.into()),
            };

            print_plan(&planned);
            print_issues("Skipped", &planned.skipped);
            print_issues("Warnings", &planned.warnings);
            print_statistics(&planned);
        }
    }

    Ok(())
}
