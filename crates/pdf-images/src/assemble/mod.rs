//! Image-to-PDF assembly
//!
//! This module orchestrates the build:
//! 1. Validate options and sort a snapshot of the items by order
//! 2. Normalize (and compress) every item in parallel
//! 3. Resolve page geometry and placement per item, in page order
//! 4. Render one page per image and serialize the document

mod io;
mod prepare;

pub use io::{ensure_pdf_extension, load_image_item, load_image_items, save_pdf};

use crate::constants::PDF_VERSION;
use crate::layout::{
    DocumentLayout, PageLayout, place_image, printable_area, resolve_orientation, resolve_page_size,
};
use crate::options::DocumentOptions;
use crate::render::{EncodedImage, create_image_xobject, finish_document, render_image_page};
use crate::types::*;
use lopdf::{Document, Object};
use prepare::{Outcome, PreparedItem, prepare_items, sort_items};

/// A finished PDF together with the layout it was rendered from
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    /// Serialized PDF file
    pub bytes: Vec<u8>,
    pub layout: DocumentLayout,
}

impl AssembledDocument {
    pub fn page_count(&self) -> usize {
        self.layout.pages.len()
    }
}

/// Build a PDF with one page per decodable image.
///
/// Items that fail to decode are left out and reported in
/// `layout.skipped`. The call only fails when no page at all could be
/// produced, or on configuration and serialization errors.
pub fn build_document(items: &[ImageItem], options: &DocumentOptions) -> Result<AssembledDocument> {
    options.validate()?;

    let sorted = sort_items(items);
    let prepared = prepare_items(&sorted, true)?;

    let mut output = Document::with_version(PDF_VERSION);
    let pages_id = output.new_object_id();
    let mut page_refs = Vec::new();

    let layout = collect_layout(prepared, options, |page, encoded| {
        if let Some(encoded) = encoded {
            let xobject_id = create_image_xobject(&mut output, encoded);
            let page_id = render_image_page(&mut output, pages_id, page, xobject_id);
            page_refs.push(Object::Reference(page_id));
        }
    })?;

    finish_document(&mut output, pages_id, page_refs);

    let mut bytes = Vec::new();
    output.save_to(&mut bytes)?;

    log::info!(
        "Assembled {} page(s), {} skipped, {} warning(s), {} bytes",
        layout.pages.len(),
        layout.skipped.len(),
        layout.warnings.len(),
        bytes.len()
    );

    Ok(AssembledDocument { bytes, layout })
}

/// Async wrapper around [`build_document`]
pub async fn build_document_async(
    items: &[ImageItem],
    options: &DocumentOptions,
) -> Result<AssembledDocument> {
    options.validate()?;

    let items = items.to_vec();
    let options = *options;

    tokio::task::spawn_blocking(move || build_document(&items, &options)).await?
}

/// Resolve the page layout of every item without rendering anything.
///
/// Images are still decoded, since rotation and orientation depend on the
/// actual pixel size.
pub fn layout_document(items: &[ImageItem], options: &DocumentOptions) -> Result<DocumentLayout> {
    options.validate()?;

    let sorted = sort_items(items);
    let prepared = prepare_items(&sorted, false)?;

    collect_layout(prepared, options, |_, _| {})
}

/// Async wrapper around [`layout_document`]
pub async fn layout_document_async(
    items: &[ImageItem],
    options: &DocumentOptions,
) -> Result<DocumentLayout> {
    options.validate()?;

    let items = items.to_vec();
    let options = *options;

    tokio::task::spawn_blocking(move || layout_document(&items, &options)).await?
}

/// Walk prepared items in page order, laying out each ready item and handing
/// it to `emit` together with its pixel data.
fn collect_layout<F>(
    prepared: Vec<PreparedItem<'_>>,
    options: &DocumentOptions,
    mut emit: F,
) -> Result<DocumentLayout>
where
    F: FnMut(&PageLayout, Option<EncodedImage>),
{
    let mut layout = DocumentLayout::default();

    for PreparedItem {
        item,
        outcome,
        warning,
    } in prepared
    {
        if let Some(kind) = warning {
            layout.warnings.push(ItemIssue::new(item, kind));
        }

        match outcome {
            Outcome::Skipped(kind) => {
                layout.skipped.push(ItemIssue::new(item, kind));
            }
            Outcome::Ready {
                width,
                height,
                encoded,
            } => {
                let page = layout_page(item, width, height, options);
                emit(&page, encoded);
                layout.pages.push(page);
            }
        }
    }

    if layout.pages.is_empty() {
        return Err(BuildError::NoPagesProduced {
            skipped: layout.skipped,
        });
    }

    Ok(layout)
}

fn layout_page(item: &ImageItem, width: u32, height: u32, options: &DocumentOptions) -> PageLayout {
    let choice = item.orientation.resolve(options.default_orientation);
    let orientation = resolve_orientation(choice, width, height);
    let (page_width, page_height) = resolve_page_size(options.page_size, choice, width, height);

    let printable = printable_area(page_width, page_height, &options.margins);
    let placement = place_image(&printable, width, height);

    log::debug!(
        "{}: {}x{} px on {:.1}x{:.1} pt {:?} page, scale {:.4}",
        item.name,
        width,
        height,
        page_width,
        page_height,
        orientation,
        placement.scale
    );

    PageLayout {
        item_id: item.id,
        name: item.name.clone(),
        order: item.order,
        orientation,
        page_width,
        page_height,
        printable,
        image_width: width,
        image_height: height,
        placement,
    }
}
