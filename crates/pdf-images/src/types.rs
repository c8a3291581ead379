use crate::constants::{
    A4_HEIGHT_MM, A4_WIDTH_MM, DEFAULT_MARGIN_MM, LETTER_HEIGHT_PT, LETTER_WIDTH_PT, mm_to_pt,
};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages produced ({} item(s) skipped)", .skipped.len())]
    NoPagesProduced { skipped: Vec<ItemIssue> },
}

pub type Result<T> = std::result::Result<T, BuildError>;

/// Stable identifier of an image item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One source image and its per-item settings.
///
/// Items are owned by the caller; assembly only ever reads a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageItem {
    pub id: ItemId,
    /// Display label, used in reports and logs only
    pub name: String,
    /// Encoded image bytes (PNG, JPEG, ...)
    pub data: Vec<u8>,
    /// Page order; ties keep their insertion sequence
    pub order: i64,
    /// Clockwise rotation in degrees, expected to be a multiple of 90
    pub rotation: i32,
    pub orientation: OrientationOverride,
}

impl ImageItem {
    pub fn new(id: ItemId, name: impl Into<String>, data: Vec<u8>, order: i64) -> Self {
        Self {
            id,
            name: name.into(),
            data,
            order,
            rotation: 0,
            orientation: OrientationOverride::Default,
        }
    }

    pub fn with_rotation(mut self, degrees: i32) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_orientation(mut self, orientation: OrientationOverride) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Concrete page orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height >= width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

/// Orientation setting for the whole document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrientationChoice {
    /// Landscape when the (rotated) image is at least as wide as it is tall
    #[default]
    Auto,
    Portrait,
    Landscape,
}

impl OrientationChoice {
    /// Pick the concrete orientation for an image of the given pixel size
    pub fn resolve(self, image_width: u32, image_height: u32) -> Orientation {
        match self {
            OrientationChoice::Portrait => Orientation::Portrait,
            OrientationChoice::Landscape => Orientation::Landscape,
            OrientationChoice::Auto => {
                if image_width >= image_height {
                    Orientation::Landscape
                } else {
                    Orientation::Portrait
                }
            }
        }
    }
}

/// Per-item orientation; `Default` inherits the document setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrientationOverride {
    #[default]
    Default,
    Auto,
    Portrait,
    Landscape,
}

impl OrientationOverride {
    /// Replace `Default` with the document-wide choice
    pub fn resolve(self, document_default: OrientationChoice) -> OrientationChoice {
        match self {
            OrientationOverride::Default => document_default,
            OrientationOverride::Auto => OrientationChoice::Auto,
            OrientationOverride::Portrait => OrientationChoice::Portrait,
            OrientationOverride::Landscape => OrientationChoice::Landscape,
        }
    }
}

/// Supported base paper sizes
///
/// Deserialization goes through [`PaperSize::from_name`], so unknown names in
/// a config file load as A4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum PaperSize {
    #[default]
    A4,
    Letter,
}

impl PaperSize {
    /// Base dimensions in points, portrait (width < height)
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A4 => (mm_to_pt(A4_WIDTH_MM), mm_to_pt(A4_HEIGHT_MM)),
            PaperSize::Letter => (LETTER_WIDTH_PT, LETTER_HEIGHT_PT),
        }
    }

    /// Look up a paper size by name (case-insensitive). Unknown names map to A4.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "letter" => PaperSize::Letter,
            "a4" => PaperSize::A4,
            other => {
                log::warn!("Unknown page size {:?}, falling back to A4", other);
                PaperSize::A4
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::Letter => "Letter",
        }
    }
}

impl From<String> for PaperSize {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Quarter-turn rotation, clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    None,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// Normalize `degrees` modulo 360. Returns `None` when the angle is not a
    /// multiple of 90.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Rotation::None),
            90 => Some(Rotation::Clockwise90),
            180 => Some(Rotation::Clockwise180),
            270 => Some(Rotation::Clockwise270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// The rotation that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            Rotation::None => Rotation::None,
            Rotation::Clockwise90 => Rotation::Clockwise270,
            Rotation::Clockwise180 => Rotation::Clockwise180,
            Rotation::Clockwise270 => Rotation::Clockwise90,
        }
    }

    /// Whether width and height trade places
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Rotation::Clockwise90 | Rotation::Clockwise270)
    }
}

/// Page margins in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    pub left_mm: f32,
    pub right_mm: f32,
    pub top_mm: f32,
    pub bottom_mm: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN_MM)
    }
}

impl Margins {
    /// Create uniform margins on all sides
    pub fn uniform(margin_mm: f32) -> Self {
        Self {
            left_mm: margin_mm,
            right_mm: margin_mm,
            top_mm: margin_mm,
            bottom_mm: margin_mm,
        }
    }

    fn edges(&self) -> [(&'static str, f32); 4] {
        [
            ("left", self.left_mm),
            ("right", self.right_mm),
            ("top", self.top_mm),
            ("bottom", self.bottom_mm),
        ]
    }

    /// First edge that is negative or not a finite number
    pub(crate) fn invalid_edge(&self) -> Option<(&'static str, f32)> {
        self.edges()
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
    }
}

/// What went wrong with a single item
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// The bytes could not be decoded; the item was skipped
    #[error("failed to decode image: {0}")]
    ImageDecode(String),
    /// The rotation was not a quarter turn; the item was rendered unrotated
    #[error("rotation of {0} degrees is not a multiple of 90, using 0")]
    InvalidRotation(i32),
}

/// A per-item problem reported alongside the assembled document
#[derive(Debug, Clone, PartialEq)]
pub struct ItemIssue {
    pub item_id: ItemId,
    pub name: String,
    pub order: i64,
    pub kind: IssueKind,
}

impl ItemIssue {
    pub(crate) fn new(item: &ImageItem, kind: IssueKind) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            order: item.order,
            kind,
        }
    }
}

impl fmt::Display for ItemIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.item_id, self.kind)
    }
}

/// Summary of a laid-out document
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStatistics {
    /// Pages that will be (or were) emitted
    pub pages: usize,
    pub portrait_pages: usize,
    pub landscape_pages: usize,
    /// Items left out because they could not be decoded
    pub skipped_items: usize,
    /// Corrected per-item settings
    pub warnings: usize,
}
