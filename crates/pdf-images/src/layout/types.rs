//! Layout data types
//!
//! These types represent the intermediate layout calculations between
//! image normalization and PDF rendering.

use crate::constants::mm_to_pt;
use crate::types::{ItemId, ItemIssue, Margins, Orientation};

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Margins converted to points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl From<&Margins> for Insets {
    fn from(margins: &Margins) -> Self {
        Self {
            left: mm_to_pt(margins.left_mm),
            right: mm_to_pt(margins.right_mm),
            top: mm_to_pt(margins.top_mm),
            bottom: mm_to_pt(margins.bottom_mm),
        }
    }
}

/// Where and how large an image is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Draw rectangle in page coordinates (origin bottom-left)
    pub rect: Rect,
    /// Points per image pixel
    pub scale: f32,
}

/// Final geometry of one output page
///
/// This is the result of all layout calculations and contains everything
/// needed to render the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub item_id: ItemId,
    pub name: String,
    pub order: i64,
    pub orientation: Orientation,
    /// Page width in points
    pub page_width: f32,
    /// Page height in points
    pub page_height: f32,
    /// Page minus margins, clamped to at least 1pt per side
    pub printable: Rect,
    /// Pixel size of the rotated image
    pub image_width: u32,
    pub image_height: u32,
    pub placement: Placement,
}

/// Geometry of a whole document plus the per-item issues met on the way
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DocumentLayout {
    /// One entry per emitted page, in page order
    pub pages: Vec<PageLayout>,
    /// Items that produced no page
    pub skipped: Vec<ItemIssue>,
    /// Settings that had to be corrected, including on skipped items
    pub warnings: Vec<ItemIssue>,
}
