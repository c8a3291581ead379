//! Content placement within a page
//!
//! This module handles calculating the final position of an image on its
//! page, accounting for:
//! - Page margins
//! - Uniform scaling (fit, aspect ratio preserved)
//! - Centering inside the printable area

use crate::constants::MIN_PRINTABLE_PT;
use crate::types::Margins;

use super::{Insets, Placement, Rect};

/// Calculate the printable area of a page, i.e. the page minus margins.
///
/// Each side is clamped to at least [`MIN_PRINTABLE_PT`] so margins larger
/// than the page still leave something to draw into.
pub fn printable_area(page_width: f32, page_height: f32, margins: &Margins) -> Rect {
    let insets = Insets::from(margins);

    Rect::new(
        insets.left,
        insets.bottom,
        (page_width - insets.left - insets.right).max(MIN_PRINTABLE_PT),
        (page_height - insets.top - insets.bottom).max(MIN_PRINTABLE_PT),
    )
}

/// Fit an image of `image_width` x `image_height` pixels inside `area` and
/// center it.
///
/// One pixel maps to `scale` points. The image may be scaled up as well as
/// down.
pub fn place_image(area: &Rect, image_width: u32, image_height: u32) -> Placement {
    let src_width = image_width as f32;
    let src_height = image_height as f32;

    let scale = calculate_scale(src_width, src_height, area.width, area.height);

    let draw_width = src_width * scale;
    let draw_height = src_height * scale;

    let x = area.x + (area.width - draw_width) / 2.0;
    let y = area.y + (area.height - draw_height) / 2.0;

    Placement {
        rect: Rect::new(x, y, draw_width, draw_height),
        scale,
    }
}

/// Scale factor that fits source inside target without distortion
fn calculate_scale(src_width: f32, src_height: f32, target_width: f32, target_height: f32) -> f32 {
    let scale_w = target_width / src_width;
    let scale_h = target_height / src_height;
    scale_w.min(scale_h)
}
