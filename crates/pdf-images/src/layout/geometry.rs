//! Page geometry
//!
//! Every image gets its own page. The base paper size is fixed for the
//! document, but which edge becomes the width depends on the orientation
//! chosen for that image.

use crate::types::{Orientation, OrientationChoice, PaperSize};

/// Page width and height in points for an image of `image_width` x
/// `image_height` pixels (after rotation).
pub fn resolve_page_size(
    paper: PaperSize,
    choice: OrientationChoice,
    image_width: u32,
    image_height: u32,
) -> (f32, f32) {
    page_dimensions(paper, resolve_orientation(choice, image_width, image_height))
}

/// Concrete orientation used for an image of the given pixel size
pub fn resolve_orientation(
    choice: OrientationChoice,
    image_width: u32,
    image_height: u32,
) -> Orientation {
    choice.resolve(image_width, image_height)
}

/// Base dimensions with orientation applied
pub fn page_dimensions(paper: PaperSize, orientation: Orientation) -> (f32, f32) {
    let (w, h) = paper.dimensions_pt();
    let (short, long) = (w.min(h), w.max(h));
    match orientation {
        Orientation::Portrait => (short, long),
        Orientation::Landscape => (long, short),
    }
}
