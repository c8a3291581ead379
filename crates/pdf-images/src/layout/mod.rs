//! Layout calculation modules
//!
//! This module handles all the geometric calculations for a page:
//! - Page geometry (paper size and orientation for each image)
//! - Content placement (margins, printable area, scaling, centering)

mod geometry;
mod placement;
mod types;

pub use geometry::*;
pub use placement::*;
pub use types::*;
