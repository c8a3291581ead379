pub mod assemble;
mod collection;
pub mod constants;
pub mod layout;
pub mod normalize;
mod options;
mod render;
mod stats;
mod types;

pub use assemble::{
    AssembledDocument, build_document, build_document_async, ensure_pdf_extension,
    layout_document, layout_document_async, load_image_item, load_image_items, save_pdf,
};
pub use collection::ImageCollection;
pub use layout::{DocumentLayout, PageLayout, Placement, Rect};
pub use normalize::{NormalizedImage, PixelFormat, normalize_image};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
