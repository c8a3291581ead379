//! Output page rendering
//!
//! Every page carries exactly one image, drawn by a single `cm`/`Do` pair
//! inside its own graphics state.

use crate::constants::IMAGE_RESOURCE_NAME;
use crate::layout::{PageLayout, Rect};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

/// Render one output page showing `xobject_id` at the layout's draw
/// rectangle. Returns the id of the new page object.
pub fn render_image_page(
    output: &mut Document,
    parent_pages_id: ObjectId,
    layout: &PageLayout,
    xobject_id: ObjectId,
) -> ObjectId {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(layout.page_width),
            Object::Real(layout.page_height),
        ]),
    );

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE_NAME, Object::Reference(xobject_id));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = generate_placement_command(IMAGE_RESOURCE_NAME, &layout.placement.rect);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    output.add_object(page_dict)
}

/// Content stream command drawing an image XObject into `rect`.
///
/// Image XObjects occupy the unit square, so the matrix scales by the draw
/// size in points rather than by the pixel scale.
pub fn generate_placement_command(xobject_name: &str, rect: &Rect) -> String {
    format!(
        "q {} 0 0 {} {} {} cm /{} Do Q\n",
        rect.width, rect.height, rect.x, rect.y, xobject_name
    )
}
