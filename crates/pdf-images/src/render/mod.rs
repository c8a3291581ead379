//! PDF rendering modules
//!
//! This module handles all PDF-specific operations:
//! - Compressing normalized pixels into image XObjects
//! - Building one output page per placed image
//! - Writing the page tree and catalog

mod page;
mod xobject;

pub use page::*;
pub use xobject::*;

use lopdf::{Dictionary, Document, Object, ObjectId};

/// Write the page tree under the reserved `pages_id` and point the trailer
/// at a fresh catalog.
pub fn finish_document(output: &mut Document, pages_id: ObjectId, page_refs: Vec<Object>) {
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));

    output.trailer.set("Root", catalog_id);
}
