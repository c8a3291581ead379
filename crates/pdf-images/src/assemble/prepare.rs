//! Parallel per-item preparation
//!
//! Each item is decoded, rotated, flattened and (when rendering) compressed
//! independently of all others, so this phase runs on the rayon pool. The
//! results come back in input order.

use crate::constants::LARGE_IMAGE_WARNING_BYTES;
use crate::normalize::normalize_image;
use crate::render::{EncodedImage, encode_image};
use crate::types::*;
use rayon::prelude::*;

/// What preparation produced for one item
pub(crate) struct PreparedItem<'a> {
    pub item: &'a ImageItem,
    pub outcome: Outcome,
    /// Setting that had to be corrected, the item still renders
    pub warning: Option<IssueKind>,
}

pub(crate) enum Outcome {
    Ready {
        width: u32,
        height: u32,
        /// Present only when the caller asked for pixel data
        encoded: Option<EncodedImage>,
    },
    Skipped(IssueKind),
}

/// Stable sort by `order`; ties keep their input sequence.
pub(crate) fn sort_items(items: &[ImageItem]) -> Vec<&ImageItem> {
    let mut sorted: Vec<&ImageItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.order);
    sorted
}

pub(crate) fn prepare_items<'a>(
    items: &[&'a ImageItem],
    encode: bool,
) -> Result<Vec<PreparedItem<'a>>> {
    items
        .par_iter()
        .map(|&item| prepare_item(item, encode))
        .collect()
}

fn prepare_item(item: &ImageItem, encode: bool) -> Result<PreparedItem<'_>> {
    if item.data.len() > LARGE_IMAGE_WARNING_BYTES {
        log::warn!(
            "{} is {:.1} MB, assembly may be slow",
            item.name,
            item.data.len() as f64 / (1024.0 * 1024.0)
        );
    }

    let (rotation, warning) = match Rotation::from_degrees(item.rotation) {
        Some(rotation) => (rotation, None),
        None => {
            log::warn!(
                "{}: rotation {} is not a multiple of 90, rendering unrotated",
                item.name,
                item.rotation
            );
            (Rotation::None, Some(IssueKind::InvalidRotation(item.rotation)))
        }
    };

    let decoded = normalize_image(&item.data, rotation)
        .map_err(|e| e.to_string())
        .and_then(|image| {
            if image.width == 0 || image.height == 0 {
                Err(format!("image has no pixels ({}x{})", image.width, image.height))
            } else {
                Ok(image)
            }
        });

    let image = match decoded {
        Ok(image) => image,
        Err(reason) => {
            log::warn!("Skipping {}: {}", item.name, reason);
            return Ok(PreparedItem {
                item,
                outcome: Outcome::Skipped(IssueKind::ImageDecode(reason)),
                warning,
            });
        }
    };

    let encoded = if encode {
        Some(encode_image(&image)?)
    } else {
        None
    };

    Ok(PreparedItem {
        item,
        outcome: Outcome::Ready {
            width: image.width,
            height: image.height,
            encoded,
        },
        warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_is_stable() {
        let items = vec![
            ImageItem::new(ItemId(0), "a", Vec::new(), 1),
            ImageItem::new(ItemId(1), "b", Vec::new(), 0),
            ImageItem::new(ItemId(2), "c", Vec::new(), 1),
            ImageItem::new(ItemId(3), "d", Vec::new(), -4),
        ];
        let ids: Vec<u64> = sort_items(&items).iter().map(|i| i.id.0).collect();
        assert_eq!(ids, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_undecodable_item_is_skipped() {
        let item = ImageItem::new(ItemId(7), "junk", b"nope".to_vec(), 0).with_rotation(45);
        let prepared = prepare_item(&item, true).unwrap();

        assert!(matches!(
            prepared.outcome,
            Outcome::Skipped(IssueKind::ImageDecode(_))
        ));
        assert_eq!(prepared.warning, Some(IssueKind::InvalidRotation(45)));
    }

    #[test]
    fn test_empty_image_is_skipped() {
        // 0x0 binary PPM
        let item = ImageItem::new(ItemId(1), "empty.ppm", b"P6\n0 0\n255\n".to_vec(), 0);
        let prepared = prepare_item(&item, true).unwrap();

        assert!(matches!(
            prepared.outcome,
            Outcome::Skipped(IssueKind::ImageDecode(_))
        ));
    }
}
