//! Editable list of image items
//!
//! The collection is what an interactive front end mutates; assembly only
//! ever sees a [`snapshot`](ImageCollection::snapshot) of it.

use crate::types::*;

/// Ordered set of images with per-item settings
#[derive(Debug, Clone, Default)]
pub struct ImageCollection {
    items: Vec<ImageItem>,
    next_id: u64,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an image; its order is the current length.
    pub fn add(&mut self, name: impl Into<String>, data: Vec<u8>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;

        let order = self.items.len() as i64;
        self.items.push(ImageItem::new(id, name, data, order));
        id
    }

    /// Append several images, ordered after the existing ones
    pub fn add_many<I, S>(&mut self, images: I) -> Vec<ItemId>
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        images
            .into_iter()
            .map(|(name, data)| self.add(name, data))
            .collect()
    }

    pub fn remove(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: ItemId) -> Option<&ImageItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut ImageItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion sequence
    pub fn items(&self) -> &[ImageItem] {
        &self.items
    }

    /// Set an item's order, clamped into `0..=len-1`.
    ///
    /// Other items keep their orders, so duplicates are possible; the
    /// assembler's stable sort breaks ties by insertion sequence.
    pub fn set_order(&mut self, id: ItemId, order: i64) -> bool {
        let max = self.max_order();
        match self.get_mut(id) {
            Some(item) => {
                item.order = order.clamp(0, max);
                true
            }
            None => false,
        }
    }

    /// Move an item one position earlier
    pub fn move_up(&mut self, id: ItemId) -> bool {
        self.nudge(id, -1)
    }

    /// Move an item one position later
    pub fn move_down(&mut self, id: ItemId) -> bool {
        self.nudge(id, 1)
    }

    pub fn set_rotation(&mut self, id: ItemId, degrees: i32) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.rotation = degrees;
                true
            }
            None => false,
        }
    }

    pub fn set_orientation(&mut self, id: ItemId, orientation: OrientationOverride) -> bool {
        match self.get_mut(id) {
            Some(item) => {
                item.orientation = orientation;
                true
            }
            None => false,
        }
    }

    /// Copy of the items, stably sorted by order
    pub fn snapshot(&self) -> Vec<ImageItem> {
        let mut items = self.items.clone();
        items.sort_by_key(|item| item.order);
        items
    }

    /// Items whose encoded size exceeds `limit_bytes`
    pub fn oversized(&self, limit_bytes: usize) -> Vec<&ImageItem> {
        self.items
            .iter()
            .filter(|item| item.data.len() > limit_bytes)
            .collect()
    }

    fn nudge(&mut self, id: ItemId, delta: i64) -> bool {
        let Some(current) = self.get(id).map(|item| item.order) else {
            return false;
        };
        self.set_order(id, current + delta)
    }

    fn max_order(&self) -> i64 {
        (self.items.len() as i64 - 1).max(0)
    }
}
