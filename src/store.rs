//! In-memory item storage.
//!
//! Items are kept in insertion order in a single `Vec`. Every operation takes
//! the lock exactly once, so a create reads the current length and appends
//! without another writer slipping in between.
//!
//! Ids are assigned as `len + 1` at creation time. This is not a durable
//! counter: once an item is deleted, the next create can reuse an id that
//! is still held by a surviving item.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::StoreError;
use crate::model::Item;

pub const SEED_NAME: &str = "Test Item";
pub const SEED_VALUE: &str = "This is a test item";

#[derive(Debug, Default)]
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single startup record.
    pub fn seeded() -> Self {
        ItemStore {
            items: RwLock::new(vec![Item::new(SEED_NAME, SEED_VALUE).with_id(1)]),
        }
    }

    // Items are plain values, a panicking writer cannot leave them half-built.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.read().len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn list(&self) -> Vec<Item> {
        self.read().clone()
    }

    pub fn find_by_id(&self, id: i64) -> Result<Item, StoreError> {
        self.read()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Stores `item` under a freshly assigned id, ignoring whatever id it carried.
    pub fn append(&self, item: Item) -> Item {
        let mut items = self.write();
        let item = item.with_id(items.len() as i64 + 1);
        items.push(item.clone());
        item
    }

    /// Replaces every field of the first item with `id`; the id itself is kept.
    pub fn replace_by_id(&self, id: i64, fields: Item) -> Result<Item, StoreError> {
        let mut items = self.write();
        let slot = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = fields.with_id(id);
        Ok(slot.clone())
    }

    pub fn remove_by_id(&self, id: i64) -> Result<(), StoreError> {
        let mut items = self.write();
        let pos = items
            .iter()
            .position(|item| item.id == id)
            .ok_or(StoreError::NotFound(id))?;
        items.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_has_one_item() {
        let store = ItemStore::seeded();
        assert_eq!(
            store.list(),
            vec![Item::new(SEED_NAME, SEED_VALUE).with_id(1)]
        );
    }

    #[test]
    fn append_assigns_len_plus_one() {
        let store = ItemStore::new();
        assert!(store.is_empty());

        let a = store.append(Item::new("a", "1").with_id(99));
        let b = store.append(Item::new("b", "2"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn find_returns_first_match() {
        let store = ItemStore::seeded();
        store.append(Item::new("a", "1"));
        store.remove_by_id(1).unwrap();
        // the store now holds id 2 only, so the next append collides with it
        store.append(Item::new("b", "2"));

        assert_eq!(store.find_by_id(2).unwrap().name, "a");
        assert!(matches!(store.find_by_id(5), Err(StoreError::NotFound(5))));
    }

    #[test]
    fn replace_keeps_id() {
        let store = ItemStore::seeded();
        let updated = store
            .replace_by_id(1, Item::new("new", "").with_id(42))
            .unwrap();

        assert_eq!(updated, Item::new("new", "").with_id(1));
        assert_eq!(store.find_by_id(1).unwrap(), updated);
    }

    #[test]
    fn replace_missing_leaves_store_alone() {
        let store = ItemStore::seeded();
        let before = store.list();

        assert!(store.replace_by_id(3, Item::new("x", "y")).is_err());
        assert_eq!(store.list(), before);
    }

    #[test]
    fn remove_preserves_order() {
        let store = ItemStore::new();
        for name in ["a", "b", "c"] {
            store.append(Item::new(name, ""));
        }

        store.remove_by_id(2).unwrap();
        let names: Vec<_> = store.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a", "c"]);

        assert!(matches!(store.remove_by_id(2), Err(StoreError::NotFound(2))));
        assert_eq!(store.len(), 2);
    }
}
