//! Serialized List Model
//!
//! The in-memory side of a list field: an ordered list of items plus the
//! JSON encoding contract shared with the server-rendered hidden input.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Ordered list of items backing one form field.
///
/// Items are positional; duplicates are allowed. The serialized form is a
/// JSON array, and an unreadable serialized value always falls back to the
/// empty list rather than surfacing an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ListField<T> {
    items: Vec<T>,
}

impl<T> Default for ListField<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ListField<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item at the tail.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove the item at `index`, shifting later items left.
    ///
    /// Out-of-range indexes are a no-op; the UI only hands out indexes that
    /// were valid at the most recent render, but the model stays total.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Edit the item at `index` in place. Returns whether the index was valid.
    pub fn update(&mut self, index: usize, edit: impl FnOnce(&mut T)) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                edit(item);
                true
            }
            None => false,
        }
    }
}

impl<T: Serialize + DeserializeOwned> ListField<T> {
    /// Decode a serialized value, treating anything unreadable as empty.
    ///
    /// Empty and whitespace-only input means "no data yet"; malformed input
    /// is recovered as the empty list and never reported.
    pub fn from_serialized(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::new();
        }
        Self {
            items: serde_json::from_str(raw).unwrap_or_default(),
        }
    }

    /// Encode the list as JSON array text. The empty list encodes as `"[]"`,
    /// never as the empty string.
    pub fn serialized(&self) -> String {
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }
}

impl ListField<String> {
    /// Trim `raw` and append it; whitespace-only input is ignored.
    ///
    /// Returns whether an item was actually added.
    pub fn push_trimmed(&mut self, raw: &str) -> bool {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }
}


// proptest's rand stack does not build for wasm32-unknown-unknown; the
// round-trip law runs on the host only.
#[cfg(all(test, not(target_arch = "wasm32")))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn serialize_round_trip_preserves_order_and_content(items in prop::collection::vec(".*", 0..16)) {
            let field = ListField { items };
            let decoded = ListField::<String>::from_serialized(&field.serialized());
            prop_assert_eq!(decoded, field);
        }
    }
}
