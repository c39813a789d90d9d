//! Ordered field map for record literals.
//!
//! [`RecordMap`] wraps an [`IndexMap`] so that fields are written in the order
//! they were inserted. Consumers read records positionally as often as by key,
//! so `name`, `definition`, `explanation` must always come out in that order.
//!
//! ## Examples
//!
//! ```rust
//! use docrecord::{RecordMap, RecordValue};
//!
//! let mut map = RecordMap::new();
//! map.insert("name", RecordValue::quoted("Basics"));
//! map.insert("types", RecordValue::List(Vec::new()));
//!
//! let keys: Vec<_> = map.keys().map(String::as_str).collect();
//! assert_eq!(keys, vec!["name", "types"]);
//! ```

use crate::RecordValue;
use indexmap::IndexMap;

/// An insertion-ordered map of field names to record values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecordMap(IndexMap<String, RecordValue>);

impl RecordMap {
    /// Creates an empty `RecordMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::RecordMap;
    ///
    /// let map = RecordMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        RecordMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        RecordMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a field. Re-inserting an existing key keeps its original
    /// position and returns the old value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use docrecord::{RecordMap, RecordValue};
    ///
    /// let mut map = RecordMap::new();
    /// assert!(map.insert("name", RecordValue::raw("a")).is_none());
    /// assert!(map.insert("name", RecordValue::raw("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: RecordValue) -> Option<RecordValue> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.0.get(key)
    }

    /// Returns the text of a string field, quoted or raw.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(RecordValue::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, RecordValue> {
        self.0.keys()
    }

    /// Returns an iterator over the fields, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, RecordValue> {
        self.0.iter()
    }
}

impl IntoIterator for RecordMap {
    type Item = (String, RecordValue);
    type IntoIter = indexmap::map::IntoIter<String, RecordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordMap {
    type Item = (&'a String, &'a RecordValue);
    type IntoIter = indexmap::map::Iter<'a, String, RecordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, RecordValue)> for RecordMap {
    fn from_iter<T: IntoIterator<Item = (String, RecordValue)>>(iter: T) -> Self {
        RecordMap(IndexMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = RecordMap::new();
        map.insert("name", RecordValue::raw("a"));
        map.insert("definition", RecordValue::raw("b"));
        map.insert("name", RecordValue::raw("c"));

        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "definition"]);
        assert_eq!(map.get_str("name"), Some("c"));
    }

    #[test]
    fn test_get_str_ignores_lists() {
        let mut map = RecordMap::new();
        map.insert("types", RecordValue::List(Vec::new()));
        assert_eq!(map.get_str("types"), None);
    }
}
