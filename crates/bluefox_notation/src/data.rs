//! Insertion-ordered keyed map of values.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map;
use tracing::trace;

use crate::error::{Error, Result};
use crate::release::teardown;
use crate::value::Value;

/// Map from unique string keys to [`Value`]s.
///
/// Lookup is by exact key (byte equality, no normalization) in O(1) average time.
/// Enumeration follows insertion order. Re-inserting an existing key replaces the
/// value but keeps the key's original position.
///
/// Equality ignores enumeration order: two datas are equal when they bind the same
/// keys to equal values.
#[derive(Clone, Default, PartialEq)]
pub struct Data {
    entries: IndexMap<String, Value>,
}

impl Data {
    /// Creates an empty data map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty data map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Binds `key` to `value`.
    ///
    /// A new key is appended to the enumeration order. An existing key keeps its
    /// position and the value it held is returned; dropping that return value
    /// releases it.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.get_mut(&key) {
            Some(slot) => {
                let previous = std::mem::replace(slot, value);
                trace!(key = %key, previous = %previous.kind(), "replaced data entry");
                Some(previous)
            }
            None => {
                self.entries.insert(key, value);
                None
            }
        }
    }

    /// Borrows the value bound to `key`.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Mutably borrows the value bound to `key` for in-place updates.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns true if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries
            .get_index(index)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the entry at `index` in insertion order, with a mutable value.
    #[must_use]
    pub fn get_index_mut(&mut self, index: usize) -> Option<(&str, &mut Value)> {
        self.entries
            .get_index_mut(index)
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns an iterator over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over the values in insertion order.
    pub fn values(&self) -> map::Values<'_, String, Value> {
        self.entries.values()
    }

    /// Returns an iterator over entries in insertion order.
    pub fn iter(&self) -> map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns an iterator over entries with mutable values, in insertion order.
    pub fn iter_mut(&mut self) -> map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Releases the map and everything nested inside it.
    pub fn release(mut self) {
        let released = teardown(self.take_entries().into_values().collect());
        trace!(released, "released data");
    }

    pub(crate) fn take_entries(&mut self) -> IndexMap<String, Value> {
        std::mem::take(&mut self.entries)
    }
}

impl Drop for Data {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            teardown(self.take_entries().into_values().collect());
        }
    }
}

impl fmt::Debug for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Data {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        data.extend(iter);
        data
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Data {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Data {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.take_entries().into_iter()
    }
}

impl<'a> IntoIterator for &'a Data {
    type Item = (&'a String, &'a Value);
    type IntoIter = map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
