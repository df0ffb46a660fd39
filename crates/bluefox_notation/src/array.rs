//! Ordered, append-only sequence of values.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::release::teardown;
use crate::value::Value;

/// Ordered sequence of [`Value`]s addressed by zero-based index.
///
/// Pushing moves the value in; the array owns it from then on. Growth is geometric,
/// so pushes are amortized O(1). Dropping, cloning and comparing walk nested elements
/// iteratively, so deeply nested trees do not recurse on the call stack.
#[derive(Clone, Default, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a value, taking ownership of it.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    /// Borrows the element at `index`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        let length = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, length))
    }

    /// Mutably borrows the element at `index` for in-place updates.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Value> {
        let length = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_bounds(index, length))
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Returns an iterator over the elements in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Returns a mutable iterator over the elements in push order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    /// Releases the array and everything nested inside it.
    pub fn release(mut self) {
        let released = teardown(self.take_items());
        trace!(released, "released array");
    }

    pub(crate) fn take_items(&mut self) -> Vec<Value> {
        std::mem::take(&mut self.items)
    }
}

impl Drop for Array {
    fn drop(&mut self) {
        if !self.items.is_empty() {
            teardown(self.take_items());
        }
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        self.items.extend(iter.into_iter().map(Into::into));
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.take_items().into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
