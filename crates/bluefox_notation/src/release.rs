//! Tree teardown.
//!
//! Containers are drained onto an explicit work list before they drop, so releasing a
//! tree never recurses once per nesting level.

use tracing::trace;

use crate::value::Value;

/// Releases every value in `pending` and everything nested inside them.
///
/// Returns the number of values released.
pub(crate) fn teardown(mut pending: Vec<Value>) -> usize {
    let mut released = 0;
    while let Some(value) = pending.pop() {
        released += 1;
        match value {
            Value::Array(mut array) => pending.extend(array.take_items()),
            Value::Data(mut data) => pending.extend(data.take_entries().into_values()),
            _ => {}
        }
    }
    released
}

impl Value {
    /// Releases this value and, for containers, every value nested inside it.
    ///
    /// Consumes the root, so a value that has been released (or moved into a parent)
    /// cannot be released again.
    pub fn release(self) {
        let released = teardown(vec![self]);
        trace!(released, "released value tree");
    }
}
