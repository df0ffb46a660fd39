//! Whole-tree copy and comparison.
//!
//! Both walk an explicit work list, like teardown, so their stack use does not grow
//! with nesting depth.

use std::slice;

use indexmap::map;

use crate::array::Array;
use crate::data::Data;
use crate::value::Value;

enum Children<'a> {
    Items(slice::Iter<'a, Value>),
    Entries(map::Iter<'a, String, Value>),
}

impl<'a> Iterator for Children<'a> {
    type Item = (Option<&'a str>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Items(items) => items.next().map(|value| (None, value)),
            Self::Entries(entries) => entries
                .next()
                .map(|(key, value)| (Some(key.as_str()), value)),
        }
    }
}

/// A container whose copy is still being filled.
struct Frame<'a> {
    key: Option<&'a str>,
    children: Children<'a>,
    copy: Value,
}

impl<'a> Frame<'a> {
    fn open(key: Option<&'a str>, source: &'a Value) -> Option<Self> {
        let (children, copy) = match source {
            Value::Array(array) => (
                Children::Items(array.iter()),
                Value::Array(Array::with_capacity(array.len())),
            ),
            Value::Data(data) => (
                Children::Entries(data.iter()),
                Value::Data(Data::with_capacity(data.len())),
            ),
            _ => return None,
        };
        Some(Self {
            key,
            children,
            copy,
        })
    }

    fn attach(&mut self, key: Option<&str>, child: Value) {
        match (&mut self.copy, key) {
            (Value::Array(array), _) => array.push(child),
            (Value::Data(data), Some(key)) => {
                data.insert(key, child);
            }
            _ => {}
        }
    }
}

/// Deep-copies `root`.
pub(crate) fn copy_tree(root: &Value) -> Value {
    let Some(frame) = Frame::open(None, root) else {
        return root.clone();
    };
    let mut stack = vec![frame];
    let mut copied = None;
    while let Some(top) = stack.last_mut() {
        match top.children.next() {
            Some((key, child)) => match Frame::open(key, child) {
                Some(frame) => stack.push(frame),
                None => top.attach(key, child.clone()),
            },
            None => {
                if let Some(done) = stack.pop() {
                    match stack.last_mut() {
                        Some(parent) => parent.attach(done.key, done.copy),
                        None => copied = Some(done.copy),
                    }
                }
            }
        }
    }
    copied.unwrap_or_default()
}

/// Structural equality of two trees. Data entries match by key, ignoring order.
pub(crate) fn trees_equal(left: &Value, right: &Value) -> bool {
    let mut pending = vec![(left, right)];
    while let Some(pair) = pending.pop() {
        match pair {
            (Value::Array(a), Value::Array(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                pending.extend(a.iter().zip(b.iter()));
            }
            (Value::Data(a), Value::Data(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                for (key, value) in a {
                    let Ok(other) = b.get(key) else {
                        return false;
                    };
                    pending.push((value, other));
                }
            }
            (Value::Null, Value::Null) => {}
            (Value::Bool(a), Value::Bool(b)) if a == b => {}
            (Value::Int(a), Value::Int(b)) if a == b => {}
            // Bit equality keeps NaN equal to itself.
            (Value::Float(a), Value::Float(b)) if a.to_bits() == b.to_bits() => {}
            (Value::String(a), Value::String(b)) | (Value::Function(a), Value::Function(b))
                if a == b => {}
            _ => return false,
        }
    }
    true
}
