//! Path addressing into nested values.
//!
//! A path is a sequence of segments separated by `.`, `[` or `]`, so `a.b[1].c`,
//! `a.b.1.c` and `a[b][1][c]` all name the same location. Empty segments are
//! skipped. Segments are otherwise taken verbatim: whitespace is part of a key, so
//! `a. b` looks up the key `" b"`.
//!
//! A segment made only of ASCII digits indexes an array (zero-based); signs and
//! whitespace are not accepted there. Every segment keys a data map, numeric or not.

use crate::data::Data;
use crate::error::{Error, ErrorContext, Result};
use crate::kind::Kind;
use crate::value::Value;

fn segments(path: &str) -> Result<Vec<&str>> {
    let segments: Vec<&str> = path
        .split(['.', '[', ']'])
        .filter(|s| !s.is_empty())
        .collect();
    if segments.is_empty() {
        return Err(Error::invalid_path(path));
    }
    Ok(segments)
}

/// Tracks the portion of a path already resolved, for error context.
#[derive(Default)]
struct Trail(String);

impl Trail {
    fn record(&mut self, segment: &str, indexed: bool) {
        if indexed {
            self.0.push('[');
            self.0.push_str(segment);
            self.0.push(']');
        } else {
            if !self.0.is_empty() {
                self.0.push('.');
            }
            self.0.push_str(segment);
        }
    }

    fn attach(&self, err: Error) -> Error {
        let context = ErrorContext::new().with_operation("lookup");
        if self.0.is_empty() {
            err.with_context(context)
        } else {
            err.with_context(context.with_path(self.0.clone()))
        }
    }
}

/// Array position named by `segment`, if it is made only of ASCII digits.
///
/// Digit strings too large for `usize` map to `usize::MAX`, which is always out of
/// bounds.
fn index(segment: &str) -> Option<usize> {
    if segment.bytes().all(|b| b.is_ascii_digit()) {
        Some(segment.parse().unwrap_or(usize::MAX))
    } else {
        None
    }
}

fn expected_for(segment: &str) -> Kind {
    if index(segment).is_some() {
        Kind::Array
    } else {
        Kind::Data
    }
}

fn step<'v>(current: &'v Value, segment: &str) -> Result<(&'v Value, bool)> {
    match current {
        Value::Data(data) => Ok((data.get(segment)?, false)),
        Value::Array(array) => match index(segment) {
            Some(position) => Ok((array.get(position)?, true)),
            None => Err(Error::type_mismatch(Kind::Data, Kind::Array)),
        },
        other => Err(Error::type_mismatch(expected_for(segment), other.kind())),
    }
}

fn step_mut<'v>(current: &'v mut Value, segment: &str) -> Result<(&'v mut Value, bool)> {
    let actual = current.kind();
    match current {
        Value::Data(data) => Ok((data.get_mut(segment)?, false)),
        Value::Array(array) => match index(segment) {
            Some(position) => Ok((array.get_mut(position)?, true)),
            None => Err(Error::type_mismatch(Kind::Data, Kind::Array)),
        },
        _ => Err(Error::type_mismatch(expected_for(segment), actual)),
    }
}

fn walk<'v>(mut current: &'v Value, rest: &[&str], trail: &mut Trail) -> Result<&'v Value> {
    for segment in rest {
        let (next, indexed) = step(current, segment).map_err(|e| trail.attach(e))?;
        trail.record(segment, indexed);
        current = next;
    }
    Ok(current)
}

fn walk_mut<'v>(
    mut current: &'v mut Value,
    rest: &[&str],
    trail: &mut Trail,
) -> Result<&'v mut Value> {
    for segment in rest {
        let (next, indexed) = step_mut(current, segment).map_err(|e| trail.attach(e))?;
        trail.record(segment, indexed);
        current = next;
    }
    Ok(current)
}

impl Value {
    /// Resolves `path` starting at this value.
    ///
    /// Errors carry the portion of the path resolved before the failing step.
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        let segments = segments(path)?;
        walk(self, &segments, &mut Trail::default())
    }

    /// Resolves `path` starting at this value, for in-place updates.
    pub fn lookup_mut(&mut self, path: &str) -> Result<&mut Value> {
        let segments = segments(path)?;
        walk_mut(self, &segments, &mut Trail::default())
    }
}

impl Data {
    /// Resolves `path`, whose first segment keys this map.
    pub fn lookup(&self, path: &str) -> Result<&Value> {
        let segments = segments(path)?;
        let mut trail = Trail::default();
        let head = self.get(segments[0]).map_err(|e| trail.attach(e))?;
        trail.record(segments[0], false);
        walk(head, &segments[1..], &mut trail)
    }

    /// Resolves `path`, whose first segment keys this map, for in-place updates.
    pub fn lookup_mut(&mut self, path: &str) -> Result<&mut Value> {
        let segments = segments(path)?;
        let mut trail = Trail::default();
        let head = self.get_mut(segments[0]).map_err(|e| trail.attach(e))?;
        trail.record(segments[0], false);
        walk_mut(head, &segments[1..], &mut trail)
    }
}
