//! C ABI accessor layer for Bluefox Notation values.
//!
//! Exposes the value model to independently compiled callers as flat `extern "C"`
//! functions over opaque handles. The matching declarations live in
//! `include/bluefox_notation.h`.
//!
//! # Ownership
//!
//! - Constructors (`bluefox_new_*`) return *owned* handles.
//! - `bluefox_array_push`, `bluefox_data_insert` and the container-wrapping constructors
//!   consume the handle they are given, but only when they return `Ok` (or a non-null
//!   handle). The consumed handle is freed at once.
//! - A value cannot be pushed or inserted into a container it owns, for example an array
//!   borrowed out of that same value. Such calls return `InvalidOwnership`.
//! - Accessors (`*_get*`, `bluefox_data_entry`, `bluefox_value_lookup`) write *borrowed*
//!   handles that point into their parent. They may be read or mutated in place, never
//!   released, and become invalid after the next push/insert on that parent.
//! - `bluefox_release_*` frees an owned root and everything beneath it. Null is ignored.
//!
//! Failures are reported through [`BluefoxStatus`] (or a null/-1 return where a function
//! has no status) and logged at `debug` level through `tracing`.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod data;
mod handle;
pub mod status;
pub mod value;

pub use array::*;
pub use data::*;
pub use status::BluefoxStatus;
pub use value::*;
