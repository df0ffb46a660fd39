//! Self-describing value model for Bluefox Notation.
//!
//! This crate provides:
//! - [`Value`] - The tagged value type (null, bool, int, float, string, function, array, data)
//! - [`Array`] - Ordered, append-only sequence of values
//! - [`Data`] - Insertion-ordered map from unique string keys to values
//! - [`Kind`] - Variant tags and their numeric codes
//! - [`Error`] - Recoverable access errors with context
//! - [`IntoData`] / [`FromData`] - Record conversion traits
//!
//! Every value has exactly one owner. Containers own their children, and releasing
//! (or dropping) a root frees the whole tree.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod array;
pub mod convert;
pub mod data;
pub mod error;
pub mod kind;
pub mod path;
mod release;
mod tree;
pub mod value;

pub use array::Array;
pub use convert::{FromData, IntoData};
pub use data::Data;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use kind::Kind;
pub use value::Value;
