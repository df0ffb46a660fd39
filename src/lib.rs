//! Bluefox - Notation value model
//!
//! This crate re-exports both layers of the Bluefox system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: bluefox_ffi      - C ABI accessors over opaque handles
//! Layer 0: bluefox_notation - Value, Array, Data, errors, path lookup
//! ```

pub use bluefox_ffi as ffi;
pub use bluefox_notation as notation;
