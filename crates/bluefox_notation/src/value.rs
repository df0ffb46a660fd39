//! Core value type for notation data.

use std::fmt;

use crate::array::Array;
use crate::data::Data;
use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::tree::{copy_tree, trees_equal};

/// A self-describing notation value.
///
/// Each value owns its payload exclusively. Container payloads ([`Array`] and [`Data`])
/// own every nested value, so dropping or releasing the root frees the whole tree.
/// Values never alias one another: building a container always moves a finished child
/// into its parent.
///
/// Cloning, comparing and dropping walk the tree iteratively and accept any nesting
/// depth. `Debug` output recurses once per level, so formatting very deep trees can
/// exhaust the stack.
#[derive(Default)]
pub enum Value {
    /// The null value (no payload).
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Owned string.
    String(String),
    /// Owned identifier naming a callable defined elsewhere.
    Function(String),
    /// Ordered sequence of values.
    Array(Array),
    /// Insertion-ordered map from string keys to values.
    Data(Data),
}

impl Value {
    /// Creates a string value, copying the given text.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// Creates a function-reference value, copying the given identifier.
    #[must_use]
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function(name.into())
    }

    /// Returns the kind (tag) of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Null => Kind::Null,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) => Kind::Int,
            Self::Float(_) => Kind::Float,
            Self::String(_) => Kind::String,
            Self::Function(_) => Kind::Function,
            Self::Array(_) => Kind::Array,
            Self::Data(_) => Kind::Data,
        }
    }

    /// Returns true if this value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if this value holds nested values.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Attempts to extract a boolean value.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer value. Floats are never converted.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float value. Integers are never converted.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string reference.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a function identifier.
    #[must_use]
    pub fn as_function(&self) -> Option<&str> {
        match self {
            Self::Function(name) => Some(name),
            _ => None,
        }
    }

    /// Attempts to extract an array reference.
    #[must_use]
    pub const fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a mutable array reference.
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Attempts to extract a data reference.
    #[must_use]
    pub const fn as_data(&self) -> Option<&Data> {
        match self {
            Self::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to extract a mutable data reference.
    #[must_use]
    pub fn as_data_mut(&mut self) -> Option<&mut Data> {
        match self {
            Self::Data(d) => Some(d),
            _ => None,
        }
    }

    /// Reads a boolean, or reports a type mismatch.
    pub fn get_bool(&self) -> Result<bool> {
        self.as_bool().ok_or_else(|| self.mismatch(Kind::Bool))
    }

    /// Reads an integer, or reports a type mismatch.
    pub fn get_int(&self) -> Result<i64> {
        self.as_int().ok_or_else(|| self.mismatch(Kind::Int))
    }

    /// Reads a float, or reports a type mismatch.
    pub fn get_float(&self) -> Result<f64> {
        self.as_float().ok_or_else(|| self.mismatch(Kind::Float))
    }

    /// Reads a string, or reports a type mismatch.
    pub fn get_string(&self) -> Result<&str> {
        self.as_str().ok_or_else(|| self.mismatch(Kind::String))
    }

    /// Reads a function identifier, or reports a type mismatch.
    pub fn get_function_ref(&self) -> Result<&str> {
        self.as_function().ok_or_else(|| self.mismatch(Kind::Function))
    }

    /// Borrows the array payload, or reports a type mismatch.
    pub fn get_array(&self) -> Result<&Array> {
        self.as_array().ok_or_else(|| self.mismatch(Kind::Array))
    }

    /// Mutably borrows the array payload, or reports a type mismatch.
    pub fn get_array_mut(&mut self) -> Result<&mut Array> {
        let actual = self.kind();
        self.as_array_mut()
            .ok_or_else(|| Error::type_mismatch(Kind::Array, actual))
    }

    /// Borrows the data payload, or reports a type mismatch.
    pub fn get_data(&self) -> Result<&Data> {
        self.as_data().ok_or_else(|| self.mismatch(Kind::Data))
    }

    /// Mutably borrows the data payload, or reports a type mismatch.
    pub fn get_data_mut(&mut self) -> Result<&mut Data> {
        let actual = self.kind();
        self.as_data_mut()
            .ok_or_else(|| Error::type_mismatch(Kind::Data, actual))
    }

    /// Takes the array payload by value.
    ///
    /// On mismatch the original value is handed back untouched.
    pub fn into_array(self) -> std::result::Result<Array, Self> {
        match self {
            Self::Array(a) => Ok(a),
            other => Err(other),
        }
    }

    /// Takes the data payload by value.
    ///
    /// On mismatch the original value is handed back untouched.
    pub fn into_data(self) -> std::result::Result<Data, Self> {
        match self {
            Self::Data(d) => Ok(d),
            other => Err(other),
        }
    }

    fn mismatch(&self, expected: Kind) -> Error {
        Error::type_mismatch(expected, self.kind())
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Bool(*b),
            Self::Int(n) => Self::Int(*n),
            Self::Float(n) => Self::Float(*n),
            Self::String(s) => Self::String(s.clone()),
            Self::Function(name) => Self::Function(name.clone()),
            Self::Array(_) | Self::Data(_) => copy_tree(self),
        }
    }
}

// Floats compare by bit pattern so equality stays reflexive for NaN.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        trees_equal(self, other)
    }
}

impl Eq for Value {}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n:?}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Function(name) => write!(f, "<fn {name}>"),
            Self::Array(a) => write!(f, "{a:?}"),
            Self::Data(d) => write!(f, "{d:?}"),
        }
    }
}

// Convenience From implementations

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Data> for Value {
    fn from(d: Data) -> Self {
        Self::Data(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
