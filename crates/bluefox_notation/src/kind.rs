//! Variant tags for notation values.

use std::fmt;

/// The tag of a [`Value`](crate::Value).
///
/// Exactly one kind per value; the kind decides which payload accessor is valid.
/// Discriminants match the tag codes used at the C boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Kind {
    /// No payload.
    Null = 0,
    /// Boolean payload.
    Bool = 1,
    /// 64-bit signed integer payload.
    Int = 2,
    /// 64-bit floating point payload.
    Float = 3,
    /// Owned string payload.
    String = 4,
    /// Owned function-identifier payload.
    Function = 5,
    /// Owned [`Array`](crate::Array) payload.
    Array = 6,
    /// Owned [`Data`](crate::Data) payload.
    Data = 7,
}

impl Kind {
    /// All kinds, in tag-code order.
    pub const ALL: [Kind; 8] = [
        Kind::Null,
        Kind::Bool,
        Kind::Int,
        Kind::Float,
        Kind::String,
        Kind::Function,
        Kind::Array,
        Kind::Data,
    ];

    /// Returns the numeric tag code for this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up a kind by its numeric tag code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Null),
            1 => Some(Self::Bool),
            2 => Some(Self::Int),
            3 => Some(Self::Float),
            4 => Some(Self::String),
            5 => Some(Self::Function),
            6 => Some(Self::Array),
            7 => Some(Self::Data),
            _ => None,
        }
    }

    /// Returns true for kinds that hold nested values.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Data)
    }

    /// Lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Function => "function",
            Self::Array => "array",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
