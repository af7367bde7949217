//! The values a deque holds.
//!
//! [`Value`] is a closed tagged variant: a fixed set of primitive kinds plus
//! two nested kinds, [`Object`] and [`Deque`]. Nested kinds own their
//! content, so a value tree has exactly one owner at every level and the
//! renderers can recurse with a plain `match`.
//!
//! Primitive kinds also have a word-sized raw form, the *datum*, available
//! through [`Value::datum`] and [`Value::from_datum`].

mod object;

pub use object::Object;

use crate::deque::Deque;
use crate::error::{DequeError, Result};
use core::fmt;

/// The kind of a [`Value`], with a stable numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ValueKind {
    /// Signed 8-bit integer.
    Int8 = 0,
    /// Unsigned 8-bit integer.
    UInt8 = 1,
    /// Signed 16-bit integer.
    Int16 = 2,
    /// Unsigned 16-bit integer.
    UInt16 = 3,
    /// Signed 32-bit integer.
    Int32 = 4,
    /// Unsigned 32-bit integer.
    UInt32 = 5,
    /// Signed 64-bit integer.
    Int64 = 6,
    /// Unsigned 64-bit integer.
    UInt64 = 7,
    /// Unicode scalar value.
    Char = 8,
    /// Boolean.
    Bool = 9,
    /// Owned string.
    String = 10,
    /// Single precision float.
    Float = 11,
    /// Double precision float.
    Double = 12,
    /// Nested key/value object.
    Object = 13,
    /// Nested deque.
    Deque = 14,
}

impl ValueKind {
    /// Returns the kind name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::UInt8 => "uint8",
            Self::Int16 => "int16",
            Self::UInt16 => "uint16",
            Self::Int32 => "int32",
            Self::UInt32 => "uint32",
            Self::Int64 => "int64",
            Self::UInt64 => "uint64",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Float => "float",
            Self::Double => "double",
            Self::Object => "object",
            Self::Deque => "deque",
        }
    }

    /// Returns the numeric code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for kinds that own other values.
    #[must_use]
    pub const fn is_nested(self) -> bool {
        matches!(self, Self::Object | Self::Deque)
    }

    /// Returns `true` for kinds that can be built from a raw datum.
    #[must_use]
    pub const fn is_primitive(self) -> bool {
        !matches!(self, Self::String | Self::Object | Self::Deque)
    }
}

impl TryFrom<u8> for ValueKind {
    type Error = DequeError;

    fn try_from(code: u8) -> Result<Self> {
        Ok(match code {
            0 => Self::Int8,
            1 => Self::UInt8,
            2 => Self::Int16,
            3 => Self::UInt16,
            4 => Self::Int32,
            5 => Self::UInt32,
            6 => Self::Int64,
            7 => Self::UInt64,
            8 => Self::Char,
            9 => Self::Bool,
            10 => Self::String,
            11 => Self::Float,
            12 => Self::Double,
            13 => Self::Object,
            14 => Self::Deque,
            other => return Err(DequeError::UnknownKind(other)),
        })
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value stored in a deque.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 8-bit integer.
    Int8(i8),
    /// Unsigned 8-bit integer.
    UInt8(u8),
    /// Signed 16-bit integer.
    Int16(i16),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Unicode scalar value.
    Char(char),
    /// Boolean.
    Bool(bool),
    /// Owned string.
    String(String),
    /// Single precision float.
    Float(f32),
    /// Double precision float.
    Double(f64),
    /// Nested key/value object, owned by this value.
    Object(Object),
    /// Nested deque, owned by this value.
    Deque(Deque),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int8(_) => ValueKind::Int8,
            Self::UInt8(_) => ValueKind::UInt8,
            Self::Int16(_) => ValueKind::Int16,
            Self::UInt16(_) => ValueKind::UInt16,
            Self::Int32(_) => ValueKind::Int32,
            Self::UInt32(_) => ValueKind::UInt32,
            Self::Int64(_) => ValueKind::Int64,
            Self::UInt64(_) => ValueKind::UInt64,
            Self::Char(_) => ValueKind::Char,
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Object(_) => ValueKind::Object,
            Self::Deque(_) => ValueKind::Deque,
        }
    }

    /// Returns `true` if this value owns other values.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.kind().is_nested()
    }

    /// Returns `true` for a nested value with no content.
    ///
    /// Primitive values are never empty.
    #[must_use]
    pub fn is_empty_nested(&self) -> bool {
        match self {
            Self::Object(object) => object.is_empty(),
            Self::Deque(deque) => deque.is_empty(),
            _ => false,
        }
    }

    /// Builds a primitive value from its word-sized raw datum.
    ///
    /// Signed kinds read the datum as a two's complement `i64`, `Bool` treats
    /// any non-zero datum as `true`, `Char` expects a Unicode scalar value and
    /// the float kinds take IEEE 754 bit patterns.
    pub fn from_datum(kind: ValueKind, datum: u64) -> Result<Self> {
        let out_of_range = || DequeError::DatumOutOfRange { kind, datum };
        #[allow(clippy::cast_possible_wrap)]
        let signed = datum as i64;
        Ok(match kind {
            ValueKind::Int8 => Self::Int8(i8::try_from(signed).map_err(|_| out_of_range())?),
            ValueKind::UInt8 => Self::UInt8(u8::try_from(datum).map_err(|_| out_of_range())?),
            ValueKind::Int16 => Self::Int16(i16::try_from(signed).map_err(|_| out_of_range())?),
            ValueKind::UInt16 => Self::UInt16(u16::try_from(datum).map_err(|_| out_of_range())?),
            ValueKind::Int32 => Self::Int32(i32::try_from(signed).map_err(|_| out_of_range())?),
            ValueKind::UInt32 => Self::UInt32(u32::try_from(datum).map_err(|_| out_of_range())?),
            ValueKind::Int64 => Self::Int64(signed),
            ValueKind::UInt64 => Self::UInt64(datum),
            ValueKind::Char => Self::Char(
                u32::try_from(datum)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(out_of_range)?,
            ),
            ValueKind::Bool => Self::Bool(datum != 0),
            ValueKind::Float => Self::Float(f32::from_bits(
                u32::try_from(datum).map_err(|_| out_of_range())?,
            )),
            ValueKind::Double => Self::Double(f64::from_bits(datum)),
            ValueKind::String | ValueKind::Object | ValueKind::Deque => {
                return Err(DequeError::NotPrimitive { kind });
            }
        })
    }

    /// Returns the word-sized raw datum of a primitive value.
    ///
    /// Returns `None` for strings and nested values.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn datum(&self) -> Option<u64> {
        match self {
            Self::Int8(v) => Some(i64::from(*v) as u64),
            Self::UInt8(v) => Some(u64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v) as u64),
            Self::UInt16(v) => Some(u64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v) as u64),
            Self::UInt32(v) => Some(u64::from(*v)),
            Self::Int64(v) => Some(*v as u64),
            Self::UInt64(v) => Some(*v),
            Self::Char(c) => Some(u64::from(u32::from(*c))),
            Self::Bool(b) => Some(u64::from(*b)),
            Self::Float(v) => Some(u64::from(v.to_bits())),
            Self::Double(v) => Some(v.to_bits()),
            Self::String(_) | Self::Object(_) | Self::Deque(_) => None,
        }
    }

    /// Returns the value as an `i64` if it is an integer that fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(v) => Some(i64::from(*v)),
            Self::UInt8(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::UInt16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::UInt32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            Self::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value as an `f64` if it is a float.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the boolean payload.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the character payload.
    #[must_use]
    pub const fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the string payload.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested object.
    #[must_use]
    pub const fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the nested deque.
    #[must_use]
    pub const fn as_deque(&self) -> Option<&Deque> {
        match self {
            Self::Deque(deque) => Some(deque),
            _ => None,
        }
    }

    /// Consumes the value and returns the nested deque.
    #[must_use]
    pub fn into_deque(self) -> Option<Deque> {
        match self {
            Self::Deque(deque) => Some(deque),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    char => Char,
    bool => Bool,
    String => String,
    f32 => Float,
    f64 => Double,
    Object => Object,
    Deque => Deque,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}
