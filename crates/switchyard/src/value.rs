//! Typed value storage for arguments.
//!
//! Every argument is declared with a [`ValueKind`] and binds parsed
//! [`Value`]s at parse time. The [`ArgType`] trait maps Rust types onto
//! kinds and provides the safe downcast back out: a mismatch yields `None`,
//! never a panic.

use std::fmt;

/// The declared type of an argument's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Arbitrary text, accepted verbatim.
    Str,
}

/// A bound argument value.
///
/// Closed union over the supported widths. Values are produced by
/// [`ValueKind::parse`] during a parse pass and read back out through
/// [`ArgType::from_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 32-bit floating point.
    F32(f32),
    /// 64-bit floating point.
    F64(f64),
    /// Text.
    Str(String),
}

impl ValueKind {
    /// Parses `text` into a value of this kind.
    ///
    /// Numeric kinds use strict whole-string conversion: trailing garbage
    /// and out-of-range input both fail. `Str` accepts anything verbatim.
    /// The error is the underlying parse message.
    pub fn parse(self, text: &str) -> Result<Value, String> {
        match self {
            ValueKind::I8 => text.parse().map(Value::I8).map_err(|e| e.to_string()),
            ValueKind::I16 => text.parse().map(Value::I16).map_err(|e| e.to_string()),
            ValueKind::I32 => text.parse().map(Value::I32).map_err(|e| e.to_string()),
            ValueKind::I64 => text.parse().map(Value::I64).map_err(|e| e.to_string()),
            ValueKind::U8 => text.parse().map(Value::U8).map_err(|e| e.to_string()),
            ValueKind::U16 => text.parse().map(Value::U16).map_err(|e| e.to_string()),
            ValueKind::U32 => text.parse().map(Value::U32).map_err(|e| e.to_string()),
            ValueKind::U64 => text.parse().map(Value::U64).map_err(|e| e.to_string()),
            ValueKind::F32 => text.parse().map(Value::F32).map_err(|e| e.to_string()),
            ValueKind::F64 => text.parse().map(Value::F64).map_err(|e| e.to_string()),
            ValueKind::Str => Ok(Value::Str(text.to_string())),
        }
    }
}

impl Value {
    /// Returns the kind this value was parsed as.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::I8(_) => ValueKind::I8,
            Value::I16(_) => ValueKind::I16,
            Value::I32(_) => ValueKind::I32,
            Value::I64(_) => ValueKind::I64,
            Value::U8(_) => ValueKind::U8,
            Value::U16(_) => ValueKind::U16,
            Value::U32(_) => ValueKind::U32,
            Value::U64(_) => ValueKind::U64,
            Value::F32(_) => ValueKind::F32,
            Value::F64(_) => ValueKind::F64,
            Value::Str(_) => ValueKind::Str,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Rust types usable as argument value types.
///
/// Sealed: the set of kinds is closed. `from_value` is the safe downcast:
/// it returns `None` when the stored value was declared as a different
/// kind.
pub trait ArgType: sealed::Sealed + Sized {
    /// The kind an argument of this type is declared with.
    const KIND: ValueKind;

    /// Extracts a typed copy out of a stored value, if the kinds match.
    fn from_value(value: &Value) -> Option<Self>;

    /// Wraps a typed value for storage.
    fn into_value(self) -> Value;
}

macro_rules! arg_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl ArgType for $ty {
                const KIND: ValueKind = ValueKind::$variant;

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::$variant(self)
                }
            }
        )*
    };
}

arg_type! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_integers_strictly() {
        assert_eq!(ValueKind::I32.parse("42"), Ok(Value::I32(42)));
        assert_eq!(ValueKind::I32.parse("-7"), Ok(Value::I32(-7)));
        assert!(ValueKind::I32.parse("42abc").is_err());
        assert!(ValueKind::I32.parse("4 2").is_err());
        assert!(ValueKind::I32.parse("").is_err());
    }

    #[test]
    fn parse_respects_width() {
        assert_eq!(ValueKind::I16.parse("32767"), Ok(Value::I16(32767)));
        assert!(ValueKind::I16.parse("32768").is_err());
        assert!(ValueKind::U8.parse("-1").is_err());
        assert!(ValueKind::U8.parse("256").is_err());
    }

    #[test]
    fn parse_floats() {
        assert_eq!(ValueKind::F64.parse("2.5"), Ok(Value::F64(2.5)));
        assert!(ValueKind::F64.parse("2.5x").is_err());
    }

    #[test]
    fn parse_text_verbatim() {
        assert_eq!(
            ValueKind::Str.parse("anything at all"),
            Ok(Value::Str("anything at all".to_string()))
        );
    }

    #[test]
    fn downcast_matches_kind_only() {
        let value = Value::I64(9);
        assert_eq!(i64::from_value(&value), Some(9));
        assert_eq!(i32::from_value(&value), None);
        assert_eq!(String::from_value(&value), None);

        let text = Value::Str("hi".to_string());
        assert_eq!(String::from_value(&text), Some("hi".to_string()));
        assert_eq!(u8::from_value(&text), None);
    }

    #[test]
    fn kind_round_trip() {
        assert_eq!(42i16.into_value().kind(), ValueKind::I16);
        assert_eq!("x".to_string().into_value().kind(), ValueKind::Str);
    }
}
