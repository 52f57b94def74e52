/*!
The typed values a switch can hold, and the coercion of raw command-line
tokens into them.
 */

use core::fmt::{self, Display};
use core::str::FromStr;

use lazy_format::lazy_format;

/// The declared type of a switch's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The following token, verbatim
    String,

    /// The following token, parsed as a base-10 integer
    Int,

    /// The following token, parsed as a floating point number
    Float,

    /// A presence flag. Never consumes a following token.
    Bool,
}

impl Kind {
    /// True if switches of this kind take a value token from the command line.
    #[inline]
    #[must_use]
    pub const fn takes_value(self) -> bool {
        !matches!(self, Kind::Bool)
    }

    /// The conventional placeholder shown in usage messages for this kind.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Kind::String => "VALUE",
            Kind::Int => "INT",
            Kind::Float => "NUMBER",
            Kind::Bool => "",
        }
    }

    /**
    Coerce a raw token into a value of this kind. On failure, the returned
    string describes why the token was rejected; it is wrapped into a
    [`ParseError`][crate::errors::ParseError] by the caller, which knows which
    switch was being handled.

    [`Kind::Bool`] ignores the token entirely and always produces `true`.
    */
    pub fn coerce(self, token: &str) -> Result<Value, String> {
        match self {
            Kind::String => Ok(Value::String(token.to_owned())),
            Kind::Int => parsed(token).map(Value::Int),
            Kind::Float => parsed(token).map(Value::Float),
            Kind::Bool => Ok(Value::Bool(true)),
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::String => "string",
            Kind::Int => "integer",
            Kind::Float => "float",
            Kind::Bool => "bool",
        })
    }
}

#[inline]
fn parsed<T>(token: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|err: T::Err| err.to_string())
}

/// The value of a switch: either its declared default, or whatever was
/// parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// The kind of this value
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(f) => Some(f),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Get a printable form of this value, suitable for usage messages.
    /// Strings are quoted; everything else is printed plainly.
    pub fn printable(&self) -> impl Display + '_ {
        lazy_format!(match (self) {
            Value::String(s) => "{s:?}",
            Value::Int(i) => "{i}",
            Value::Float(x) => "{x}",
            Value::Bool(b) => "{b}",
        })
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => Display::fmt(i, f),
            Value::Float(x) => Display::fmt(x, f),
            Value::Bool(b) => Display::fmt(b, f),
        }
    }
}

macro_rules! from_primitive {
    ($($type:ty => $variant:ident $(as $cast:ty)?,)*) => {
        $(
            impl From<$type> for Value {
                #[inline]
                fn from(value: $type) -> Self {
                    Value::$variant((value $(as $cast)?).into())
                }
            }
        )*
    };
}

from_primitive! {
    &str => String,
    String => String,
    i64 => Int,
    i32 => Int as i64,
    u16 => Int as i64,
    f64 => Float,
    f32 => Float as f64,
    bool => Bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_coercion() {
        assert_eq!(Kind::Int.coerce("42"), Ok(Value::Int(42)));
        assert_eq!(Kind::Int.coerce("+7"), Ok(Value::Int(7)));
        assert!(Kind::Int.coerce("abc").is_err());
        assert!(Kind::Int.coerce("4.5").is_err());
        assert!(Kind::Int.coerce("").is_err());
    }

    #[test]
    fn float_coercion() {
        assert_eq!(Kind::Float.coerce("2.5"), Ok(Value::Float(2.5)));
        assert_eq!(Kind::Float.coerce("1e3"), Ok(Value::Float(1000.0)));
        assert_eq!(Kind::Float.coerce("3"), Ok(Value::Float(3.0)));
        assert!(Kind::Float.coerce("1.2.3").is_err());
    }

    #[test]
    fn string_and_bool_coercion() {
        assert_eq!(
            Kind::String.coerce("some file.txt"),
            Ok(Value::String("some file.txt".to_owned()))
        );

        // Bools are presence flags; the token is irrelevant
        assert_eq!(Kind::Bool.coerce("false"), Ok(Value::Bool(true)));
    }

    #[test]
    fn conversions_pick_the_right_kind() {
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from(4567u16), Value::Int(4567));
        assert_eq!(Value::from(0.5f32), Value::Float(0.5));
        assert_eq!(Value::from(false).kind(), Kind::Bool);
    }

    #[test]
    fn printable_quotes_strings() {
        assert_eq!(Value::from("a b").printable().to_string(), "\"a b\"");
        assert_eq!(Value::from(12i64).printable().to_string(), "12");
        assert_eq!(Value::from("a b").to_string(), "a b");
    }

    #[test]
    fn only_bool_is_value_free() {
        assert!(Kind::String.takes_value());
        assert!(Kind::Int.takes_value());
        assert!(Kind::Float.takes_value());
        assert!(!Kind::Bool.takes_value());
        assert_eq!(Kind::Bool.placeholder(), "");
    }
}
