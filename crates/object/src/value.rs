//! <https://262.ecma-international.org/14.0/#sec-ecmascript-language-types>

use std::fmt;

use crate::Symbol;

/// The values a property can hold
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Symbol(Symbol),
}

impl Value {
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// <https://262.ecma-international.org/14.0/#sec-samevalue>
    #[must_use]
    pub fn same_value(x: &Self, y: &Self) -> bool {
        match (x, y) {
            (Self::Number(x), Self::Number(y)) => {
                if x.is_nan() && y.is_nan() {
                    return true;
                }

                // +0 and -0 compare equal with "==" but are not the same value
                x == y && x.is_sign_negative() == y.is_sign_negative()
            },
            _ => x == y,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}
