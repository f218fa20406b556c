use std::fmt;

use crate::Symbol;

/// <https://262.ecma-international.org/14.0/#sec-object-type>
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Symbol(_) => None,
        }
    }

    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::String(_) => None,
        }
    }

    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }

    /// Returns the numeric value of the key if it is an array index
    ///
    /// <https://262.ecma-international.org/14.0/#array-index>
    #[must_use]
    pub fn array_index(&self) -> Option<u32> {
        let Self::String(s) = self else {
            return None;
        };

        // Only the canonical form counts, "01" or "+1" are ordinary keys
        let has_leading_zero = s.len() > 1 && s.starts_with('0');
        if s.is_empty() || has_leading_zero || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        // 2^32 - 1 itself is not a valid index
        s.parse::<u32>().ok().filter(|&index| index != u32::MAX)
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for PropertyKey {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<u32> for PropertyKey {
    fn from(value: u32) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        Self::Symbol(value)
    }
}

impl From<&Symbol> for PropertyKey {
    fn from(value: &Symbol) -> Self {
        Self::Symbol(value.clone())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(value: &PropertyKey) -> Self {
        value.clone()
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Symbol(symbol) => write!(f, "{symbol}"),
        }
    }
}
