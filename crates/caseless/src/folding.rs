use std::{borrow::Cow, fmt, str::FromStr};

/// How two textual keys are compared
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Folding {
    /// Full unicode lowercasing, so `"STRASSE"` and `"straße"` stay distinct but `"ΣΑΣ"` and `"σας"` match
    #[default]
    Unicode,

    /// Only `A-Z` are folded, every other character has to match exactly
    Ascii,
}

impl Folding {
    /// Returns the form all casings of `key` share
    #[must_use]
    pub fn fold<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match self {
            Self::Unicode => {
                // Titlecase letters such as 'ǅ' are not uppercase but still fold
                let changes = key.chars().any(|c| c.to_lowercase().ne(std::iter::once(c)));
                if changes {
                    Cow::Owned(key.to_lowercase())
                } else {
                    Cow::Borrowed(key)
                }
            },
            Self::Ascii => {
                if key.bytes().any(|b| b.is_ascii_uppercase()) {
                    Cow::Owned(key.to_ascii_lowercase())
                } else {
                    Cow::Borrowed(key)
                }
            },
        }
    }
}

impl FromStr for Folding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(Self::Unicode),
            "ascii" => Ok(Self::Ascii),
            other => Err(format!("unknown folding {other:?}, expected \"unicode\" or \"ascii\"")),
        }
    }
}

impl fmt::Display for Folding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode => f.write_str("unicode"),
            Self::Ascii => f.write_str("ascii"),
        }
    }
}
