use error_derive::Error;

use crate::PropertyKey;

/// A store operation was rejected by the object's invariants
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TypeError {
    #[msg = "cannot add property {key}, object is not extensible"]
    NotExtensible { key: PropertyKey },

    #[msg = "cannot redefine property {key}"]
    NonConfigurable { key: PropertyKey },

    #[msg = "cannot assign to read only property {key}"]
    ReadOnly { key: PropertyKey },

    #[msg = "cannot set property {key} which has only a getter"]
    NoSetter { key: PropertyKey },

    #[msg = "cannot delete property {key}"]
    Undeletable { key: PropertyKey },
}

impl TypeError {
    /// The property the failed operation was aimed at
    #[must_use]
    pub fn key(&self) -> &PropertyKey {
        match self {
            Self::NotExtensible { key }
            | Self::NonConfigurable { key }
            | Self::ReadOnly { key }
            | Self::NoSetter { key }
            | Self::Undeletable { key } => key,
        }
    }
}
