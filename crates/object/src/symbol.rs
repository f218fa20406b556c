//! <https://262.ecma-international.org/14.0/#sec-ecmascript-language-types-symbol-type>

use std::{
    fmt,
    hash::{Hash, Hasher},
    sync::atomic::{AtomicUsize, Ordering},
};

static EPOCH: AtomicUsize = AtomicUsize::new(0);

/// An opaque property key that is only ever equal to itself (and its clones).
#[derive(Clone, Debug)]
pub struct Symbol {
    epoch: usize,
    description: Option<String>,
}

impl Symbol {
    #[must_use]
    pub fn new(description: Option<String>) -> Self {
        Self {
            epoch: EPOCH.fetch_add(1, Ordering::Relaxed),
            description,
        }
    }

    #[must_use]
    pub fn described(description: &str) -> Self {
        Self::new(Some(description.to_string()))
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.epoch.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or_default())
    }
}
