use std::collections::HashMap;

use object::PropertyKey;

use crate::Folding;

/// Remembers the casing each textual key was first written with
///
/// Symbols never enter the index, they are matched by identity.
#[derive(Clone, Debug, Default)]
pub(crate) struct CanonicalIndex {
    folding: Folding,

    /// Maps folded key -> key as it is stored
    names: HashMap<String, String>,
}

impl CanonicalIndex {
    pub(crate) fn new(folding: Folding) -> Self {
        Self {
            folding,
            names: HashMap::default(),
        }
    }

    #[must_use]
    pub(crate) fn folding(&self) -> Folding {
        self.folding
    }

    /// Returns the stored casing for `key`, if any casing of it is known
    #[must_use]
    pub(crate) fn lookup(&self, key: &str) -> Option<&str> {
        self.names
            .get(self.folding.fold(key).as_ref())
            .map(String::as_str)
    }

    /// Rewrites `key` to the casing it is stored under
    ///
    /// Keys that are not known yet are returned unchanged.
    #[must_use]
    pub(crate) fn resolve(&self, key: PropertyKey) -> PropertyKey {
        let PropertyKey::String(name) = &key else {
            return key;
        };

        match self.lookup(name) {
            Some(canonical) if canonical != name.as_str() => {
                log::trace!("Resolved {name:?} to {canonical:?}");
                PropertyKey::String(canonical.to_string())
            },
            _ => key,
        }
    }

    /// Records `key` as the canonical casing unless some casing of it is already known
    ///
    /// Returns whether a new entry was created.
    pub(crate) fn track(&mut self, key: &PropertyKey) -> bool {
        let PropertyKey::String(name) = key else {
            return false;
        };

        let folded = self.folding.fold(name);
        if self.names.contains_key(folded.as_ref()) {
            return false;
        }

        log::debug!("Tracking {name:?} as canonical casing of {folded:?}");
        self.names.insert(folded.into_owned(), name.clone());
        true
    }

    /// Forgets the canonical casing of `key`, returning it
    pub(crate) fn untrack(&mut self, key: &PropertyKey) -> Option<String> {
        let PropertyKey::String(name) = key else {
            return None;
        };

        let canonical = self.names.remove(self.folding.fold(name).as_ref());
        if let Some(canonical) = &canonical {
            log::debug!("Released canonical casing {canonical:?}");
        }
        canonical
    }

    #[must_use]
    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
