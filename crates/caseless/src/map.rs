use object::{Object, PropertyDescriptor, PropertyKey, PropertyStore, Symbol, TypeError, Value};

use crate::{canonical::CanonicalIndex, Folding};

/// A view on a [PropertyStore] that ignores the case of textual keys
///
/// Every key is first rewritten to the casing it was originally stored under and then
/// forwarded to the store. The first casing a key is written with sticks until the
/// key is deleted again:
///
/// ```
/// # use caseless::CaselessMap;
/// let mut map: CaselessMap = CaselessMap::default();
/// map.set("Name", 1).unwrap();
/// map.set("NAME", 2).unwrap();
///
/// assert_eq!(map.get("name"), 2.into());
/// assert_eq!(map.keys(), vec!["Name".to_string()]);
/// ```
///
/// Symbol keys are passed through untouched.
///
/// The store is modified in place. Wrap a `Rc<RefCell<Object>>` (or a `&mut Object`) to keep
/// access to it while the map is alive.
#[derive(Debug)]
pub struct CaselessMap<S: PropertyStore = Object> {
    store: S,
    canonical: CanonicalIndex,
}

impl<S: PropertyStore> CaselessMap<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_folding(store, Folding::default())
    }

    /// Wraps `store`, treating every textual key it already contains as canonical
    ///
    /// If two existing keys only differ in case, the one that is enumerated first wins.
    #[must_use]
    pub fn with_folding(store: S, folding: Folding) -> Self {
        let mut canonical = CanonicalIndex::new(folding);
        for key in store.own_property_keys() {
            canonical.track(&key);
        }

        log::debug!(
            "Created {folding} caseless map over {} existing key(s)",
            canonical.len()
        );

        Self { store, canonical }
    }

    #[must_use]
    pub fn folding(&self) -> Folding {
        self.canonical.folding()
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Returns the casing `key` is stored under, without touching the store
    #[must_use]
    pub fn canonical_key(&self, key: &str) -> Option<&str> {
        self.canonical.lookup(key)
    }

    fn resolve(&self, key: impl Into<PropertyKey>) -> PropertyKey {
        self.canonical.resolve(key.into())
    }

    /// Records the casing of `key` and runs `operation` on the resolved key
    ///
    /// A casing that was recorded by this call is forgotten again if the store rejects the
    /// operation, so the index never points at a key that was never stored.
    fn tracked<F>(&mut self, key: PropertyKey, operation: F) -> Result<(), TypeError>
    where
        F: FnOnce(&mut S, &PropertyKey) -> Result<(), TypeError>,
    {
        let newly_tracked = self.canonical.track(&key);
        let resolved = self.canonical.resolve(key);

        let result = operation(&mut self.store, &resolved);
        if result.is_err() && newly_tracked {
            log::debug!("Store rejected {resolved}, rolling back its canonical casing");
            self.canonical.untrack(&resolved);
        }
        result
    }

    /// Returns the value stored under any casing of `key`
    ///
    /// Missing keys read as [Value::Undefined], accessor properties call their getter.
    #[must_use]
    pub fn get(&self, key: impl Into<PropertyKey>) -> Value {
        self.store.get(&self.resolve(key))
    }

    /// Assigns `value` to `key`
    ///
    /// If no casing of `key` exists yet, the property is created with exactly this casing.
    /// Otherwise the existing property is updated and keeps its casing.
    pub fn set(
        &mut self,
        key: impl Into<PropertyKey>,
        value: impl Into<Value>,
    ) -> Result<(), TypeError> {
        let value = value.into();
        self.tracked(key.into(), |store, key| store.set(key, value))
    }

    #[must_use]
    pub fn has(&self, key: impl Into<PropertyKey>) -> bool {
        self.store.has_property(&self.resolve(key))
    }

    /// Removes the property stored under any casing of `key`
    ///
    /// The canonical casing is forgotten even if the store refuses the deletion.
    pub fn delete(&mut self, key: impl Into<PropertyKey>) -> Result<(), TypeError> {
        let key = key.into();
        let resolved = self.canonical.resolve(key.clone());

        self.canonical.untrack(&key);
        self.store.delete(&resolved)
    }

    /// Defines (or redefines) the property stored under any casing of `key`
    ///
    /// Casing is recorded the same way as for [set](Self::set).
    pub fn define_property(
        &mut self,
        key: impl Into<PropertyKey>,
        desc: PropertyDescriptor,
    ) -> Result<(), TypeError> {
        self.tracked(key.into(), |store, key| store.define_own_property(key, desc))
    }

    /// Describes the property stored under any casing of `key`
    #[must_use]
    pub fn get_own_property(&self, key: impl Into<PropertyKey>) -> Option<PropertyDescriptor> {
        self.store.get_own_property(&self.resolve(key))
    }

    /// All keys of the store in their stored casing, in the store's enumeration order
    #[must_use]
    pub fn own_keys(&self) -> Vec<PropertyKey> {
        self.store.own_property_keys()
    }

    /// The textual keys of all enumerable properties
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.own_keys()
            .into_iter()
            .filter(|key| self.is_enumerable(key))
            .filter_map(|key| match key {
                PropertyKey::String(name) => Some(name),
                PropertyKey::Symbol(_) => None,
            })
            .collect()
    }

    /// The textual keys of all properties, enumerable or not
    #[must_use]
    pub fn property_names(&self) -> Vec<String> {
        self.own_keys()
            .into_iter()
            .filter_map(|key| match key {
                PropertyKey::String(name) => Some(name),
                PropertyKey::Symbol(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn symbols(&self) -> Vec<Symbol> {
        self.own_keys()
            .into_iter()
            .filter_map(|key| match key {
                PropertyKey::Symbol(symbol) => Some(symbol),
                PropertyKey::String(_) => None,
            })
            .collect()
    }

    /// The enumerable textual keys together with their current values
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.keys()
            .into_iter()
            .map(|name| {
                let value = self.store.get(&PropertyKey::String(name.clone()));
                (name, value)
            })
            .collect()
    }

    #[must_use]
    pub fn is_extensible(&self) -> bool {
        self.store.is_extensible()
    }

    /// Stops the store from accepting new properties
    pub fn prevent_extensions(&mut self) {
        self.store.prevent_extensions();
    }

    fn is_enumerable(&self, key: &PropertyKey) -> bool {
        self.store
            .get_own_property(key)
            .and_then(|desc| desc.enumerable())
            .unwrap_or(false)
    }
}

impl Default for CaselessMap<Object> {
    fn default() -> Self {
        Self::new(Object::default())
    }
}
