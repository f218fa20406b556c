//! <https://262.ecma-international.org/14.0/#sec-ordinary-object-internal-methods-and-internal-slots>

use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    descriptor::{AccessorProperty, DataProperty, PropertyDescriptorVariant},
    PropertyDescriptor, PropertyKey, PropertyStore, TypeError, Value,
};

/// An ordinary object without a prototype
///
/// Properties are kept in creation order, which is the order
/// [own_property_keys](PropertyStore::own_property_keys) reports them in
/// (after the array indices).
#[derive(Clone)]
pub struct Object {
    extensible: bool,
    properties: IndexMap<PropertyKey, PropertyDescriptor>,
}

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of own properties, including non-enumerable ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyStore for Object {
    /// <https://262.ecma-international.org/14.0/#sec-ordinarygetownproperty>
    fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        // 1. If O does not have an own property with key P, return undefined.
        // 2. - 8. Return a copy of the property's attributes
        self.properties.get(key).cloned()
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinarydefineownproperty>
    fn define_own_property(
        &mut self,
        key: &PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), TypeError> {
        // 1. Let current be ? O.[[GetOwnProperty]](P).
        let current = self.get_own_property(key);

        // 2. Let extensible be ? IsExtensible(O).
        let extensible = self.is_extensible();

        // 3. Return ValidateAndApplyPropertyDescriptor(O, P, extensible, Desc, current).
        validate_and_apply_property_descriptor(Some(self), key, extensible, desc, current)
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinary-object-internal-methods-and-internal-slots-delete-p>
    fn delete(&mut self, key: &PropertyKey) -> Result<(), TypeError> {
        // 1. Let desc be ? O.[[GetOwnProperty]](P).
        // 2. If desc is undefined, return true.
        let Some(desc) = self.properties.get(key) else {
            return Ok(());
        };

        // 3. If desc.[[Configurable]] is true, then
        if desc.configurable == Some(true) {
            // a. Remove the own property with name P from O.
            // NOTE: shift_remove keeps the creation order of the remaining keys intact
            self.properties.shift_remove(key);

            // b. Return true.
            return Ok(());
        }

        // 4. Return false.
        Err(TypeError::Undeletable { key: key.clone() })
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinaryownpropertykeys>
    fn own_property_keys(&self) -> Vec<PropertyKey> {
        // 1. Let keys be a new empty List.
        // 2. For each own property key P of O such that P is an array index, in ascending numeric index order, do
        //    a. Append P to keys.
        let mut indices: Vec<(u32, &PropertyKey)> = self
            .properties
            .keys()
            .filter_map(|key| key.array_index().map(|index| (index, key)))
            .collect();
        indices.sort_unstable_by_key(|&(index, _)| index);
        let mut keys: Vec<PropertyKey> = indices.into_iter().map(|(_, key)| key.clone()).collect();

        // 3. For each own property key P of O such that P is a String and P is not an array index, in ascending chronological order of property creation, do
        //    a. Append P to keys.
        keys.extend(
            self.properties
                .keys()
                .filter(|key| !key.is_symbol() && key.array_index().is_none())
                .cloned(),
        );

        // 4. For each own property key P of O such that P is a Symbol, in ascending chronological order of property creation, do
        //    a. Append P to keys.
        keys.extend(self.properties.keys().filter(|key| key.is_symbol()).cloned());

        // 5. Return keys.
        keys
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinaryisextensible>
    fn is_extensible(&self) -> bool {
        // 1. Return O.[[Extensible]].
        self.extensible
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinarypreventextensions>
    fn prevent_extensions(&mut self) {
        // 1. Set O.[[Extensible]] to false.
        self.extensible = false;
    }
}

/// <https://262.ecma-international.org/14.0/#sec-validateandapplypropertydescriptor>
///
/// Passing `None` for `o` only validates the descriptor.
fn validate_and_apply_property_descriptor(
    o: Option<&mut Object>,
    key: &PropertyKey,
    extensible: bool,
    desc: PropertyDescriptor,
    current: Option<PropertyDescriptor>,
) -> Result<(), TypeError> {
    let reject = || TypeError::NonConfigurable { key: key.clone() };

    // 1. Assert: IsPropertyKey(P) is true.
    //            Note: Pointless, we don't pass this as a language value

    // 2. If current is undefined, then
    let Some(current) = current else {
        // a. If extensible is false, return false.
        if !extensible {
            return Err(TypeError::NotExtensible { key: key.clone() });
        }

        // b. If O is undefined, return true.
        let Some(o) = o else {
            return Ok(());
        };

        // c. If IsAccessorDescriptor(Desc) is true, then
        //    i. Create an own accessor property named P of object O whose [[Get]], [[Set]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field in Desc if Desc has that field, or to the attribute's default value otherwise.
        // d. Else,
        //    i. Create an own data property named P of object O whose [[Value]], [[Writable]], [[Enumerable]], and [[Configurable]]
        //       attributes are set to the value of the corresponding field in Desc if Desc has that field, or to the attribute's default value otherwise.
        log::trace!("Creating property {key}");
        o.properties.insert(key.clone(), desc.complete());

        // e. Return true.
        return Ok(());
    };

    // 3. Assert: current is a fully populated Property Descriptor.

    // 4. If Desc does not have any fields, return true.
    if !desc.has_fields() {
        return Ok(());
    }

    // 5. If current.[[Configurable]] is false, then
    if current.configurable == Some(false) {
        // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]] is true, return false.
        if desc.configurable == Some(true) {
            return Err(reject());
        }

        // b. If Desc has an [[Enumerable]] field and SameValue(Desc.[[Enumerable]], current.[[Enumerable]]) is false, return false.
        if desc.enumerable.is_some() && desc.enumerable != current.enumerable {
            return Err(reject());
        }

        // c. If IsGenericDescriptor(Desc) is false and SameValue(IsAccessorDescriptor(Desc), IsAccessorDescriptor(current)) is false, return false.
        if !desc.is_generic_descriptor()
            && desc.is_accessor_descriptor() != current.is_accessor_descriptor()
        {
            return Err(reject());
        }

        match (&current.variant, &desc.variant) {
            // d. If IsAccessorDescriptor(current) is true, then
            (
                PropertyDescriptorVariant::Accessor(current_accessor),
                PropertyDescriptorVariant::Accessor(desc_accessor),
            ) => {
                // i. If Desc has a [[Get]] field and SameValue(Desc.[[Get]], current.[[Get]]) is false, return false.
                if desc_accessor.get.is_some()
                    && !same_function(&desc_accessor.get, &current_accessor.get)
                {
                    return Err(reject());
                }

                // ii. If Desc has a [[Set]] field and SameValue(Desc.[[Set]], current.[[Set]]) is false, return false.
                if desc_accessor.set.is_some()
                    && !same_function(&desc_accessor.set, &current_accessor.set)
                {
                    return Err(reject());
                }
            },
            // e. Else if current.[[Writable]] is false, then
            (PropertyDescriptorVariant::Data(current_data), PropertyDescriptorVariant::Data(desc_data))
                if current_data.writable == Some(false) =>
            {
                // i. If Desc has a [[Writable]] field and Desc.[[Writable]] is true, return false.
                if desc_data.writable == Some(true) {
                    return Err(reject());
                }

                // ii. If Desc has a [[Value]] field and SameValue(Desc.[[Value]], current.[[Value]]) is false, return false.
                if let Some(value) = &desc_data.value {
                    let current_value = current_data.value.as_ref().unwrap_or(&Value::Undefined);
                    if !Value::same_value(value, current_value) {
                        return Err(reject());
                    }
                }
            },
            _ => {},
        }
    }

    // 6. If O is not undefined, then
    let Some(o) = o else {
        // 7. Return true.
        return Ok(());
    };

    let enumerable = desc.enumerable.or(current.enumerable);
    let configurable = desc.configurable.or(current.configurable);

    let variant = match (current.variant, desc.variant) {
        // a. If IsDataDescriptor(current) is true and IsAccessorDescriptor(Desc) is true, then
        //    i. If Desc has a [[Configurable]] field, let configurable be Desc.[[Configurable]]; else let configurable be current.[[Configurable]].
        //    ii. If Desc has a [[Enumerable]] field, let enumerable be Desc.[[Enumerable]]; else let enumerable be current.[[Enumerable]].
        //    iii. Replace the property named P of object O with an accessor property whose [[Configurable]] and [[Enumerable]]
        //         attributes are set to configurable and enumerable, respectively, and whose [[Get]] and [[Set]] attributes are set to
        //         the value of the corresponding field in Desc if Desc has that field, or to the attribute's default value otherwise.
        (PropertyDescriptorVariant::Data(_), PropertyDescriptorVariant::Accessor(accessor)) => {
            PropertyDescriptorVariant::Accessor(accessor)
        },
        // b. Else if IsAccessorDescriptor(current) is true and IsDataDescriptor(Desc) is true, then
        //    i. - iii. Same as above, with a data property whose [[Value]] and [[Writable]] attributes are set to
        //              the value of the corresponding field in Desc if Desc has that field, or to the attribute's default value otherwise.
        (PropertyDescriptorVariant::Accessor(current_accessor), PropertyDescriptorVariant::Data(data)) => {
            if data.value.is_none() && data.writable.is_none() {
                // Desc is a generic descriptor, the property stays an accessor
                PropertyDescriptorVariant::Accessor(current_accessor)
            } else {
                PropertyDescriptorVariant::Data(DataProperty {
                    value: Some(data.value.unwrap_or_default()),
                    writable: Some(data.writable.unwrap_or(false)),
                })
            }
        },
        // c. Else,
        //    i. For each field of Desc, set the corresponding attribute of the property named P of object O to the value of the field.
        (PropertyDescriptorVariant::Data(current_data), PropertyDescriptorVariant::Data(data)) => {
            PropertyDescriptorVariant::Data(DataProperty {
                value: data.value.or(current_data.value),
                writable: data.writable.or(current_data.writable),
            })
        },
        (
            PropertyDescriptorVariant::Accessor(current_accessor),
            PropertyDescriptorVariant::Accessor(accessor),
        ) => PropertyDescriptorVariant::Accessor(AccessorProperty {
            get: accessor.get.or(current_accessor.get),
            set: accessor.set.or(current_accessor.set),
        }),
    };

    let updated = PropertyDescriptor {
        enumerable,
        configurable,
        variant,
    };

    // Replacing in place keeps the property's position in the creation order
    if let Some(slot) = o.properties.get_mut(key) {
        *slot = updated;
    }

    // 7. Return true.
    Ok(())
}

fn same_function<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("is_extensible", &self.extensible)
            .field("properties", &self.properties)
            .finish()
    }
}

impl Default for Object {
    fn default() -> Self {
        Self {
            extensible: true,
            properties: IndexMap::default(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Object
where
    K: Into<PropertyKey>,
    V: Into<Value>,
{
    /// Creates an object with one plain data property per item, like an object literal would
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|(key, value)| (key.into(), PropertyDescriptor::data(value)))
            .collect();

        Self {
            extensible: true,
            properties,
        }
    }
}
