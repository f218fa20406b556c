use std::{cell::RefCell, rc::Rc};

use crate::{PropertyDescriptor, PropertyKey, TypeError, Value};

/// The internal methods every property store has to provide
///
/// `get`, `set` and `has_property` are built on top of the essential methods the same way
/// the ordinary object algorithms do it, so implementors usually only need the required
/// methods.
///
/// <https://262.ecma-international.org/14.0/#table-essential-internal-methods>
pub trait PropertyStore {
    fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor>;

    fn define_own_property(
        &mut self,
        key: &PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), TypeError>;

    fn delete(&mut self, key: &PropertyKey) -> Result<(), TypeError>;

    fn own_property_keys(&self) -> Vec<PropertyKey>;

    fn is_extensible(&self) -> bool;

    fn prevent_extensions(&mut self);

    /// <https://262.ecma-international.org/14.0/#sec-ordinaryhasproperty>
    fn has_property(&self, key: &PropertyKey) -> bool {
        // 1. Let hasOwn be ? O.[[GetOwnProperty]](P).
        // 2. If hasOwn is not undefined, return true.
        // 3. - 5. There is no prototype to consult
        self.get_own_property(key).is_some()
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinaryget>
    fn get(&self, key: &PropertyKey) -> Value {
        // 1. Let desc be ? O.[[GetOwnProperty]](P).
        // 2. If desc is undefined, return undefined (there is no parent).
        let Some(desc) = self.get_own_property(key) else {
            return Value::Undefined;
        };

        // 3. If IsDataDescriptor(desc) is true, return desc.[[Value]].
        if !desc.is_accessor_descriptor() {
            return desc.value().cloned().unwrap_or_default();
        }

        // 4. Assert: IsAccessorDescriptor(desc) is true.
        // 5. Let getter be desc.[[Get]].
        // 6. If getter is undefined, return undefined.
        // 7. Return ? Call(getter, Receiver).
        desc.getter().map(|getter| getter()).unwrap_or_default()
    }

    /// <https://262.ecma-international.org/14.0/#sec-ordinarysetwithowndescriptor>
    fn set(&mut self, key: &PropertyKey, value: Value) -> Result<(), TypeError> {
        // 1. If ownDesc is undefined, then
        //    a. - c. There is no parent, so set ownDesc to
        //            PropertyDescriptor { [[Value]]: undefined, [[Writable]]: true, [[Enumerable]]: true, [[Configurable]]: true }.
        let Some(own_desc) = self.get_own_property(key) else {
            // 2.c. - e. The receiver is this object, which does not have the property yet
            //    i. Return ? CreateDataProperty(Receiver, P, V).
            return self.define_own_property(key, PropertyDescriptor::data(value));
        };

        // 3. Assert: IsAccessorDescriptor(ownDesc) is true.
        if own_desc.is_accessor_descriptor() {
            // 4. Let setter be ownDesc.[[Set]].
            // 5. If setter is undefined, return false.
            let Some(setter) = own_desc.setter() else {
                return Err(TypeError::NoSetter { key: key.clone() });
            };

            // 6. Perform ? Call(setter, Receiver, « V »).
            setter(value);

            // 7. Return true.
            return Ok(());
        }

        // 2. If IsDataDescriptor(ownDesc) is true, then
        //    a. If ownDesc.[[Writable]] is false, return false.
        if own_desc.writable() != Some(true) {
            return Err(TypeError::ReadOnly { key: key.clone() });
        }

        // d. If existingDescriptor is not undefined, then
        //    iii. Let valueDesc be the PropertyDescriptor { [[Value]]: V }.
        //    iv. Return ? Receiver.[[DefineOwnProperty]](P, valueDesc).
        self.define_own_property(key, PropertyDescriptor::default().with_value(value))
    }
}

impl<S: PropertyStore + ?Sized> PropertyStore for &mut S {
    fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        (**self).get_own_property(key)
    }

    fn define_own_property(
        &mut self,
        key: &PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), TypeError> {
        (**self).define_own_property(key, desc)
    }

    fn delete(&mut self, key: &PropertyKey) -> Result<(), TypeError> {
        (**self).delete(key)
    }

    fn own_property_keys(&self) -> Vec<PropertyKey> {
        (**self).own_property_keys()
    }

    fn is_extensible(&self) -> bool {
        (**self).is_extensible()
    }

    fn prevent_extensions(&mut self) {
        (**self).prevent_extensions()
    }
}

/// A store that is shared with someone else, who observes every change made through it
///
/// The cell is only borrowed for the duration of each essential method. Getters and setters
/// run after the borrow has ended, so they are free to access the store themselves.
impl<S: PropertyStore> PropertyStore for Rc<RefCell<S>> {
    fn get_own_property(&self, key: &PropertyKey) -> Option<PropertyDescriptor> {
        self.borrow().get_own_property(key)
    }

    fn define_own_property(
        &mut self,
        key: &PropertyKey,
        desc: PropertyDescriptor,
    ) -> Result<(), TypeError> {
        self.borrow_mut().define_own_property(key, desc)
    }

    fn delete(&mut self, key: &PropertyKey) -> Result<(), TypeError> {
        self.borrow_mut().delete(key)
    }

    fn own_property_keys(&self) -> Vec<PropertyKey> {
        self.borrow().own_property_keys()
    }

    fn is_extensible(&self) -> bool {
        self.borrow().is_extensible()
    }

    fn prevent_extensions(&mut self) {
        self.borrow_mut().prevent_extensions()
    }
}
