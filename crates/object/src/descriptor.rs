//! <https://262.ecma-international.org/14.0/#sec-property-descriptor-specification-type>

use std::{fmt, rc::Rc};

use crate::Value;

pub type Getter = Rc<dyn Fn() -> Value>;
pub type Setter = Rc<dyn Fn(Value)>;

/// <https://262.ecma-international.org/14.0/#sec-property-descriptor-specification-type>
///
/// Every field is optional. Descriptors stored on an [Object](crate::Object) are always
/// fully populated, descriptors passed to
/// [define_own_property](crate::PropertyStore::define_own_property) only need to carry
/// the fields that should change.
#[derive(Clone, Debug, Default)]
pub struct PropertyDescriptor {
    pub(crate) enumerable: Option<bool>,
    pub(crate) configurable: Option<bool>,
    pub(crate) variant: PropertyDescriptorVariant,
}

#[derive(Clone, Debug)]
pub(crate) enum PropertyDescriptorVariant {
    Data(DataProperty),
    Accessor(AccessorProperty),
}

#[derive(Clone, Debug, Default)]
pub(crate) struct DataProperty {
    pub(crate) value: Option<Value>,
    pub(crate) writable: Option<bool>,
}

#[derive(Clone, Default)]
pub(crate) struct AccessorProperty {
    pub(crate) get: Option<Getter>,
    pub(crate) set: Option<Setter>,
}

impl Default for PropertyDescriptorVariant {
    fn default() -> Self {
        Self::Data(DataProperty::default())
    }
}

impl PropertyDescriptor {
    /// A writable, enumerable and configurable data property
    ///
    /// This is what a plain assignment creates.
    #[must_use]
    pub fn data(value: impl Into<Value>) -> Self {
        Self {
            enumerable: Some(true),
            configurable: Some(true),
            variant: PropertyDescriptorVariant::Data(DataProperty {
                value: Some(value.into()),
                writable: Some(true),
            }),
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.data_fields_mut().value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_writable(mut self, writable: bool) -> Self {
        self.data_fields_mut().writable = Some(writable);
        self
    }

    #[must_use]
    pub fn with_getter<F>(mut self, getter: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        self.accessor_fields_mut().get = Some(Rc::new(getter));
        self
    }

    #[must_use]
    pub fn with_setter<F>(mut self, setter: F) -> Self
    where
        F: Fn(Value) + 'static,
    {
        self.accessor_fields_mut().set = Some(Rc::new(setter));
        self
    }

    #[must_use]
    pub fn with_enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = Some(enumerable);
        self
    }

    #[must_use]
    pub fn with_configurable(mut self, configurable: bool) -> Self {
        self.configurable = Some(configurable);
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        match &self.variant {
            PropertyDescriptorVariant::Data(data) => data.value.as_ref(),
            PropertyDescriptorVariant::Accessor(_) => None,
        }
    }

    #[must_use]
    pub fn writable(&self) -> Option<bool> {
        match &self.variant {
            PropertyDescriptorVariant::Data(data) => data.writable,
            PropertyDescriptorVariant::Accessor(_) => None,
        }
    }

    #[must_use]
    pub fn getter(&self) -> Option<&Getter> {
        match &self.variant {
            PropertyDescriptorVariant::Accessor(accessor) => accessor.get.as_ref(),
            PropertyDescriptorVariant::Data(_) => None,
        }
    }

    #[must_use]
    pub fn setter(&self) -> Option<&Setter> {
        match &self.variant {
            PropertyDescriptorVariant::Accessor(accessor) => accessor.set.as_ref(),
            PropertyDescriptorVariant::Data(_) => None,
        }
    }

    #[must_use]
    pub fn enumerable(&self) -> Option<bool> {
        self.enumerable
    }

    #[must_use]
    pub fn configurable(&self) -> Option<bool> {
        self.configurable
    }

    /// <https://262.ecma-international.org/14.0/#sec-isaccessordescriptor>
    #[must_use]
    pub fn is_accessor_descriptor(&self) -> bool {
        matches!(self.variant, PropertyDescriptorVariant::Accessor(_))
    }

    /// <https://262.ecma-international.org/14.0/#sec-isdatadescriptor>
    #[must_use]
    pub fn is_data_descriptor(&self) -> bool {
        match &self.variant {
            PropertyDescriptorVariant::Data(data) => {
                data.value.is_some() || data.writable.is_some()
            },
            PropertyDescriptorVariant::Accessor(_) => false,
        }
    }

    /// <https://262.ecma-international.org/14.0/#sec-isgenericdescriptor>
    #[must_use]
    pub fn is_generic_descriptor(&self) -> bool {
        !self.is_accessor_descriptor() && !self.is_data_descriptor()
    }

    pub(crate) fn has_fields(&self) -> bool {
        self.enumerable.is_some() || self.configurable.is_some() || !self.is_generic_descriptor()
    }

    /// Fills in the attribute defaults for a property that is about to be created
    ///
    /// <https://262.ecma-international.org/14.0/#table-object-property-attributes>
    pub(crate) fn complete(mut self) -> Self {
        self.enumerable.get_or_insert(false);
        self.configurable.get_or_insert(false);

        if let PropertyDescriptorVariant::Data(data) = &mut self.variant {
            data.value.get_or_insert(Value::Undefined);
            data.writable.get_or_insert(false);
        }

        self
    }

    fn data_fields_mut(&mut self) -> &mut DataProperty {
        if !matches!(self.variant, PropertyDescriptorVariant::Data(_)) {
            self.variant = PropertyDescriptorVariant::Data(DataProperty::default());
        }

        match &mut self.variant {
            PropertyDescriptorVariant::Data(data) => data,
            PropertyDescriptorVariant::Accessor(_) => unreachable!(),
        }
    }

    fn accessor_fields_mut(&mut self) -> &mut AccessorProperty {
        if !matches!(self.variant, PropertyDescriptorVariant::Accessor(_)) {
            self.variant = PropertyDescriptorVariant::Accessor(AccessorProperty::default());
        }

        match &mut self.variant {
            PropertyDescriptorVariant::Accessor(accessor) => accessor,
            PropertyDescriptorVariant::Data(_) => unreachable!(),
        }
    }
}

impl fmt::Debug for AccessorProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorProperty")
            .field("get", &self.get.as_ref().map(|_| "[Function]"))
            .field("set", &self.set.as_ref().map(|_| "[Function]"))
            .finish()
    }
}
