use std::{cell::Cell, rc::Rc};

use object::{Object, PropertyDescriptor, PropertyKey, PropertyStore, Symbol, TypeError, Value};

#[test]
fn key_order() {
    let s = Symbol::described("s");
    let mut object = Object::new();

    object.set(&s.clone().into(), Value::Null).unwrap();
    object.set(&"b".into(), 1.into()).unwrap();
    object.set(&"10".into(), 2.into()).unwrap();
    object.set(&"a".into(), 3.into()).unwrap();
    object.set(&"2".into(), 4.into()).unwrap();

    // Array indices first, then strings and symbols in creation order
    assert_eq!(
        object.own_property_keys(),
        vec![
            PropertyKey::from("2"),
            PropertyKey::from("10"),
            PropertyKey::from("b"),
            PropertyKey::from("a"),
            PropertyKey::from(s),
        ]
    );
}

#[test]
fn recreated_key_moves_to_the_end() {
    let mut object: Object = [("a", 1), ("b", 2)].into_iter().collect();

    object.delete(&"a".into()).unwrap();
    object.set(&"a".into(), 3.into()).unwrap();

    assert_eq!(
        object.own_property_keys(),
        vec![PropertyKey::from("b"), PropertyKey::from("a")]
    );
}

#[test]
fn set_updates_value_in_place() {
    let mut object = Object::new();
    let key = PropertyKey::from("x");

    object.set(&key, 1.into()).unwrap();
    object.set(&key, 2.into()).unwrap();

    let desc = object.get_own_property(&key).unwrap();
    assert_eq!(desc.value(), Some(&Value::from(2)));
    assert_eq!(desc.writable(), Some(true));
    assert_eq!(desc.enumerable(), Some(true));
    assert_eq!(desc.configurable(), Some(true));
}

#[test]
fn getters_and_setters() {
    let stored = Rc::new(Cell::new(0.0));
    let mut object = Object::new();
    let key = PropertyKey::from("x");

    let for_getter = Rc::clone(&stored);
    let for_setter = Rc::clone(&stored);
    object
        .define_own_property(
            &key,
            PropertyDescriptor::default()
                .with_getter(move || Value::Number(for_getter.get()))
                .with_setter(move |value| {
                    if let Value::Number(n) = value {
                        for_setter.set(n);
                    }
                }),
        )
        .unwrap();

    object.set(&key, 5.into()).unwrap();
    assert_eq!(stored.get(), 5.0);
    assert_eq!(object.get(&key), Value::Number(5.0));
}

#[test]
fn getter_without_setter_rejects_writes() {
    let mut object = Object::new();
    let key = PropertyKey::from("x");
    object
        .define_own_property(
            &key,
            PropertyDescriptor::default()
                .with_getter(|| "value".into())
                .with_configurable(true),
        )
        .unwrap();

    assert_eq!(
        object.set(&key, 1.into()),
        Err(TypeError::NoSetter { key: key.clone() })
    );

    // Configurable accessors can be turned back into data properties
    object
        .define_own_property(&key, PropertyDescriptor::default().with_value(1))
        .unwrap();
    assert_eq!(object.get(&key), Value::from(1));
    assert_eq!(object.get_own_property(&key).unwrap().writable(), Some(false));
}

#[test]
fn non_configurable_properties() {
    let mut object = Object::new();
    let key = PropertyKey::from("x");
    object
        .define_own_property(&key, PropertyDescriptor::default().with_value(1))
        .unwrap();

    // Non-writable and non-configurable, only a no-op redefinition is allowed
    assert!(object
        .define_own_property(&key, PropertyDescriptor::default().with_value(1))
        .is_ok());
    assert_eq!(
        object.define_own_property(&key, PropertyDescriptor::default().with_value(2)),
        Err(TypeError::NonConfigurable { key: key.clone() })
    );
    assert_eq!(
        object.define_own_property(&key, PropertyDescriptor::default().with_getter(|| Value::Null)),
        Err(TypeError::NonConfigurable { key: key.clone() })
    );
    assert_eq!(
        object.set(&key, 2.into()),
        Err(TypeError::ReadOnly { key: key.clone() })
    );
    assert_eq!(
        object.delete(&key),
        Err(TypeError::Undeletable { key: key.clone() })
    );
    assert_eq!(object.get(&key), Value::from(1));
}

#[test]
fn non_extensible_objects() {
    let mut object: Object = [("a", 1)].into_iter().collect();
    object.prevent_extensions();

    assert!(!object.is_extensible());
    assert!(object.set(&"a".into(), 2.into()).is_ok());
    assert_eq!(
        object.set(&"b".into(), 2.into()),
        Err(TypeError::NotExtensible { key: "b".into() })
    );
    assert_eq!(object.len(), 1);
}

#[test]
fn error_messages() {
    let error = TypeError::ReadOnly { key: "x".into() };
    assert_eq!(error.to_string(), "cannot assign to read only property \"x\"");

    let error = TypeError::Undeletable {
        key: Symbol::described("s").into(),
    };
    assert_eq!(error.to_string(), "cannot delete property Symbol(s)");
}
