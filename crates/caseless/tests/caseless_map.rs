use std::{cell::RefCell, rc::Rc};

use caseless::{
    CaselessMap, Folding, Object, PropertyDescriptor, PropertyKey, PropertyStore, Symbol,
    TypeError, Value,
};

#[test]
fn get_ignores_case() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property", "value").unwrap();

    assert_eq!(map.get("property"), Value::from("value"));
    assert_eq!(map.get("Property"), Value::from("value"));
    assert_eq!(map.get("PROPERTY"), Value::from("value"));
    assert_eq!(map.get("other"), Value::Undefined);
}

#[test]
fn set_ignores_case() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property", 1).unwrap();
    map.set("Property", 2).unwrap();
    assert_eq!(map.get("property"), Value::from(2));

    map.set("PROPERTY", 3).unwrap();
    assert_eq!(map.get("property"), Value::from(3));
    assert_eq!(map.get("Property"), Value::from(3));
    assert_eq!(map.own_keys(), vec![PropertyKey::from("property")]);
}

#[test]
fn first_casing_wins() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("Name", 1).unwrap();
    map.set("NAME", 2).unwrap();

    assert_eq!(map.keys(), vec!["Name".to_string()]);
    assert_eq!(map.get("Name"), Value::from(2));
    assert_eq!(map.canonical_key("nAME"), Some("Name"));
}

#[test]
fn delete_ignores_case() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property", 1).unwrap();
    map.delete("PROPERTY").unwrap();

    assert_eq!(map.get("property"), Value::Undefined);
    assert!(map.store().is_empty());
}

#[test]
fn delete_forgets_casing() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("Key", 1).unwrap();
    map.delete("KEY").unwrap();
    assert!(!map.has("key"));
    assert_eq!(map.canonical_key("key"), None);

    map.set("key", 2).unwrap();
    assert_eq!(map.keys(), vec!["key".to_string()]);
}

#[test]
fn delete_unknown_key() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("a", 1).unwrap();

    assert!(map.delete("b").is_ok());
    assert_eq!(map.keys(), vec!["a".to_string()]);
}

#[test]
fn has_ignores_case() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property", "value").unwrap();

    assert!(map.has("property"));
    assert!(map.has("Property"));
    assert!(map.has("PROPERTY"));
    assert!(!map.has("other"));
}

#[test]
fn enumeration_keeps_stored_casing() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property1", 1).unwrap();
    map.set("Property2", 2).unwrap();
    map.set("PROPERTY3", 3).unwrap();

    let expected = vec![
        "property1".to_string(),
        "Property2".to_string(),
        "PROPERTY3".to_string(),
    ];
    assert_eq!(map.keys(), expected);
    assert_eq!(map.property_names(), expected);
}

#[test]
fn enumeration_keeps_creation_order() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("a", 1).unwrap();
    map.set("B", 2).unwrap();
    map.set("A", 3).unwrap();

    assert_eq!(map.keys(), vec!["a".to_string(), "B".to_string()]);
    assert_eq!(
        map.entries(),
        vec![
            ("a".to_string(), Value::from(3)),
            ("B".to_string(), Value::from(2)),
        ]
    );
}

#[test]
fn keys_skips_non_enumerable_properties() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("visible", 1).unwrap();
    map.define_property("Hidden", PropertyDescriptor::data(2).with_enumerable(false))
        .unwrap();

    assert_eq!(map.keys(), vec!["visible".to_string()]);
    assert_eq!(
        map.property_names(),
        vec!["visible".to_string(), "Hidden".to_string()]
    );
    assert_eq!(map.get("HIDDEN"), Value::from(2));
}

#[test]
fn define_property_getter() {
    let mut map: CaselessMap = CaselessMap::default();
    map.define_property(
        "property",
        PropertyDescriptor::default().with_getter(|| "value".into()),
    )
    .unwrap();

    assert_eq!(map.get("PropERty"), Value::from("value"));
}

#[test]
fn define_property_on_existing_property() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("property", "value").unwrap();
    map.define_property(
        "ProPErty",
        PropertyDescriptor::default().with_getter(|| "new-value".into()),
    )
    .unwrap();

    assert_eq!(map.get("PROPERTY"), Value::from("new-value"));
    assert_eq!(map.own_keys(), vec![PropertyKey::from("property")]);
}

#[test]
fn define_property_records_casing() {
    let mut map: CaselessMap = CaselessMap::default();
    map.define_property("PropERty", PropertyDescriptor::data(1))
        .unwrap();

    map.set("property", 2).unwrap();
    assert_eq!(map.keys(), vec!["PropERty".to_string()]);
}

#[test]
fn get_own_property_ignores_case() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("PropERTY", "value").unwrap();

    let desc = map.get_own_property("prOPerty").unwrap();
    assert_eq!(desc.value(), Some(&Value::from("value")));
    assert!(map.get_own_property("other").is_none());
}

#[test]
fn initial_values() {
    let map = CaselessMap::new([("hello", "world")].into_iter().collect::<Object>());

    assert_eq!(map.get("HELLO"), Value::from("world"));
}

#[test]
fn initial_values_keep_their_casing() {
    let mut map = CaselessMap::new([("Hello", "world")].into_iter().collect::<Object>());
    assert_eq!(map.get("HELLO"), Value::from("world"));

    map.set("hello", "there").unwrap();
    assert_eq!(map.keys(), vec!["Hello".to_string()]);
}

#[test]
fn initial_values_with_clashing_casing() {
    let map = CaselessMap::new(
        [("key", 1), ("KEY", 2)]
            .into_iter()
            .collect::<Object>(),
    );

    // Both stay in the store, but only the first one can be reached
    assert_eq!(map.keys(), vec!["key".to_string(), "KEY".to_string()]);
    assert_eq!(map.get("KEY"), Value::from(1));
}

#[test]
fn symbols() {
    let s = Symbol::new(None);
    let mut map: CaselessMap = CaselessMap::default();
    map.set(&s, "value").unwrap();

    assert_eq!(map.get(&s), Value::from("value"));
    assert!(map.has(&s));
    assert_eq!(map.get_own_property(&s).unwrap().value(), Some(&Value::from("value")));
    assert_eq!(map.symbols(), vec![s.clone()]);

    map.delete(&s).unwrap();
    assert_eq!(map.get(&s), Value::Undefined);
    assert!(map.symbols().is_empty());
}

#[test]
fn symbols_are_not_folded() {
    let upper = Symbol::described("KEY");
    let lower = Symbol::described("key");
    let mut map: CaselessMap = CaselessMap::default();

    map.set(&upper, 1).unwrap();
    map.set("key", 2).unwrap();

    assert_eq!(map.get(&lower), Value::Undefined);
    assert_eq!(map.get(&upper), Value::from(1));
    assert_eq!(map.get("KEY"), Value::from(2));
    assert_eq!(map.keys(), vec!["key".to_string()]);
    assert_eq!(map.symbols(), vec![upper]);
}

#[test]
fn define_property_on_symbols() {
    let s = Symbol::new(None);
    let mut map: CaselessMap = CaselessMap::default();
    map.set(&s, "value").unwrap();
    map.define_property(&s, PropertyDescriptor::default().with_getter(|| "new-value".into()))
        .unwrap();

    assert_eq!(map.get(&s), Value::from("new-value"));
}

#[test]
fn initial_symbol_values() {
    let s = Symbol::new(None);
    let map = CaselessMap::new([(s.clone(), "world")].into_iter().collect::<Object>());

    assert_eq!(map.get(&s), Value::from("world"));
}

#[test]
fn own_keys_lists_strings_before_symbols() {
    let s = Symbol::described("s");
    let mut map: CaselessMap = CaselessMap::default();
    map.set(&s, 1).unwrap();
    map.set("Text", 2).unwrap();

    assert_eq!(
        map.own_keys(),
        vec![PropertyKey::from("Text"), PropertyKey::from(s)]
    );
}

#[test]
fn mutates_the_original_object() {
    let original = Rc::new(RefCell::new(
        [("PropertY", "initial value")]
            .into_iter()
            .collect::<Object>(),
    ));

    let mut map = CaselessMap::new(Rc::clone(&original));
    map.set("pROPerTy", "new value").unwrap();

    assert_eq!(
        original.borrow().get(&"PropertY".into()),
        Value::from("new value")
    );
    assert_eq!(original.borrow().len(), 1);
}

#[test]
fn borrowed_store() {
    let mut object = Object::new();

    {
        let mut map = CaselessMap::new(&mut object);
        map.set("Key", 1).unwrap();
        map.set("KEY", 2).unwrap();
    }

    assert_eq!(object.own_property_keys(), vec![PropertyKey::from("Key")]);
    assert_eq!(object.get(&"Key".into()), Value::from(2));
}

#[test]
fn rejected_write_is_not_tracked() {
    let mut map: CaselessMap = CaselessMap::default();
    map.prevent_extensions();

    assert_eq!(
        map.set("Key", 1),
        Err(TypeError::NotExtensible { key: "Key".into() })
    );
    assert_eq!(map.canonical_key("key"), None);
    assert!(!map.has("key"));
}

#[test]
fn rejected_redefinition_keeps_casing() {
    let mut map: CaselessMap = CaselessMap::default();
    map.define_property("Fixed", PropertyDescriptor::default().with_value(1))
        .unwrap();

    assert_eq!(
        map.define_property("FIXED", PropertyDescriptor::default().with_value(2)),
        Err(TypeError::NonConfigurable {
            key: "Fixed".into()
        })
    );
    assert_eq!(
        map.set("fixed", 3),
        Err(TypeError::ReadOnly {
            key: "Fixed".into()
        })
    );

    // The casing was recorded by an earlier, successful call and survives
    assert_eq!(map.canonical_key("fixed"), Some("Fixed"));
    assert_eq!(map.get("FIXED"), Value::from(1));
}

#[test]
fn rejected_delete_still_forgets_casing() {
    let mut map: CaselessMap = CaselessMap::default();
    map.define_property("Fixed", PropertyDescriptor::default().with_value(1))
        .unwrap();

    assert_eq!(
        map.delete("FIXED"),
        Err(TypeError::Undeletable {
            key: "Fixed".into()
        })
    );
    assert_eq!(map.canonical_key("fixed"), None);
    assert!(map.has("Fixed"));
    assert!(!map.has("fixed"));
}

#[test]
fn ascii_folding() {
    let mut map = CaselessMap::with_folding(Object::new(), Folding::Ascii);
    map.set("Größe", 1).unwrap();

    assert_eq!(map.folding(), Folding::Ascii);
    assert_eq!(map.get("GRößE"), Value::from(1));
    assert_eq!(map.get("GRÖSSE"), Value::Undefined);
    assert_eq!(map.get("GRÖßE"), Value::Undefined);
}

#[test]
fn unicode_folding() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("Größe", 1).unwrap();

    assert_eq!(map.get("GRÖßE"), Value::from(1));
}

#[test]
fn integer_keys() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("name", 1).unwrap();
    map.set(2_u32, 2).unwrap();
    map.set("1", 3).unwrap();

    assert_eq!(
        map.keys(),
        vec!["1".to_string(), "2".to_string(), "name".to_string()]
    );
    assert_eq!(map.get("2"), Value::from(2));
}

#[test]
fn into_inner_returns_store() {
    let mut map: CaselessMap = CaselessMap::default();
    map.set("Key", 1).unwrap();

    let object = map.into_inner();
    assert_eq!(object.get(&"Key".into()), Value::from(1));
    assert!(object.is_extensible());
}
