//! Basic entry operations
//!
//! set/get at the root, ensure, has, size and auto_key.

use crate::*;

#[test]
fn test_set_get_every_value_type() {
    let mut store = create_store();

    for (key, value) in standard_test_values() {
        put(&mut store, key, value.clone());
        assert_eq!(read(&store, key, "$"), value, "round trip failed for {key}");
    }

    assert_eq!(
        store.size(SizePayload::new()).data,
        standard_test_values().len()
    );
}

#[test]
fn test_get_missing_key_returns_null() {
    let store = create_store();
    let out = store.get(GetPayload::new("missing", Path::root()));
    assert_eq!(out.data, Value::Null);
    assert_eq!(out.key, "missing");
    assert_eq!(out.method, Method::Get);
}

#[test]
fn test_overwrite_replaces_value() {
    let mut store = create_store();
    put(&mut store, "k", 1);
    put(&mut store, "k", "two");
    assert_eq!(read(&store, "k", "$"), Value::from("two"));
    assert_eq!(store.size(SizePayload::new()).data, 1);
}

#[test]
fn test_ensure_then_has() {
    let mut store = create_store();
    assert!(!store.has(HasPayload::new("config", Path::root())).data);

    let default = obj([("retries", Value::Int(3))]);
    let out = store.ensure(EnsurePayload::new("config", default.clone()));
    assert_eq!(out.data, default);

    assert!(store.has(HasPayload::new("config", Path::root())).data);
    assert_eq!(read(&store, "config", "$"), default);
}

#[test]
fn test_ensure_does_not_overwrite() {
    let mut store = create_store();
    put(&mut store, "k", 1);

    let out = store.ensure(EnsurePayload::new("k", 2));
    assert_eq!(out.data, Value::Int(1));
    assert_eq!(read(&store, "k", "$"), Value::Int(1));
}

#[test]
fn test_ensure_counts_toward_size() {
    let mut store = create_store();
    store.ensure(EnsurePayload::new("a", Value::Null));
    store.ensure(EnsurePayload::new("a", 1));
    put(&mut store, "b", 2);
    assert_eq!(store.size(SizePayload::new()).data, 2);
}

#[test]
fn test_null_is_a_stored_value() {
    let mut store = create_store();
    put(&mut store, "k", Value::Null);

    assert!(store.has(HasPayload::new("k", Path::root())).data);
    assert_eq!(read(&store, "k", "$"), Value::Null);
    assert_eq!(store.keys(KeysPayload::new()).data, vec!["k"]);
}

#[test]
fn test_has_falsy_fields() {
    let mut store = create_store();
    put(
        &mut store,
        "doc",
        obj([
            ("count", Value::Int(0)),
            ("ratio", Value::Float(0.0)),
            ("label", Value::from("")),
            ("enabled", Value::Bool(false)),
            ("nothing", Value::Null),
            ("blob", Value::Bytes(vec![])),
            ("list", Value::array()),
            ("map", Value::object()),
        ]),
    );

    let has = |field: &str| store.has(HasPayload::new("doc", [field])).data;

    assert!(!has("count"));
    assert!(!has("ratio"));
    assert!(!has("label"));
    assert!(!has("enabled"));
    assert!(!has("nothing"));
    assert!(!has("absent"));
    assert!(has("blob"));
    assert!(has("list"));
    assert!(has("map"));
}

#[test]
fn test_auto_key_sequence() {
    let mut store = create_store();
    let keys: Vec<String> = (0..5)
        .filter_map(|_| store.auto_key(AutoKeyPayload::new()).data)
        .collect();
    assert_eq!(keys, vec!["1", "2", "3", "4", "5"]);
}

#[test]
fn test_auto_key_then_set() {
    let mut store = create_store();
    let key = store.auto_key(AutoKeyPayload::new()).data.unwrap();
    put(&mut store, &key, "first");
    assert_eq!(read(&store, "1", "$"), Value::from("first"));
}

#[test]
fn test_config_from_toml() {
    let config = StoreConfig::from_toml_str("name = \"from-toml\"\ninitial_capacity = 8").unwrap();
    let store = Store::with_config(config);
    assert_eq!(store.config().name, "from-toml");
    assert_eq!(store.config().initial_capacity, 8);
    assert_eq!(store.size(SizePayload::new()).data, 0);
}

#[test]
fn test_default_store_name() {
    assert_eq!(Store::new().config().name, mapstore::DEFAULT_STORE_NAME);
}
