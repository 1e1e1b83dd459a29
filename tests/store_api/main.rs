//! Store API Test Suite
//!
//! Exercises the public `mapstore` surface end to end:
//! - Basic entry operations (set, get, ensure, has, size)
//! - Path addressing into nested values
//! - Batch and snapshot operations (getMany, setMany, getAll, keys, values)
//! - Compute-only updates and explicit commits
//! - Properties that must hold for any sequence of writes
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test store_api
//!
//! # Run update tests only
//! cargo test --test store_api update_ops::
//! ```

use mapstore::prelude::*;
use std::sync::Once;

// Test modules
pub mod basic_ops;
pub mod update_ops;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Install a tracing subscriber once for the whole test binary.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Create an empty store with a name that shows up in log output
pub fn create_store() -> Store {
    init_tracing();
    Store::builder().name("store_api").build()
}

/// Build an Object value from field pairs
pub fn obj<const N: usize>(fields: [(&str, Value); N]) -> Value {
    fields.into_iter().collect()
}

/// Parse a path, panicking on malformed text
pub fn path(text: &str) -> Path {
    text.parse().unwrap()
}

/// `set` at the root of `key`
pub fn put(store: &mut Store, key: &str, value: impl Into<Value>) {
    store.set(SetPayload::new(key, Path::root(), value));
}

/// `get` returning only the data
pub fn read(store: &Store, key: &str, at: &str) -> Value {
    store.get(GetPayload::new(key, path(at))).data
}

/// Standard test values covering every variant
pub fn standard_test_values() -> Vec<(&'static str, Value)> {
    vec![
        ("null", Value::Null),
        ("bool_true", Value::Bool(true)),
        ("bool_false", Value::Bool(false)),
        ("int_pos", Value::Int(42)),
        ("int_neg", Value::Int(-42)),
        ("int_zero", Value::Int(0)),
        ("float_pos", Value::Float(3.14159)),
        ("float_neg", Value::Float(-2.71828)),
        ("string", Value::String("hello world".into())),
        ("string_unicode", Value::String("日本語 🌍".into())),
        ("string_empty", Value::String("".into())),
        ("bytes", Value::Bytes(vec![0x00, 0x01, 0xFF, 0xFE])),
        ("bytes_empty", Value::Bytes(vec![])),
        (
            "array",
            Value::Array(vec![Value::Int(1), Value::String("two".into())]),
        ),
        ("object", obj([("nested", Value::Int(123))])),
    ]
}
