//! # mapstore
//!
//! In-memory key-value store holding structured values under string keys,
//! with path addressing into nested objects and arrays.
//!
//! ## Quick Start
//!
//! ```
//! use mapstore::prelude::*;
//!
//! let mut store = Store::new();
//!
//! // Whole values and nested paths
//! store.set(SetPayload::new("user:1", Path::root(), Value::from_iter([("name", "Alice")])));
//! store.set(SetPayload::new("user:1", "tags[0]".parse::<Path>()?, "admin"));
//!
//! let name = store.get(GetPayload::new("user:1", ["name"])).data;
//! assert_eq!(name, Value::from("Alice"));
//!
//! // Fresh keys
//! let key = store.auto_key(AutoKeyPayload::new()).data;
//! assert_eq!(key.as_deref(), Some("1"));
//! # Ok::<(), mapstore::Error>(())
//! ```
//!
//! ## Updates compute, commits persist
//!
//! `update_by_data` and `update_by_hook` return the new value without
//! writing it. Hand the result to [`Store::commit`] to store it.
//!
//! ## Crates
//!
//! - `mapstore-core`: [`Value`], [`Path`], [`Method`], [`Error`]
//! - `mapstore-primitives`: [`Store`] and its payload records

#![warn(missing_docs)]

pub mod prelude;

// Core types
pub use mapstore_core::{Error, Method, Path, PathSegment, Result, Value};

// Store and payloads
pub use mapstore_primitives::{
    AutoKeyPayload, EnsurePayload, GetAllPayload, GetManyPayload, GetPayload, HasPayload,
    KeyPath, KeysPayload, SetManyPayload, SetPayload, SizePayload, Store, StoreBuilder,
    StoreConfig, UpdateByDataPayload, UpdateByHookPayload, ValuesPayload, DEFAULT_STORE_NAME,
};

/// Path traversal and merge helpers, for callers working on raw values.
pub mod ops {
    pub use mapstore_primitives::merge::merge_defaults;
    pub use mapstore_primitives::traverse::{get_at, set_at, MAX_ARRAY_INDEX};
}
