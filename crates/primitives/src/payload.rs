//! Request/response records
//!
//! Each store operation takes one of these records and hands it back with
//! its `data` field filled in. All other fields are left exactly as the
//! caller sent them, so a dispatching layer can attach its own bookkeeping
//! around the call.
//!
//! Field names serialize in camelCase (`defaultValue`, `inputData`,
//! `keyPaths`) and `method` serializes to its wire name.
//!
//! ## Update records and persistence
//!
//! [`UpdateByDataPayload`] and [`UpdateByHookPayload`] carry a *computed*
//! value. The store never writes it back on its own. Convert either one into
//! a [`SetPayload`] (or pass it to `Store::commit`) to persist the result.

use mapstore_core::{Method, Path, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A `(key, path)` pair addressed by the batch operations.
pub type KeyPath = (String, Path);

/// Request for `autoKey`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoKeyPayload {
    /// Operation identity
    pub method: Method,
    /// The generated key
    pub data: Option<String>,
}

impl AutoKeyPayload {
    /// Request a fresh key.
    pub fn new() -> Self {
        Self {
            method: Method::AutoKey,
            data: None,
        }
    }
}

impl Default for AutoKeyPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Request for `ensure`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnsurePayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Inserted only when `key` is absent
    pub default_value: Value,
    /// The value present at `key` after the call
    pub data: Value,
}

impl EnsurePayload {
    /// Ensure `key` exists, inserting `default_value` if absent.
    pub fn new(key: impl Into<String>, default_value: impl Into<Value>) -> Self {
        Self {
            method: Method::Ensure,
            key: key.into(),
            default_value: default_value.into(),
            data: Value::Null,
        }
    }
}

/// Request for `get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Location inside the entry, root when empty
    pub path: Path,
    /// The resolved value, `Null` when nothing resolves
    pub data: Value,
}

impl GetPayload {
    /// Read `key` at `path`.
    pub fn new(key: impl Into<String>, path: impl Into<Path>) -> Self {
        Self {
            method: Method::Get,
            key: key.into(),
            path: path.into(),
            data: Value::Null,
        }
    }
}

/// Request for `getAll`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllPayload {
    /// Operation identity
    pub method: Method,
    /// Every key mapped to its value
    pub data: HashMap<String, Value>,
}

impl GetAllPayload {
    /// Snapshot every entry.
    pub fn new() -> Self {
        Self {
            method: Method::GetAll,
            data: HashMap::new(),
        }
    }
}

impl Default for GetAllPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Request for `getMany`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetManyPayload {
    /// Operation identity
    pub method: Method,
    /// (key, path) pairs in request order
    pub key_paths: Vec<KeyPath>,
    /// Key to resolved value; the last pair wins for duplicate keys
    pub data: HashMap<String, Value>,
}

impl GetManyPayload {
    /// Read every pair in `key_paths`.
    pub fn new(key_paths: impl IntoIterator<Item = KeyPath>) -> Self {
        Self {
            method: Method::GetMany,
            key_paths: key_paths.into_iter().collect(),
            data: HashMap::new(),
        }
    }
}

/// Request for `has`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HasPayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Location inside the entry, root when empty
    pub path: Path,
    /// Whether the key (and path) is present
    pub data: bool,
}

impl HasPayload {
    /// Check `key` at `path`.
    pub fn new(key: impl Into<String>, path: impl Into<Path>) -> Self {
        Self {
            method: Method::Has,
            key: key.into(),
            path: path.into(),
            data: false,
        }
    }
}

/// Request for `keys`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysPayload {
    /// Operation identity
    pub method: Method,
    /// Every key in iteration order
    pub data: Vec<String>,
}

impl KeysPayload {
    /// Snapshot every key.
    pub fn new() -> Self {
        Self {
            method: Method::Keys,
            data: Vec::new(),
        }
    }
}

impl Default for KeysPayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Request for `set`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Location inside the entry, root when empty
    pub path: Path,
    /// Value to write
    pub value: Value,
}

impl SetPayload {
    /// Write `value` to `key` at `path`.
    pub fn new(key: impl Into<String>, path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Self {
            method: Method::Set,
            key: key.into(),
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Request for `setMany`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetManyPayload {
    /// Operation identity
    pub method: Method,
    /// (key, path) pairs in request order
    pub key_paths: Vec<KeyPath>,
    /// Written at every pair
    pub value: Value,
}

impl SetManyPayload {
    /// Write `value` at every pair in `key_paths`.
    pub fn new(key_paths: impl IntoIterator<Item = KeyPath>, value: impl Into<Value>) -> Self {
        Self {
            method: Method::SetMany,
            key_paths: key_paths.into_iter().collect(),
            value: value.into(),
        }
    }
}

/// Request for `size`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizePayload {
    /// Operation identity
    pub method: Method,
    /// Number of keys
    pub data: usize,
}

impl SizePayload {
    /// Count keys.
    pub fn new() -> Self {
        Self {
            method: Method::Size,
            data: 0,
        }
    }
}

impl Default for SizePayload {
    fn default() -> Self {
        Self::new()
    }
}

/// Request for `update` by data merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateByDataPayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Location inside the entry, root when empty
    pub path: Path,
    /// Value merged onto the current one
    pub input_data: Value,
    /// The merged value. Not persisted by the store.
    pub data: Value,
}

impl UpdateByDataPayload {
    /// Merge `input_data` onto `key` at `path`.
    pub fn new(key: impl Into<String>, path: impl Into<Path>, input_data: impl Into<Value>) -> Self {
        Self {
            method: Method::Update,
            key: key.into(),
            path: path.into(),
            input_data: input_data.into(),
            data: Value::Null,
        }
    }
}

/// Request for `update` by hook
///
/// The hook itself travels beside the record, see `Store::update_by_hook`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateByHookPayload {
    /// Operation identity
    pub method: Method,
    /// Entry key
    pub key: String,
    /// Location inside the entry, root when empty
    pub path: Path,
    /// The hook's result. Not persisted by the store.
    pub data: Value,
}

impl UpdateByHookPayload {
    /// Transform `key` at `path` with a hook.
    pub fn new(key: impl Into<String>, path: impl Into<Path>) -> Self {
        Self {
            method: Method::Update,
            key: key.into(),
            path: path.into(),
            data: Value::Null,
        }
    }
}

/// Request for `values`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesPayload {
    /// Operation identity
    pub method: Method,
    /// Every value in iteration order
    pub data: Vec<Value>,
}

impl ValuesPayload {
    /// Snapshot every value.
    pub fn new() -> Self {
        Self {
            method: Method::Values,
            data: Vec::new(),
        }
    }
}

impl Default for ValuesPayload {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Persisting computed updates
// ============================================================================

impl From<UpdateByDataPayload> for SetPayload {
    fn from(update: UpdateByDataPayload) -> Self {
        SetPayload::new(update.key, update.path, update.data)
    }
}

impl From<UpdateByHookPayload> for SetPayload {
    fn from(update: UpdateByHookPayload) -> Self {
        SetPayload::new(update.key, update.path, update.data)
    }
}
