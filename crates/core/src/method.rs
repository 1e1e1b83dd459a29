//! Operation method enumeration
//!
//! Every request record carries a `method` identity field naming the
//! operation it belongs to. The set of names is fixed by the dispatching
//! façade:
//!
//! `is_write` reports whether an operation can change the entry table.
//! `autoKey` only advances the key counter, so it does not count.
//!
//! | Method | Wire name | Writes entries |
//! |--------|-----------|----------------|
//! | AutoKey | `autoKey` | no (advances the key counter) |
//! | Ensure | `ensure` | yes (if absent) |
//! | Get | `get` | no |
//! | GetAll | `getAll` | no |
//! | GetMany | `getMany` | no |
//! | Has | `has` | no |
//! | Keys | `keys` | no |
//! | Set | `set` | yes |
//! | SetMany | `setMany` | yes |
//! | Size | `size` | no |
//! | Update | `update` | no (compute only) |
//! | Values | `values` | no |

use serde::{Deserialize, Serialize};

/// The twelve operations a store answers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    /// Generate a fresh key
    AutoKey,
    /// Insert a default if absent
    Ensure,
    /// Read one key at a path
    Get,
    /// Snapshot every entry
    GetAll,
    /// Read several (key, path) pairs
    GetMany,
    /// Presence / truthiness check
    Has,
    /// Snapshot every key
    Keys,
    /// Write one key at a path
    Set,
    /// Write one value at several (key, path) pairs
    SetMany,
    /// Count keys
    Size,
    /// Compute an updated value (by data merge or by hook)
    Update,
    /// Snapshot every value
    Values,
}

impl Method {
    /// All methods (for iteration)
    pub const ALL: [Method; 12] = [
        Method::AutoKey,
        Method::Ensure,
        Method::Get,
        Method::GetAll,
        Method::GetMany,
        Method::Has,
        Method::Keys,
        Method::Set,
        Method::SetMany,
        Method::Size,
        Method::Update,
        Method::Values,
    ];

    /// Wire name, identical to the serde representation
    pub const fn name(&self) -> &'static str {
        match self {
            Method::AutoKey => "autoKey",
            Method::Ensure => "ensure",
            Method::Get => "get",
            Method::GetAll => "getAll",
            Method::GetMany => "getMany",
            Method::Has => "has",
            Method::Keys => "keys",
            Method::Set => "set",
            Method::SetMany => "setMany",
            Method::Size => "size",
            Method::Update => "update",
            Method::Values => "values",
        }
    }

    /// Parse from wire name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.name() == name)
    }

    /// Check if this method can change the entry table
    pub const fn is_write(&self) -> bool {
        matches!(self, Method::Ensure | Method::Set | Method::SetMany)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Tests
// ============================================================================
