//! Convenient imports for mapstore.
//!
//! ```
//! use mapstore::prelude::*;
//!
//! let mut store = Store::builder().name("sessions").build();
//! store.set(SetPayload::new("token", Path::root(), "abc"));
//! assert!(store.has(HasPayload::new("token", Path::root())).data);
//! ```

// Store
pub use crate::{Store, StoreBuilder, StoreConfig};

// Error handling
pub use crate::{Error, Result};

// Core types
pub use crate::{Method, Path, PathSegment, Value};

// Payloads
pub use crate::{
    AutoKeyPayload, EnsurePayload, GetAllPayload, GetManyPayload, GetPayload, HasPayload,
    KeysPayload, SetManyPayload, SetPayload, SizePayload, UpdateByDataPayload,
    UpdateByHookPayload, ValuesPayload,
};

// Re-export serde_json for convenience
pub use serde_json::json;
