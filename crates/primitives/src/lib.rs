//! The map store and the pieces it is built from
//!
//! - [`Store`]: entry table, auto-key counter and every store operation
//! - [`payload`]: request/response records, one per operation
//! - [`traverse`]: path resolution and container coercion on write
//! - [`merge`]: merge-by-data used by `update_by_data`
//! - [`config`]: [`StoreConfig`] and [`StoreBuilder`]

#![warn(missing_docs)]

pub mod config;
pub mod map_store;
pub mod merge;
pub mod payload;
pub mod traverse;

pub use config::{StoreBuilder, StoreConfig, DEFAULT_STORE_NAME};
pub use map_store::Store;
pub use payload::{
    AutoKeyPayload, EnsurePayload, GetAllPayload, GetManyPayload, GetPayload, HasPayload,
    KeyPath, KeysPayload, SetManyPayload, SetPayload, SizePayload, UpdateByDataPayload,
    UpdateByHookPayload, ValuesPayload,
};
