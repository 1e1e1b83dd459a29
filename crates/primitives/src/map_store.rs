//! MapStore: in-memory key-value store with path addressing
//!
//! ## Design
//!
//! `Store` owns a single entry table from string key to [`Value`] plus the
//! counter behind `auto_key`. Every operation takes a request record from
//! [`crate::payload`] and returns it with `data` filled in.
//!
//! - **Absence is not an error**: a missing key or a path that does not
//!   resolve reads as `Value::Null` (or `false` for `has`).
//! - **Writes never fail**: structural conflicts along a path are coerced,
//!   see [`crate::traverse`].
//! - **Iteration order**: `keys`, `values` and `get_all` walk entries in
//!   first-insertion order. Overwriting a key keeps its position.
//!
//! ## Compute vs. persist
//!
//! `update_by_data` and `update_by_hook` only compute. The store is left
//! untouched until the caller hands the result to [`Store::commit`] (or
//! issues its own `set`).
//!
//! ```
//! use mapstore_core::{Path, Value};
//! use mapstore_primitives::{GetPayload, SetPayload, Store, UpdateByDataPayload};
//!
//! let mut store = Store::new();
//! store.set(SetPayload::new("user", Path::root(), Value::from_iter([("a", 0), ("b", 2)])));
//!
//! let update = store.update_by_data(UpdateByDataPayload::new(
//!     "user",
//!     Path::root(),
//!     Value::from_iter([("a", 1)]),
//! ));
//! assert_eq!(update.data, Value::from_iter([("a", 1), ("b", 2)]));
//!
//! // Nothing written yet
//! let stored = store.get(GetPayload::new("user", ["a"])).data;
//! assert_eq!(stored, Value::Int(0));
//!
//! store.commit(update);
//! let stored = store.get(GetPayload::new("user", ["a"])).data;
//! assert_eq!(stored, Value::Int(1));
//! ```
//!
//! ## Hooks and interleaving
//!
//! `update_by_hook` reads the current value synchronously, then returns a
//! future that owns everything it needs. The store is free to change while
//! that future is pending, so the value the hook saw may be stale by the
//! time its result is committed. Callers that need an atomic
//! read-modify-write must serialize hooks per key themselves.

use crate::config::{StoreBuilder, StoreConfig};
use crate::merge::merge_defaults;
use crate::payload::{
    AutoKeyPayload, EnsurePayload, GetAllPayload, GetManyPayload, GetPayload, HasPayload,
    KeysPayload, SetManyPayload, SetPayload, SizePayload, UpdateByDataPayload,
    UpdateByHookPayload, ValuesPayload,
};
use crate::traverse::{get_at, set_at};
use mapstore_core::{Path, Value};
use rustc_hash::FxHashMap;
use std::future::Future;
use tracing::{debug, trace};

/// In-memory key-value store.
///
/// # Thread Safety
///
/// `Store` is a plain single-owner structure: reads take `&self`, writes
/// take `&mut self`. Sharing it across threads requires an external lock.
#[derive(Debug, Clone)]
pub struct Store {
    config: StoreConfig,

    /// Entries in first-insertion order
    entries: Vec<(String, Value)>,

    /// Key to position in `entries`
    index: FxHashMap<String, usize>,

    /// Last key handed out by `auto_key`
    ///
    /// Starts at 0, never decremented, never reset.
    auto_key_count: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let capacity = config.initial_capacity;
        Self {
            config,
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            auto_key_count: 0,
        }
    }

    /// Start building a store.
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // =========================================================================
    // Entry table
    // =========================================================================

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Mutable slot for `key`, inserting `Null` first if absent.
    fn slot_mut(&mut self, key: &str) -> &mut Value {
        let position = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.entries.push((key.to_string(), Value::Null));
                self.index.insert(key.to_string(), i);
                debug!(store = %self.config.name, key, "created entry");
                i
            }
        };
        &mut self.entries[position].1
    }

    /// The value at (`key`, `path`), or `Null` when nothing resolves.
    fn resolve(&self, key: &str, path: &Path) -> Value {
        self.lookup(key)
            .and_then(|value| get_at(value, path))
            .cloned()
            .unwrap_or(Value::Null)
    }

    fn write(&mut self, key: &str, path: &Path, value: Value) {
        trace!(store = %self.config.name, key, path = %path, "set");
        set_at(self.slot_mut(key), path, value);
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Hand out a fresh key: the decimal string of the incremented counter.
    ///
    /// The first call on a store returns `"1"`.
    pub fn auto_key(&mut self, mut payload: AutoKeyPayload) -> AutoKeyPayload {
        self.auto_key_count += 1;
        let key = self.auto_key_count.to_string();
        trace!(store = %self.config.name, key = %key, "allocated auto key");
        payload.data = Some(key);
        payload
    }

    /// Insert `default_value` if `key` is absent; `data` is the value now
    /// stored at `key`.
    pub fn ensure(&mut self, mut payload: EnsurePayload) -> EnsurePayload {
        if self.lookup(&payload.key).is_none() {
            *self.slot_mut(&payload.key) = payload.default_value.clone();
        }
        payload.data = self.resolve(&payload.key, &Path::root());
        payload
    }

    /// Read the value at (`key`, `path`).
    ///
    /// `data` is `Null` when the key is absent, the path does not resolve,
    /// or the resolved value is itself `Null`.
    pub fn get(&self, mut payload: GetPayload) -> GetPayload {
        payload.data = self.resolve(&payload.key, &payload.path);
        payload
    }

    /// Snapshot of every entry.
    pub fn get_all(&self, mut payload: GetAllPayload) -> GetAllPayload {
        payload.data = self.entries.iter().cloned().collect();
        payload
    }

    /// Read several (key, path) pairs, one `get` each.
    ///
    /// When a key appears more than once, the last pair's result wins.
    pub fn get_many(&self, mut payload: GetManyPayload) -> GetManyPayload {
        for (key, path) in &payload.key_paths {
            let result = self.get(GetPayload::new(key.clone(), path.clone()));
            payload.data.insert(result.key, result.data);
        }
        payload
    }

    /// Presence check.
    ///
    /// - Key absent: `false`.
    /// - Key present, empty path: `true`.
    /// - Key present, non-empty path: whether the resolved value is truthy,
    ///   so fields holding `0`, `""`, `false` or `Null` report `false`.
    pub fn has(&self, mut payload: HasPayload) -> HasPayload {
        payload.data = match self.lookup(&payload.key) {
            None => false,
            Some(_) if payload.path.is_empty() => true,
            Some(value) => get_at(value, &payload.path).map_or(false, Value::is_truthy),
        };
        payload
    }

    /// Snapshot of every key in iteration order.
    pub fn keys(&self, mut payload: KeysPayload) -> KeysPayload {
        payload.data = self.entries.iter().map(|(key, _)| key.clone()).collect();
        payload
    }

    /// Write `value` at (`key`, `path`).
    ///
    /// An empty path replaces the entry (creating it if needed). A non-empty
    /// path writes inside the current value, creating or coercing containers
    /// along the way.
    pub fn set(&mut self, payload: SetPayload) -> SetPayload {
        self.write(&payload.key, &payload.path, payload.value.clone());
        payload
    }

    /// `set` the same value at every (key, path) pair, in order.
    pub fn set_many(&mut self, payload: SetManyPayload) -> SetManyPayload {
        for (key, path) in &payload.key_paths {
            self.write(key, path, payload.value.clone());
        }
        payload
    }

    /// Live number of keys.
    pub fn size(&self, mut payload: SizePayload) -> SizePayload {
        payload.data = self.entries.len();
        payload
    }

    /// Compute the result of merging `input_data` onto the value at
    /// (`key`, `path`). See [`crate::merge`] for the rules.
    ///
    /// The store is not modified; pass the result to [`Store::commit`] to
    /// persist it.
    pub fn update_by_data(&self, mut payload: UpdateByDataPayload) -> UpdateByDataPayload {
        let current = self.resolve(&payload.key, &payload.path);
        payload.data = merge_defaults(current, payload.input_data.clone());
        payload
    }

    /// Compute the result of applying `hook` to the value at (`key`, `path`).
    ///
    /// The current value (`Null` if absent) is read before this returns. The
    /// returned future does not borrow the store, so other operations may run
    /// while the hook is pending. A hook error is returned unchanged.
    ///
    /// The store is not modified; pass the result to [`Store::commit`] to
    /// persist it.
    ///
    /// ```
    /// use mapstore_core::{Path, Value};
    /// use mapstore_primitives::{SetPayload, Store, UpdateByHookPayload};
    /// use std::convert::Infallible;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() -> Result<(), Infallible> {
    /// let mut store = Store::new();
    /// store.set(SetPayload::new("visits", Path::root(), 1));
    ///
    /// let update = store
    ///     .update_by_hook(UpdateByHookPayload::new("visits", Path::root()), |current| async move {
    ///         let n = current.as_int().unwrap_or(0);
    ///         Ok::<_, Infallible>(Value::Int(n + 1))
    ///     })
    ///     .await?;
    /// assert_eq!(update.data, Value::Int(2));
    /// # Ok(())
    /// # }
    /// ```
    pub fn update_by_hook<F, Fut, E>(
        &self,
        payload: UpdateByHookPayload,
        hook: F,
    ) -> impl Future<Output = Result<UpdateByHookPayload, E>>
    where
        F: FnOnce(Value) -> Fut,
        Fut: Future<Output = Result<Value, E>>,
    {
        let current = self.resolve(&payload.key, &payload.path);
        let store = self.config.name.clone();

        async move {
            let mut payload = payload;
            debug!(store = %store, key = %payload.key, path = %payload.path, "running update hook");
            payload.data = hook(current).await?;
            trace!(store = %store, key = %payload.key, "update hook finished");
            Ok(payload)
        }
    }

    /// Snapshot of every value in iteration order.
    pub fn values(&self, mut payload: ValuesPayload) -> ValuesPayload {
        payload.data = self.entries.iter().map(|(_, value)| value.clone()).collect();
        payload
    }

    /// Persist a computed update (or any other `set`).
    pub fn commit(&mut self, update: impl Into<SetPayload>) -> SetPayload {
        self.set(update.into())
    }
}

// ============================================================================
// Tests
// ============================================================================
