//! SyncMap implementation
//!
//! BTreeMap-based table with a single RwLock for concurrency.

use std::borrow::Borrow;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, trace, warn};

use super::Snapshot;
use crate::codec;
use crate::config::Config;
use crate::error::{Result, SyncMapError};

/// A concurrency-safe ordered map
///
/// ## Concurrency Model: Single-Writer / Multiple-Reader
///
/// - **Reads** (get/contains/len/get_keys/snapshot): shared lock, run in
///   parallel with each other
/// - **Writes** (insert/remove/merge): exclusive lock, each one is applied
///   atomically with respect to every other operation
///
/// Rendering and serialization copy the table under the shared lock and
/// then format or encode the copy with no lock held.
///
/// All methods take `&self`; share an instance across threads with `Arc`.
pub struct SyncMap<K, V> {
    /// The table, only ever touched through the lock
    table: RwLock<BTreeMap<K, V>>,

    /// Codec settings used by merge
    config: Config,
}

impl<K: Ord, V> SyncMap<K, V> {
    /// Create a map holding the contents of `init`
    pub fn new<I>(init: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::with_config(init, Config::default())
    }

    /// Create a map holding the contents of `init`, with custom codec settings
    pub fn with_config<I>(init: I, config: Config) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            table: RwLock::new(init.into_iter().collect()),
            config,
        }
    }

    /// Insert a value at `key` (write lock)
    ///
    /// - Absent key: stored, returns `Ok(None)`
    /// - Present key with `fail_if_exists`: unchanged, returns `KeyExists`
    /// - Present key otherwise: overwritten, returns the previous value
    pub fn insert(&self, key: K, value: V, fail_if_exists: bool) -> Result<Option<V>> {
        let mut table = self.table.write();

        match table.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(None)
            }
            Entry::Occupied(_) if fail_if_exists => Err(SyncMapError::KeyExists),
            Entry::Occupied(mut slot) => Ok(Some(slot.insert(value))),
        }
    }

    /// Get a copy of the value at `key` (read lock)
    pub fn get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
        V: Clone,
    {
        self.table
            .read()
            .get(key)
            .cloned()
            .ok_or(SyncMapError::MissingKey)
    }

    /// Check whether `key` is present (read lock)
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.table.read().contains_key(key)
    }

    /// Remove `key` (write lock)
    ///
    /// Removing an absent key is a no-op. The removed value, if any, is
    /// handed back.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.table.write().remove(key)
    }

    /// Number of distinct keys (read lock)
    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    /// All keys, ascending (read lock)
    ///
    /// The returned vector is a fresh copy owned by the caller.
    pub fn get_keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.table.read().keys().cloned().collect()
    }

    /// Copy the whole table under one read lock hold
    pub fn snapshot(&self) -> Snapshot<K, V>
    where
        K: Clone,
        V: Clone,
    {
        Snapshot::new(self.table.read().clone())
    }

    /// Render as `map[k1:v1 k2:v2 ...]` with keys ascending
    ///
    /// Same output as the `Display` impl.
    pub fn render(&self) -> String
    where
        K: Clone + fmt::Display,
        V: Clone + fmt::Display,
    {
        self.snapshot().to_string()
    }

    /// Encode a point-in-time copy of the table
    ///
    /// See [`crate::codec`] for the frame layout.
    pub fn serialize(&self) -> Result<Vec<u8>>
    where
        K: Clone + Serialize,
        V: Clone + Serialize,
    {
        let snapshot = self.snapshot();
        trace!(entries = snapshot.len(), "serializing table");

        let frame = codec::encode_table(snapshot.as_table())?;
        trace!(bytes = frame.len(), "serialized table");

        Ok(frame)
    }

    /// Merge a table produced by `serialize` into this map
    ///
    /// Keys not yet present are inserted with the decoded value; keys already
    /// present keep their current value. The payload is fully decoded before
    /// the write lock is taken, so on error the map is unchanged.
    ///
    /// Returns the number of keys added.
    pub fn merge(&self, bytes: &[u8]) -> Result<usize>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
    {
        trace!(bytes = bytes.len(), "merging serialized table");

        let decoded: BTreeMap<K, V> =
            codec::decode_table(bytes, &self.config).map_err(|e| {
                warn!(error = %e, "rejected merge payload");
                e
            })?;
        let decoded_count = decoded.len();

        let mut added = 0;
        {
            let mut table = self.table.write();
            for (key, value) in decoded {
                if let Entry::Vacant(slot) = table.entry(key) {
                    slot.insert(value);
                    added += 1;
                }
            }
        }

        debug!(
            decoded = decoded_count,
            added,
            kept = decoded_count - added,
            "merge complete"
        );

        Ok(added)
    }

    /// Get the codec configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<K: Ord, V> Default for SyncMap<K, V> {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SyncMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<K: Ord, V, S: BuildHasher> From<HashMap<K, V, S>> for SyncMap<K, V> {
    fn from(init: HashMap<K, V, S>) -> Self {
        Self::new(init)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for SyncMap<K, V> {
    fn from(init: BTreeMap<K, V>) -> Self {
        Self {
            table: RwLock::new(init),
            config: Config::default(),
        }
    }
}

impl<K: Ord + Clone, V: Clone> Clone for SyncMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            table: RwLock::new(self.table.read().clone()),
            config: self.config,
        }
    }
}

impl<K: Ord + Clone + fmt::Display, V: Clone + fmt::Display> fmt::Display for SyncMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.snapshot(), f)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for SyncMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncMap")
            .field("table", &*self.table.read())
            .field("config", &self.config)
            .finish()
    }
}
