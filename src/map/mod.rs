//! Map Module
//!
//! The synchronized map and its point-in-time snapshots.
//!
//! ## Responsibilities
//! - Single-writer/multi-reader access to one key/value table
//! - Ordered keys for deterministic rendering and encoding
//! - Consistent read views (snapshots) for formatting and serialization
//! - Additive-only merge of serialized tables
//!
//! ## Data Structure Choice
//! Using BTreeMap wrapped in a parking_lot RwLock:
//! - Ordered keys (rendering and `get_keys` need ascending order)
//! - Equal contents always serialize to equal bytes
//! - No lock poisoning, guards released on unwind

mod snapshot;
mod sync_map;

pub use snapshot::Snapshot;
pub use sync_map::SyncMap;

use std::collections::HashMap;
use std::hash::BuildHasher;

/// Returns the keys of an unordered map, sorted ascending
pub fn sorted_keys<K, V, S>(map: &HashMap<K, V, S>) -> Vec<K>
where
    K: Ord + Clone,
    S: BuildHasher,
{
    let mut keys: Vec<K> = map.keys().cloned().collect();
    keys.sort_unstable();
    keys
}
