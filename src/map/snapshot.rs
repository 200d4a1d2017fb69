//! Point-in-time copy of a SyncMap table.

use std::borrow::Borrow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A consistent read view of a `SyncMap`
///
/// Taken under a single shared-lock hold and owned by the caller afterwards,
/// so later writes to the map are not visible through it. Iterates in
/// ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<K, V> {
    table: BTreeMap<K, V>,
}

impl<K: Ord, V> Snapshot<K, V> {
    pub(crate) fn new(table: BTreeMap<K, V>) -> Self {
        Self { table }
    }

    /// Number of entries captured
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Look up a captured value
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.table.get(key)
    }

    /// Captured keys, ascending
    pub fn keys(&self) -> btree_map::Keys<'_, K, V> {
        self.table.keys()
    }

    /// Captured entries, ascending by key
    pub fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.table.iter()
    }

    /// Unwrap into the underlying ordered table
    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.table
    }

    pub(crate) fn as_table(&self) -> &BTreeMap<K, V> {
        &self.table
    }
}

/// Renders as `map[k1:v1 k2:v2 ...]`
impl<K: fmt::Display, V: fmt::Display> fmt::Display for Snapshot<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (key, value)) in self.table.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        f.write_str("]")
    }
}

impl<K, V> IntoIterator for Snapshot<K, V> {
    type Item = (K, V);
    type IntoIter = btree_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Snapshot<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = btree_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.table.iter()
    }
}

impl<K, V> From<Snapshot<K, V>> for BTreeMap<K, V> {
    fn from(snapshot: Snapshot<K, V>) -> Self {
        snapshot.table
    }
}
