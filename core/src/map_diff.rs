//! Generic keyed set-difference over two ordered mappings.
//!
//! This is the foundation every higher-level diff is built on: paths are
//! keyed by url, operations by HTTP method, parameters by (name, location),
//! object properties by property name.

use std::collections::BTreeMap;

/// The result of comparing the key sets of two ordered maps.
///
/// Borrows from both inputs; nothing is cloned and neither map is mutated.
#[derive(Debug)]
pub struct MapKeyDiff<'a, K, V> {
    /// Entries whose key is absent from the old map.
    pub increased: Vec<(&'a K, &'a V)>,
    /// Entries whose key is absent from the new map.
    pub missing: Vec<(&'a K, &'a V)>,
    /// Keys present on both sides, in new-map iteration order.
    pub shared: Vec<&'a K>,
}

impl<'a, K: Ord, V> MapKeyDiff<'a, K, V> {
    pub fn diff(old: &'a BTreeMap<K, V>, new: &'a BTreeMap<K, V>) -> MapKeyDiff<'a, K, V> {
        let mut increased = Vec::new();
        let mut shared = Vec::new();
        for (key, value) in new {
            if old.contains_key(key) {
                shared.push(key);
            } else {
                increased.push((key, value));
            }
        }

        let missing = old
            .iter()
            .filter(|(key, _)| !new.contains_key(*key))
            .collect();

        MapKeyDiff {
            increased,
            missing,
            shared,
        }
    }
}
