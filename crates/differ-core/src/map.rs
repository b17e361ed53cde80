//! Key-value map diff: membership and value comparison, no LCS involved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single change between two maps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MapDiffEntry<K, V> {
    /// Key present only in the new map.
    Added { key: K, value: V },
    /// Key present only in the old map.
    Removed { key: K, value: V },
    /// Key present in both maps with differing values.
    Modified {
        key: K,
        #[serde(rename = "oldValue")]
        old_value: V,
        #[serde(rename = "newValue")]
        new_value: V,
    },
    /// Key present in both maps with equal values. Emitted only on request.
    Unchanged { key: K, value: V },
}

impl<K, V> MapDiffEntry<K, V> {
    /// The key this entry refers to.
    pub fn key(&self) -> &K {
        match self {
            MapDiffEntry::Added { key, .. }
            | MapDiffEntry::Removed { key, .. }
            | MapDiffEntry::Modified { key, .. }
            | MapDiffEntry::Unchanged { key, .. } => key,
        }
    }
}

/// Diff two maps under structural value equality.
pub fn diff_maps<K, V>(
    old: &BTreeMap<K, V>,
    new: &BTreeMap<K, V>,
    show_unchanged: bool,
) -> Vec<MapDiffEntry<K, V>>
where
    K: Ord + Clone,
    V: Clone + PartialEq,
{
    diff_maps_by(old, new, show_unchanged, |a, b| a == b)
}

/// Diff two maps under a caller-supplied value equality predicate.
///
/// Left-originated entries (`Removed`/`Modified`/`Unchanged`) come first in
/// the old map's iteration order, followed by `Added` entries in the new
/// map's iteration order.
pub fn diff_maps_by<K, V, F>(
    old: &BTreeMap<K, V>,
    new: &BTreeMap<K, V>,
    show_unchanged: bool,
    eq: F,
) -> Vec<MapDiffEntry<K, V>>
where
    K: Ord + Clone,
    V: Clone,
    F: Fn(&V, &V) -> bool,
{
    let mut entries = Vec::new();

    for (key, old_value) in old {
        match new.get(key) {
            None => entries.push(MapDiffEntry::Removed {
                key: key.clone(),
                value: old_value.clone(),
            }),
            Some(new_value) if !eq(old_value, new_value) => {
                entries.push(MapDiffEntry::Modified {
                    key: key.clone(),
                    old_value: old_value.clone(),
                    new_value: new_value.clone(),
                });
            }
            Some(_) if show_unchanged => entries.push(MapDiffEntry::Unchanged {
                key: key.clone(),
                value: old_value.clone(),
            }),
            Some(_) => {}
        }
    }

    for (key, new_value) in new {
        if !old.contains_key(key) {
            entries.push(MapDiffEntry::Added {
                key: key.clone(),
                value: new_value.clone(),
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn disjoint_keys_are_removed_then_added() {
        let old = map(&[("x", 1), ("y", 2)]);
        let new = map(&[("y", 2), ("z", 3)]);
        let result = diff_maps(&old, &new, false);

        assert_eq!(
            result,
            vec![
                MapDiffEntry::Removed {
                    key: "x".to_string(),
                    value: 1
                },
                MapDiffEntry::Added {
                    key: "z".to_string(),
                    value: 3
                },
            ]
        );
    }

    #[test]
    fn modified_value_carries_both_sides() {
        let old = map(&[("x", 1)]);
        let new = map(&[("x", 2)]);
        let result = diff_maps(&old, &new, false);

        assert_eq!(
            result,
            vec![MapDiffEntry::Modified {
                key: "x".to_string(),
                old_value: 1,
                new_value: 2
            }]
        );
    }

    #[test]
    fn unchanged_only_when_requested() {
        let old = map(&[("x", 1)]);
        let new = map(&[("x", 1)]);

        assert!(diff_maps(&old, &new, false).is_empty());
        assert_eq!(
            diff_maps(&old, &new, true),
            vec![MapDiffEntry::Unchanged {
                key: "x".to_string(),
                value: 1
            }]
        );
    }

    #[test]
    fn empty_maps_yield_empty_diff() {
        let old: BTreeMap<String, i64> = BTreeMap::new();
        let new = BTreeMap::new();
        assert!(diff_maps(&old, &new, false).is_empty());
    }

    #[test]
    fn custom_predicate_drives_classification() {
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct Versioned {
            v: u32,
        }

        let old: BTreeMap<String, Versioned> = [
            ("x".to_string(), Versioned { v: 1 }),
            ("y".to_string(), Versioned { v: 2 }),
        ]
        .into();
        let new: BTreeMap<String, Versioned> = [
            ("x".to_string(), Versioned { v: 1 }),
            ("y".to_string(), Versioned { v: 3 }),
        ]
        .into();

        let result = diff_maps_by(&old, &new, true, |a, b| a.v == b.v);

        assert_eq!(
            result,
            vec![
                MapDiffEntry::Unchanged {
                    key: "x".to_string(),
                    value: Versioned { v: 1 }
                },
                MapDiffEntry::Modified {
                    key: "y".to_string(),
                    old_value: Versioned { v: 2 },
                    new_value: Versioned { v: 3 }
                },
            ]
        );
    }
}
