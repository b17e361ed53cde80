//! Set diff: symmetric membership comparison.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single change between two sets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SetDiffEntry<T> {
    /// Value present only in the new set.
    Added { value: T },
    /// Value present only in the old set.
    Removed { value: T },
    /// Value present in both sets. Emitted only on request.
    Unchanged { value: T },
}

impl<T> SetDiffEntry<T> {
    /// The value this entry refers to.
    pub fn value(&self) -> &T {
        match self {
            SetDiffEntry::Added { value }
            | SetDiffEntry::Removed { value }
            | SetDiffEntry::Unchanged { value } => value,
        }
    }
}

/// Diff two sets by membership.
///
/// Left-originated entries (`Removed`/`Unchanged`) come first in the old
/// set's iteration order, followed by `Added` entries in the new set's
/// iteration order.
pub fn diff_sets<T>(old: &BTreeSet<T>, new: &BTreeSet<T>, show_unchanged: bool) -> Vec<SetDiffEntry<T>>
where
    T: Ord + Clone,
{
    let mut entries = Vec::new();

    for value in old {
        if !new.contains(value) {
            entries.push(SetDiffEntry::Removed {
                value: value.clone(),
            });
        } else if show_unchanged {
            entries.push(SetDiffEntry::Unchanged {
                value: value.clone(),
            });
        }
    }

    for value in new {
        if !old.contains(value) {
            entries.push(SetDiffEntry::Added {
                value: value.clone(),
            });
        }
    }

    entries
}
