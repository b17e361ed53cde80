//! Sequential diff: reconstruct a minimal edit script from the LCS table.
//!
//! [`sequential_diff`] backtraces the table built by [`crate::lcs`] into an
//! ordered stream of [`DiffEntry`] values. Concatenating the `Same` and
//! `Delete` contents reproduces the left input; `Same` and `Add` reproduce
//! the right input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lcs::lcs_table_by;

/// The change type of a diff entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Same,
    Add,
    Delete,
}

/// One entry of an edit script.
///
/// Each variant carries only the positions that side of the diff can have: a
/// `Delete` consumes the left sequence only and therefore never holds a right
/// position. Positions are 1-based and present only when requested via
/// [`DiffOptions::with_positions`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DiffEntry<T> {
    /// Element present in both sequences.
    Same {
        content: T,
        #[serde(rename = "leftLine", default, skip_serializing_if = "Option::is_none")]
        left_line: Option<usize>,
        #[serde(rename = "rightLine", default, skip_serializing_if = "Option::is_none")]
        right_line: Option<usize>,
    },
    /// Element present only in the right sequence.
    Add {
        content: T,
        #[serde(rename = "rightLine", default, skip_serializing_if = "Option::is_none")]
        right_line: Option<usize>,
    },
    /// Element present only in the left sequence.
    Delete {
        content: T,
        #[serde(rename = "leftLine", default, skip_serializing_if = "Option::is_none")]
        left_line: Option<usize>,
    },
}

impl<T> DiffEntry<T> {
    /// The element or coalesced run carried by this entry.
    pub fn content(&self) -> &T {
        match self {
            DiffEntry::Same { content, .. }
            | DiffEntry::Add { content, .. }
            | DiffEntry::Delete { content, .. } => content,
        }
    }

    /// The change type of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            DiffEntry::Same { .. } => EntryKind::Same,
            DiffEntry::Add { .. } => EntryKind::Add,
            DiffEntry::Delete { .. } => EntryKind::Delete,
        }
    }

    /// Returns `true` for `Same` entries.
    pub fn is_same(&self) -> bool {
        matches!(self, DiffEntry::Same { .. })
    }

    /// Returns `true` for `Add` entries.
    pub fn is_add(&self) -> bool {
        matches!(self, DiffEntry::Add { .. })
    }

    /// Returns `true` for `Delete` entries.
    pub fn is_delete(&self) -> bool {
        matches!(self, DiffEntry::Delete { .. })
    }

    /// 1-based position in the left sequence, if this entry consumes the left
    /// side and positions were requested.
    pub fn left_line(&self) -> Option<usize> {
        match self {
            DiffEntry::Same { left_line, .. } | DiffEntry::Delete { left_line, .. } => *left_line,
            DiffEntry::Add { .. } => None,
        }
    }

    /// 1-based position in the right sequence, if this entry consumes the
    /// right side and positions were requested.
    pub fn right_line(&self) -> Option<usize> {
        match self {
            DiffEntry::Same { right_line, .. } | DiffEntry::Add { right_line, .. } => *right_line,
            DiffEntry::Delete { .. } => None,
        }
    }
}

/// Options for [`sequential_diff`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DiffOptions {
    /// Attach 1-based input positions to each entry. Defaults to `false`.
    pub with_positions: bool,
}

/// Diff two sequences under structural equality.
pub fn sequential_diff<T>(left: &[T], right: &[T], options: &DiffOptions) -> Vec<DiffEntry<T>>
where
    T: Clone + PartialEq,
{
    sequential_diff_by(left, right, options, |a, b| a == b)
}

/// Diff two sequences under a caller-supplied equality predicate.
///
/// Produces a minimal edit script by backtracing the LCS table from
/// `(left.len(), right.len())` to `(0, 0)`. When a horizontal and a vertical
/// move preserve the LCS length equally, the right-index move wins, so an
/// `Add` is taken over a `Delete` at every tie. Output length is between
/// `max(n, m)` and `n + m`.
pub fn sequential_diff_by<T, F>(
    left: &[T],
    right: &[T],
    options: &DiffOptions,
    eq: F,
) -> Vec<DiffEntry<T>>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let table = lcs_table_by(left, right, &eq);
    let mut entries = Vec::new();
    let mut i = left.len();
    let mut j = right.len();

    // The element consumed at (i, j) sits at 1-based position i (left) or
    // j (right), so the indices double as the position counters.
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && eq(&left[i - 1], &right[j - 1]) {
            entries.push(DiffEntry::Same {
                content: left[i - 1].clone(),
                left_line: options.with_positions.then_some(i),
                right_line: options.with_positions.then_some(j),
            });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            entries.push(DiffEntry::Add {
                content: right[j - 1].clone(),
                right_line: options.with_positions.then_some(j),
            });
            j -= 1;
        } else {
            entries.push(DiffEntry::Delete {
                content: left[i - 1].clone(),
                left_line: options.with_positions.then_some(i),
            });
            i -= 1;
        }
    }

    entries.reverse();
    debug!(
        left_len = left.len(),
        right_len = right.len(),
        entries = entries.len(),
        "computed sequential diff"
    );
    entries
}
