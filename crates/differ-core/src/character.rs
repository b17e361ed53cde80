//! Character-granularity diff with run coalescing.
//!
//! Runs the sequence differ over individual `char`s, then folds maximal runs
//! of consecutive same-type entries into single entries whose content is the
//! concatenated run. Positions are not supported at this granularity.

use crate::sequence::{sequential_diff, DiffEntry, DiffOptions, EntryKind};

/// Diff two strings character by character, coalescing runs.
///
/// The comparison unit is the Unicode scalar value. Output entries never
/// carry positions.
pub fn character_diff(left: &str, right: &str) -> Vec<DiffEntry<String>> {
    let left_chars: Vec<char> = left.chars().collect();
    let right_chars: Vec<char> = right.chars().collect();
    let entries = sequential_diff(&left_chars, &right_chars, &DiffOptions::default());

    let mut runs: Vec<(EntryKind, String)> = Vec::new();
    for entry in &entries {
        let ch = *entry.content();
        if runs.last().map(|(kind, _)| *kind) == Some(entry.kind()) {
            if let Some((_, run)) = runs.last_mut() {
                run.push(ch);
            }
        } else {
            runs.push((entry.kind(), ch.to_string()));
        }
    }

    runs.into_iter()
        .map(|(kind, content)| match kind {
            EntryKind::Same => DiffEntry::Same {
                content,
                left_line: None,
                right_line: None,
            },
            EntryKind::Add => DiffEntry::Add {
                content,
                right_line: None,
            },
            EntryKind::Delete => DiffEntry::Delete {
                content,
                left_line: None,
            },
        })
        .collect()
}
