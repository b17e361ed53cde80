//! Context-line windowing shared by the renderers.
//!
//! Two modes. With a positive context width, every change entry gets an
//! inclusive window `[i - k, i + k]` clamped to the entry list; windows are
//! merged when they overlap or touch, and the gaps between them collapse to
//! omitted markers. With zero context, only change entries survive, and a
//! boundary marker separates visually disjoint change clusters.

use differ_core::{DiffEntry, EntryKind};

/// A piece of windowed output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Inclusive index range of entries to render in full.
    Window { start: usize, end: usize },
    /// `count` entries skipped before, between, or after windows.
    Omitted { count: usize },
}

/// Build merged context windows around every change entry.
///
/// Returns an empty list when there are no change entries at all.
pub(crate) fn segments<T>(entries: &[DiffEntry<T>], context_lines: usize) -> Vec<Segment> {
    let change_indexes: Vec<usize> = entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| !entry.is_same())
        .map(|(index, _)| index)
        .collect();
    if change_indexes.is_empty() {
        return Vec::new();
    }

    let mut ranges: Vec<(usize, usize)> = change_indexes
        .iter()
        .map(|&index| {
            (
                index.saturating_sub(context_lines),
                (index + context_lines).min(entries.len() - 1),
            )
        })
        .collect();
    ranges.sort_by_key(|range| range.0);

    let mut merged: Vec<(usize, usize)> = Vec::new();
    let mut current = ranges[0];
    for &next in &ranges[1..] {
        if next.0 <= current.1 + 1 {
            current.1 = current.1.max(next.1);
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);

    let mut segments = Vec::new();
    let mut previous_end: Option<usize> = None;
    for &(start, end) in &merged {
        let skipped = match previous_end {
            None => start,
            Some(prev) => start.saturating_sub(prev + 1),
        };
        if skipped > 0 {
            segments.push(Segment::Omitted { count: skipped });
        }
        segments.push(Segment::Window { start, end });
        previous_end = Some(end);
    }
    if let Some(prev) = previous_end {
        if prev + 1 < entries.len() {
            segments.push(Segment::Omitted {
                count: entries.len() - 1 - prev,
            });
        }
    }

    segments
}

/// Output items for zero-context rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ZeroContextItem {
    /// Index of a change entry to render.
    Change(usize),
    /// Boundary between disjoint change clusters.
    Separator,
}

/// Keep only change entries, marking cluster boundaries.
///
/// A separator is emitted when a run of changes is followed by `same`
/// entries and the next change (if any) has a different type, i.e. the
/// clusters would otherwise blur together.
pub(crate) fn zero_context_items<T>(entries: &[DiffEntry<T>]) -> Vec<ZeroContextItem> {
    let mut items = Vec::new();
    let mut previous_change: Option<EntryKind> = None;

    for (index, entry) in entries.iter().enumerate() {
        if !entry.is_same() {
            items.push(ZeroContextItem::Change(index));
            previous_change = Some(entry.kind());
        } else if let Some(kind) = previous_change {
            let next_change = entries[index + 1..]
                .iter()
                .find(|e| !e.is_same())
                .map(DiffEntry::kind);
            if next_change != Some(kind) {
                items.push(ZeroContextItem::Separator);
            }
            previous_change = None;
        }
    }

    items
}

/// Width of the line-number columns: the widest line number in the entry
/// list, with a floor of two characters.
pub(crate) fn padding_width<T>(entries: &[DiffEntry<T>]) -> usize {
    let max_line = entries
        .iter()
        .map(|entry| entry.left_line().unwrap_or(0).max(entry.right_line().unwrap_or(0)))
        .max()
        .unwrap_or(0);
    max_line.to_string().len().max(2)
}

/// Singular or plural noun for omitted-line markers.
pub(crate) fn line_noun(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}
