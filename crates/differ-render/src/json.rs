//! JSON renderer: a machine-readable report of the windowed diff.

use differ_core::DiffEntry;
use serde::Serialize;

use crate::window::{segments, Segment};

/// Options for [`render_json`].
#[derive(Clone, Copy, Debug)]
pub struct JsonOptions {
    /// Number of unchanged lines to keep around each change. Zero emits
    /// changed lines only. Defaults to `3`.
    pub context_lines: usize,
    /// Include a `lineNumbers` object on each line entry. Defaults to `true`.
    pub show_line_numbers: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        Self {
            context_lines: 3,
            show_line_numbers: true,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    options: JsonReportOptions,
    diff: Vec<JsonEntry<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportOptions {
    context_lines: usize,
    show_line_numbers: bool,
}

/// One element of the `diff` array. `lineNumbers` is present only when
/// requested, and its `old`/`new` fields only for sides the entry touches.
#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonEntry<'a> {
    Unchanged {
        #[serde(rename = "lineNumbers", skip_serializing_if = "Option::is_none")]
        line_numbers: Option<LineNumbers>,
        content: &'a str,
    },
    Added {
        #[serde(rename = "lineNumbers", skip_serializing_if = "Option::is_none")]
        line_numbers: Option<LineNumbers>,
        content: &'a str,
    },
    Removed {
        #[serde(rename = "lineNumbers", skip_serializing_if = "Option::is_none")]
        line_numbers: Option<LineNumbers>,
        content: &'a str,
    },
    Omitted {
        count: usize,
    },
}

#[derive(Serialize)]
struct LineNumbers {
    #[serde(skip_serializing_if = "Option::is_none")]
    old: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new: Option<usize>,
}

fn json_entry<T: AsRef<str>>(entry: &DiffEntry<T>, show_line_numbers: bool) -> JsonEntry<'_> {
    let line_numbers = show_line_numbers.then(|| LineNumbers {
        old: entry.left_line(),
        new: entry.right_line(),
    });
    let content = entry.content().as_ref();
    match entry {
        DiffEntry::Same { .. } => JsonEntry::Unchanged {
            line_numbers,
            content,
        },
        DiffEntry::Add { .. } => JsonEntry::Added {
            line_numbers,
            content,
        },
        DiffEntry::Delete { .. } => JsonEntry::Removed {
            line_numbers,
            content,
        },
    }
}

/// Render diff entries as a pretty-printed JSON report.
///
/// The report is `{ "options": { ... }, "diff": [ ... ] }` with two-space
/// indentation. With `context_lines = 0` only change entries appear and no
/// omitted markers are emitted; with a positive context width and no changes
/// at all, every entry is reported as `unchanged`.
pub fn render_json<T: AsRef<str>>(entries: &[DiffEntry<T>], options: &JsonOptions) -> String {
    let mut diff = Vec::new();

    if options.context_lines == 0 {
        for entry in entries.iter().filter(|entry| !entry.is_same()) {
            diff.push(json_entry(entry, options.show_line_numbers));
        }
    } else {
        let segments = segments(entries, options.context_lines);
        if segments.is_empty() {
            for entry in entries {
                diff.push(json_entry(entry, options.show_line_numbers));
            }
        } else {
            for segment in segments {
                match segment {
                    Segment::Omitted { count } => diff.push(JsonEntry::Omitted { count }),
                    Segment::Window { start, end } => {
                        for entry in &entries[start..=end] {
                            diff.push(json_entry(entry, options.show_line_numbers));
                        }
                    }
                }
            }
        }
    }

    let report = JsonReport {
        options: JsonReportOptions {
            context_lines: options.context_lines,
            show_line_numbers: options.show_line_numbers,
        },
        diff,
    };
    serde_json::to_string_pretty(&report).unwrap_or_default()
}
