//! Terminal renderer: line-number gutters, `+`/`-` prefixes, ANSI colours.

use differ_core::{DiffEntry, EntryKind};

use crate::ansi::AnsiColour;
use crate::window::{line_noun, padding_width, segments, zero_context_items, Segment, ZeroContextItem};

/// Options for [`render_terminal`].
#[derive(Clone, Copy, Debug)]
pub struct TerminalOptions {
    /// Wrap line contents in ANSI colour codes. Defaults to `true`.
    pub use_colours: bool,
    /// Number of unchanged lines to keep around each change. Zero renders
    /// changed lines only. Defaults to `0`.
    pub context_lines: usize,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            use_colours: true,
            context_lines: 0,
        }
    }
}

/// Render diff entries for terminal display.
///
/// Both line-number columns are right-aligned to the widest line number
/// (minimum two characters). Deletions are red, additions green, unchanged
/// lines grey when colours are enabled.
pub fn render_terminal<T: AsRef<str>>(entries: &[DiffEntry<T>], options: &TerminalOptions) -> String {
    let width = padding_width(entries);
    let gutter = " ".repeat(width);
    let mut lines = Vec::new();

    if options.context_lines == 0 {
        for item in zero_context_items(entries) {
            match item {
                ZeroContextItem::Change(index) => {
                    lines.push(format_line(&entries[index], width, options.use_colours));
                }
                ZeroContextItem::Separator => lines.push(format!("{gutter} {gutter}    ")),
            }
        }
    } else {
        for segment in segments(entries, options.context_lines) {
            match segment {
                Segment::Omitted { count } => lines.push(format!(
                    "{gutter} {gutter}    ... {count} {} omitted ...",
                    line_noun(count)
                )),
                Segment::Window { start, end } => {
                    for entry in &entries[start..=end] {
                        lines.push(format_line(entry, width, options.use_colours));
                    }
                }
            }
        }
    }

    lines.join("\n")
}

fn format_line<T: AsRef<str>>(entry: &DiffEntry<T>, width: usize, use_colours: bool) -> String {
    let left = gutter_cell(entry.left_line(), width);
    let right = gutter_cell(entry.right_line(), width);
    let prefix = match entry.kind() {
        EntryKind::Add => '+',
        EntryKind::Delete => '-',
        EntryKind::Same => ' ',
    };
    let content = entry.content().as_ref();

    if use_colours {
        let colour = match entry.kind() {
            EntryKind::Delete => AnsiColour::Red,
            EntryKind::Add => AnsiColour::Green,
            EntryKind::Same => AnsiColour::Grey,
        };
        format!("{left} {right} {colour}{prefix} {content}{}", AnsiColour::Reset)
    } else {
        format!("{left} {right} {prefix} {content}")
    }
}

fn gutter_cell(line: Option<usize>, width: usize) -> String {
    match line {
        Some(number) => format!("{number:>width$}"),
        None => " ".repeat(width),
    }
}

#[cfg(test)]
mod tests {
    use differ_core::{sequential_diff, DiffOptions};

    use super::*;

    fn diff(left: &[&str], right: &[&str]) -> Vec<DiffEntry<String>> {
        let left: Vec<String> = left.iter().map(|s| s.to_string()).collect();
        let right: Vec<String> = right.iter().map(|s| s.to_string()).collect();
        sequential_diff(
            &left,
            &right,
            &DiffOptions {
                with_positions: true,
            },
        )
    }

    fn plain(context_lines: usize) -> TerminalOptions {
        TerminalOptions {
            use_colours: false,
            context_lines,
        }
    }

    #[test]
    fn marks_additions_and_deletions() {
        let entries = diff(&["line 1", "line 2", "line 4"], &["line 1", "line 3", "line 4"]);
        let result = render_terminal(&entries, &plain(0));
        assert!(result.contains("- line 2"));
        assert!(result.contains("+ line 3"));
    }

    #[test]
    fn no_ansi_codes_without_colours() {
        let entries = diff(&[], &["added"]);
        let result = render_terminal(&entries, &plain(0));
        assert!(!result.contains('\x1b'));
        assert!(result.contains("+ added"));
    }

    #[test]
    fn colours_wrap_content_and_reset() {
        let entries = diff(&["old"], &["new"]);
        let result = render_terminal(
            &entries,
            &TerminalOptions {
                use_colours: true,
                context_lines: 0,
            },
        );
        assert!(result.contains("\x1b[31m- old\x1b[0m"));
        assert!(result.contains("\x1b[32m+ new\x1b[0m"));
    }

    #[test]
    fn context_windows_and_omitted_markers() {
        let entries = diff(
            &["a", "b", "c", "d", "e", "g", "h"],
            &["a", "b", "d", "e", "f", "g", "h"],
        );
        let result = render_terminal(&entries, &plain(1));
        assert_eq!(
            result,
            "         ... 1 line omitted ...\n 2  2   b\n 3    - c\n 4  3   d\n 5  4   e\n    5 + f\n 6  6   g\n         ... 1 line omitted ..."
        );
    }

    #[test]
    fn all_same_renders_empty() {
        let entries = diff(&["x", "y"], &["x", "y"]);
        assert_eq!(render_terminal(&entries, &plain(0)), "");
        assert_eq!(render_terminal(&entries, &plain(1)), "");
    }

    #[test]
    fn pure_insertions_and_deletions() {
        let entries = diff(&[], &["a", "b"]);
        let result = render_terminal(&entries, &plain(0));
        assert!(result.contains("+ a"));
        assert!(result.contains("+ b"));

        let entries = diff(&["a", "b"], &[]);
        let result = render_terminal(&entries, &plain(0));
        assert!(result.contains("- a"));
        assert!(result.contains("- b"));
    }

    #[test]
    fn empty_diff_renders_empty() {
        let entries: Vec<DiffEntry<String>> = Vec::new();
        assert_eq!(render_terminal(&entries, &plain(0)), "");
    }

    #[test]
    fn adjacent_clusters_merge_without_markers() {
        let entries = diff(&["A", "B", "C", "D"], &["A", "X", "C", "Y", "D"]);
        let result = render_terminal(&entries, &plain(1));
        assert_eq!(
            result,
            " 1  1   A\n 2    - B\n    2 + X\n 3  3   C\n    4 + Y\n 4  5   D"
        );
    }

    #[test]
    fn wide_line_numbers_widen_the_gutter() {
        let left: Vec<String> = (1..=120).map(|n| format!("l{n}")).collect();
        let mut right = left.clone();
        right[99] = "changed".to_string();
        let left_refs: Vec<&str> = left.iter().map(String::as_str).collect();
        let right_refs: Vec<&str> = right.iter().map(String::as_str).collect();
        let entries = diff(&left_refs, &right_refs);

        let result = render_terminal(&entries, &plain(0));
        assert!(result.contains("100     - l100"));
        assert!(result.contains("    100 + changed"));
    }
}
