//! HTML renderer: one element per diff line, configurable class names.

use differ_core::{DiffEntry, EntryKind};

use crate::window::{line_noun, padding_width, segments, zero_context_items, Segment, ZeroContextItem};

/// CSS class name for each semantic slot of the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssClasses {
    pub container: String,
    pub line: String,
    pub add: String,
    pub delete: String,
    pub same: String,
    pub omitted: String,
    pub line_number: String,
    pub prefix: String,
    pub content: String,
}

impl Default for CssClasses {
    fn default() -> Self {
        Self {
            container: "diff-container".to_string(),
            line: "diff-line".to_string(),
            add: "diff-add".to_string(),
            delete: "diff-delete".to_string(),
            same: "diff-same".to_string(),
            omitted: "diff-omitted".to_string(),
            line_number: "line-number".to_string(),
            prefix: "diff-prefix".to_string(),
            content: "diff-content".to_string(),
        }
    }
}

/// Options for [`render_html`].
#[derive(Clone, Debug)]
pub struct HtmlOptions {
    /// Class names per semantic slot.
    pub classes: CssClasses,
    /// Number of unchanged lines to keep around each change. Zero renders
    /// changed lines only. Defaults to `0`.
    pub context_lines: usize,
    /// Emit line-number spans. Defaults to `true`.
    pub show_line_numbers: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            classes: CssClasses::default(),
            context_lines: 0,
            show_line_numbers: true,
        }
    }
}

/// Render diff entries as HTML.
///
/// All user content (including the padded line numbers) is escaped; `& < > "
/// '` never reach the output raw.
pub fn render_html<T: AsRef<str>>(entries: &[DiffEntry<T>], options: &HtmlOptions) -> String {
    let width = padding_width(entries);
    let gutter = " ".repeat(width);
    let mut lines = Vec::new();

    if options.context_lines == 0 {
        for item in zero_context_items(entries) {
            match item {
                ZeroContextItem::Change(index) => {
                    lines.push(format_line(&entries[index], options, width));
                }
                ZeroContextItem::Separator => lines.push(format!("{gutter} {gutter}    ")),
            }
        }
    } else {
        for segment in segments(entries, options.context_lines) {
            match segment {
                Segment::Omitted { count } => lines.push(format_omitted(count, options)),
                Segment::Window { start, end } => {
                    for entry in &entries[start..=end] {
                        lines.push(format_line(entry, options, width));
                    }
                }
            }
        }
    }

    lines.join("\n")
}

fn format_line<T: AsRef<str>>(entry: &DiffEntry<T>, options: &HtmlOptions, width: usize) -> String {
    let classes = &options.classes;
    let type_class = match entry.kind() {
        EntryKind::Add => &classes.add,
        EntryKind::Delete => &classes.delete,
        EntryKind::Same => &classes.same,
    };
    let line_classes = join_classes(&[classes.line.as_str(), type_class.as_str()]);

    let prefix = match entry.kind() {
        EntryKind::Add => '+',
        EntryKind::Delete => '-',
        EntryKind::Same => ' ',
    };

    let mut html = format!("<div class=\"{line_classes}\">\n");
    if options.show_line_numbers {
        let left = gutter_cell(entry.left_line(), width);
        let right = gutter_cell(entry.right_line(), width);
        html.push_str(&format!(
            "  <span class=\"{} left\">{}</span>\n",
            classes.line_number,
            escape_html(&left)
        ));
        html.push_str(&format!(
            "  <span class=\"{} right\">{}</span>\n",
            classes.line_number,
            escape_html(&right)
        ));
    }
    html.push_str(&format!("  <span class=\"{}\">{prefix}</span>\n", classes.prefix));
    html.push_str(&format!(
        "  <span class=\"{}\">{}</span>\n",
        classes.content,
        escape_html(entry.content().as_ref())
    ));
    html.push_str("</div>");
    html
}

fn format_omitted(count: usize, options: &HtmlOptions) -> String {
    let omitted = &options.classes.omitted;
    let marker = format!("... {count} {} omitted ...", line_noun(count));
    format!(
        "<div class=\"{omitted}\">\n  <span class=\"{omitted}-content\">{}</span>\n</div>",
        escape_html(&marker)
    )
}

/// An absent line number renders as the empty string, not as padding.
fn gutter_cell(line: Option<usize>, width: usize) -> String {
    match line {
        Some(number) => format!("{number:>width$}"),
        None => String::new(),
    }
}

fn join_classes(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|class| !class.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
