//! Composite text diff: split into lines, diff, render in one call.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use differ_core::{sequential_diff, DiffOptions};

use crate::error::{RenderError, RenderResult};
use crate::html::{render_html, HtmlOptions};
use crate::json::{render_json, JsonOptions};
use crate::terminal::{render_terminal, TerminalOptions};

/// The output formats [`diff_text`] can dispatch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiffFormat {
    Terminal,
    Html,
    Json,
}

impl FromStr for DiffFormat {
    type Err = RenderError;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        match identifier {
            "terminal" => Ok(DiffFormat::Terminal),
            "html" => Ok(DiffFormat::Html),
            "json" => Ok(DiffFormat::Json),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DiffFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identifier = match self {
            DiffFormat::Terminal => "terminal",
            DiffFormat::Html => "html",
            DiffFormat::Json => "json",
        };
        f.write_str(identifier)
    }
}

/// Per-format renderer options for [`diff_text`].
#[derive(Clone, Debug)]
pub enum FormatOptions {
    Terminal(TerminalOptions),
    Html(HtmlOptions),
    Json(JsonOptions),
}

/// Diff two texts line by line and render the result.
///
/// Both inputs are split on `'\n'` and diffed with positions enabled.
/// `format` must be one of `terminal`, `html`, or `json`; anything else
/// fails with [`RenderError::UnsupportedFormat`]. When `options` is absent
/// or does not match the requested format, the renderer's defaults apply.
pub fn diff_text(
    old_text: &str,
    new_text: &str,
    format: &str,
    options: Option<FormatOptions>,
) -> RenderResult<String> {
    let format: DiffFormat = format.parse()?;

    let old_lines: Vec<&str> = old_text.split('\n').collect();
    let new_lines: Vec<&str> = new_text.split('\n').collect();
    let entries = sequential_diff(
        &old_lines,
        &new_lines,
        &DiffOptions {
            with_positions: true,
        },
    );
    debug!(%format, entries = entries.len(), "rendering text diff");

    let rendered = match format {
        DiffFormat::Terminal => {
            let opts = match options {
                Some(FormatOptions::Terminal(opts)) => opts,
                _ => TerminalOptions::default(),
            };
            render_terminal(&entries, &opts)
        }
        DiffFormat::Html => {
            let opts = match options {
                Some(FormatOptions::Html(opts)) => opts,
                _ => HtmlOptions::default(),
            };
            render_html(&entries, &opts)
        }
        DiffFormat::Json => {
            let opts = match options {
                Some(FormatOptions::Json(opts)) => opts,
                _ => JsonOptions::default(),
            };
            render_json(&entries, &opts)
        }
    };
    Ok(rendered)
}
