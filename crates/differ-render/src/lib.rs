//! Rendering layers for diff entry streams.
//!
//! Consumes the edit scripts produced by `differ-core` and formats them for
//! people and machines: ANSI-coloured terminal output, HTML fragments with
//! configurable class names, and a pretty-printed JSON report. All three
//! share the context-line windowing that merges nearby change clusters and
//! collapses distant unchanged runs into omitted markers.
//!
//! # Key Types
//!
//! - [`TerminalOptions`] / [`HtmlOptions`] / [`JsonOptions`] -- per-renderer
//!   configuration
//! - [`DiffFormat`] / [`diff_text`] -- one-call split, diff, and render
//! - [`AnsiColour`] -- terminal colour code table
//! - [`RenderError`] -- the only failure in the crate: an unknown format

pub mod ansi;
pub mod error;
pub mod html;
pub mod json;
pub mod terminal;
pub mod text;
mod window;

pub use ansi::AnsiColour;
pub use error::{RenderError, RenderResult};
pub use html::{render_html, CssClasses, HtmlOptions};
pub use json::{render_json, JsonOptions};
pub use terminal::{render_terminal, TerminalOptions};
pub use text::{diff_text, DiffFormat, FormatOptions};
