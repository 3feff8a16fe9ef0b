//! Calamo turns Markdown into themed HTML plus derived metadata: reading
//! statistics and an ordered title list for building a table of contents.
//!
//! The crate separates a small stateful core from its collaborators. The
//! core — [`MarkdownConverter`] — owns the converter lifecycle: option
//! resolution, theme composition, render sequencing and title extraction.
//! Markdown parsing, highlighting, sanitisation and theme computation live
//! behind narrow contracts in the [`engine`] and [`theme`] modules and can
//! be driven directly by advanced callers.
//!
//! ```
//! use calamo::{ConvertOptions, convert_markdown_to_html};
//!
//! let result = convert_markdown_to_html("# Title\n\nSome text.", &ConvertOptions::default())?;
//! assert_eq!(result.title_list[0].url, "#0");
//! assert_eq!(result.title_list[0].title, "Title");
//! # Ok::<(), calamo::ConvertError>(())
//! ```

pub mod config;
pub mod converter;
pub mod domain;
pub mod engine;
pub mod outline;
pub mod theme;

pub use converter::{
    ConvertOptions, MarkdownConverter, RenderOptions, RendererInitOptions, convert_markdown_to_html,
};
pub use domain::error::{ConvertError, RenderError};
pub use domain::types::{ConvertResult, Legend, ReadingStats, TitleItem};
pub use engine::{
    ReadingTimeResult, RenderFlags, RenderedDocument, Renderer, RendererConfig, init_renderer,
    post_process_html, render_markdown,
};
pub use outline::{HeadingScanner, LolHtmlScanner, NoopScanner, ScannedOutline};
pub use theme::{StyleRules, Theme};
