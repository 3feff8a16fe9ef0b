//! Converter lifecycle and orchestration.
//!
//! A [`MarkdownConverter`] owns one renderer handle for its whole lifetime:
//! `init` creates it, `render` drives the conversion pipeline against it and
//! `update_theme` reconfigures it in place. Derived state (`output`, reading
//! statistics, title list) lives on the instance and is exposed through
//! owned snapshots.
//!
//! Instances carry no internal synchronisation; callers targeting concurrent
//! environments serialise access externally, typically one converter per
//! document.

mod options;

use tracing::warn;

use crate::domain::error::ConvertError;
use crate::domain::types::{ConvertResult, ReadingStats, TitleItem};
use crate::engine::{self, Renderer, RendererConfig};
use crate::outline::{HeadingScanner, LolHtmlScanner};
use crate::theme;

pub use options::{ConvertOptions, RenderOptions, RendererInitOptions};

/// Stateful Markdown to themed HTML converter.
pub struct MarkdownConverter {
    renderer: Option<Renderer>,
    scanner: Box<dyn HeadingScanner>,
    output: String,
    reading_time: ReadingStats,
    title_list: Vec<TitleItem>,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownConverter {
    /// Create a converter with the default title-extraction strategy.
    pub fn new() -> Self {
        Self::with_scanner(Box::new(LolHtmlScanner))
    }

    /// Create a converter with an injected title-extraction strategy, e.g.
    /// [`crate::outline::NoopScanner`] for environments without structural
    /// HTML processing.
    pub fn with_scanner(scanner: Box<dyn HeadingScanner>) -> Self {
        Self {
            renderer: None,
            scanner,
            output: String::new(),
            reading_time: ReadingStats::default(),
            title_list: Vec::new(),
        }
    }

    /// Initialise the renderer handle from the given options.
    ///
    /// Composes the theme, creates the handle and returns the instance for
    /// chaining. A repeated call recreates the handle with the new options.
    pub fn init(&mut self, options: &RendererInitOptions) -> &mut Self {
        let resolved = options.resolve();
        let theme = theme::compose_theme(
            &resolved.css_content,
            &resolved.theme,
            &resolved.size,
            &resolved.primary_color,
        );

        self.renderer = Some(engine::init_renderer(RendererConfig {
            theme,
            fonts: resolved.fonts,
            size: resolved.size,
            is_use_indent: resolved.is_use_indent,
            is_use_justify: resolved.is_use_justify,
            is_mac_code_block: resolved.is_mac_code_block,
            is_show_line_number: resolved.is_show_line_number,
        }));

        self
    }

    /// Render Markdown into themed HTML and update the derived state.
    ///
    /// Fails with [`ConvertError::Uninitialized`] before a successful
    /// [`init`](Self::init). State is only mutated after the engine's render
    /// and post-process operations both succeed; the source `content` is
    /// never modified.
    pub fn render(
        &mut self,
        content: &str,
        options: &RenderOptions,
    ) -> Result<String, ConvertError> {
        let renderer = self.renderer.as_mut().ok_or(ConvertError::Uninitialized)?;

        renderer.reset(options.resolve());
        let rendered = engine::render_markdown(content, renderer)?;
        let output = engine::post_process_html(&rendered.html, &rendered.reading_time, renderer)?;

        self.reading_time = ReadingStats {
            chars: content.chars().count(),
            words: rendered.reading_time.words,
            minutes: rendered.reading_time.minutes.ceil() as u32,
        };
        self.output = output;
        self.extract_titles();

        Ok(self.output.clone())
    }

    /// Recompose the theme and push it into the existing handle.
    ///
    /// Before `init` this is a non-fatal no-op that only emits a diagnostic;
    /// it never panics and never errors. It does not trigger a re-render and
    /// leaves layout flags untouched.
    pub fn update_theme(&mut self, options: &RendererInitOptions) {
        let Some(renderer) = self.renderer.as_mut() else {
            warn!(
                target = "calamo::converter",
                "update_theme called before init; ignoring"
            );
            return;
        };

        let resolved = options.resolve();
        let theme = theme::compose_theme(
            &resolved.css_content,
            &resolved.theme,
            &resolved.size,
            &resolved.primary_color,
        );
        renderer.set_options(theme, resolved.fonts, resolved.size);
    }

    /// Clear derived state. The renderer handle survives, so the converter
    /// can render again without another `init`.
    pub fn reset(&mut self) {
        self.output.clear();
        self.reading_time = ReadingStats::default();
        self.title_list.clear();
    }

    /// Owned snapshot of the current derived state.
    pub fn get_result(&self) -> ConvertResult {
        ConvertResult {
            html: self.output.clone(),
            reading_time: self.reading_time,
            title_list: self.title_list.clone(),
        }
    }

    /// Escape hatch: direct access to the renderer handle, when present.
    pub fn get_renderer(&self) -> Option<&Renderer> {
        self.renderer.as_ref()
    }

    fn extract_titles(&mut self) {
        match self.scanner.scan(&self.output) {
            Some(outline) => {
                self.output = outline.html;
                self.title_list = outline.titles;
            }
            None => {
                self.title_list = Vec::new();
            }
        }
    }
}

/// One-shot convenience: `init`, `render` and `get_result` in a single call.
///
/// The combined options record is split by field name into the init and
/// render subsets.
pub fn convert_markdown_to_html(
    content: &str,
    options: &ConvertOptions,
) -> Result<ConvertResult, ConvertError> {
    let (init_options, render_options) = options.split();

    let mut converter = MarkdownConverter::new();
    converter
        .init(&init_options)
        .render(content, &render_options)?;

    Ok(converter.get_result())
}
