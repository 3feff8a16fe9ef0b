//! Default rendering engine.
//!
//! The engine is kept behind a narrow contract so the converter core never
//! depends on its internals: a handle created once per converter
//! ([`init_renderer`]), a pure render operation ([`render_markdown`]) and a
//! post-processing operation ([`post_process_html`]). The pipeline is
//! deterministic: given the same input and handle configuration it returns
//! identical output or errors.

mod decorate;
mod highlight;
mod markdown;
mod postprocess;
mod sanitize;

use serde::{Deserialize, Serialize};

use crate::domain::types::Legend;
use crate::theme::Theme;

pub use markdown::{ReadingTimeResult, RenderedDocument, render_markdown};
pub use postprocess::post_process_html;

/// Resolved render-option record held by the handle.
///
/// [`Renderer::reset`] replaces this record wholesale before each render;
/// options never leak from one render call into the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderFlags {
    pub cite_status: bool,
    pub legend: Legend,
    pub is_use_indent: bool,
    pub is_use_justify: bool,
    pub count_status: bool,
    pub is_mac_code_block: bool,
    pub is_show_line_number: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            cite_status: false,
            legend: Legend::Alt,
            is_use_indent: false,
            is_use_justify: false,
            count_status: true,
            is_mac_code_block: false,
            is_show_line_number: true,
        }
    }
}

/// Configuration for creating a renderer handle.
#[derive(Debug, Clone, PartialEq)]
pub struct RendererConfig {
    pub theme: Theme,
    pub fonts: String,
    pub size: String,
    pub is_use_indent: bool,
    pub is_use_justify: bool,
    pub is_mac_code_block: bool,
    pub is_show_line_number: bool,
}

/// Opaque render session handle.
///
/// Exactly one handle exists per converter instance; configuration changes
/// mutate it in place and never recreate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderer {
    theme: Theme,
    fonts: String,
    size: String,
    flags: RenderFlags,
}

/// Create a renderer handle from initialisation options.
pub fn init_renderer(config: RendererConfig) -> Renderer {
    let flags = RenderFlags {
        is_use_indent: config.is_use_indent,
        is_use_justify: config.is_use_justify,
        is_mac_code_block: config.is_mac_code_block,
        is_show_line_number: config.is_show_line_number,
        ..RenderFlags::default()
    };

    Renderer {
        theme: config.theme,
        fonts: config.fonts,
        size: config.size,
        flags,
    }
}

impl Renderer {
    /// Replace the render-option record. Full replace, not a merge: every
    /// render call configures the handle from scratch.
    pub fn reset(&mut self, flags: RenderFlags) {
        self.flags = flags;
    }

    /// Theme-only partial update: swaps theme, fonts and size while leaving
    /// the render-option record untouched. Does not trigger a re-render.
    pub fn set_options(&mut self, theme: Theme, fonts: impl Into<String>, size: impl Into<String>) {
        self.theme = theme;
        self.fonts = fonts.into();
        self.size = size.into();
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn fonts(&self) -> &str {
        &self.fonts
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn flags(&self) -> &RenderFlags {
        &self.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets::default_theme;

    fn handle() -> Renderer {
        init_renderer(RendererConfig {
            theme: default_theme().clone(),
            fonts: "sans-serif".to_string(),
            size: "16px".to_string(),
            is_use_indent: true,
            is_use_justify: false,
            is_mac_code_block: false,
            is_show_line_number: true,
        })
    }

    #[test]
    fn init_carries_layout_flags_with_render_defaults() {
        let renderer = handle();

        assert!(renderer.flags().is_use_indent);
        assert!(renderer.flags().count_status);
        assert!(!renderer.flags().cite_status);
    }

    #[test]
    fn reset_replaces_the_whole_record() {
        let mut renderer = handle();
        renderer.reset(RenderFlags::default());

        // The indent flag from init does not survive a reset.
        assert!(!renderer.flags().is_use_indent);
    }

    #[test]
    fn set_options_leaves_render_flags_untouched() {
        let mut renderer = handle();
        renderer.set_options(default_theme().clone(), "serif", "18px");

        assert_eq!(renderer.size(), "18px");
        assert_eq!(renderer.fonts(), "serif");
        assert!(renderer.flags().is_use_indent);
    }
}
