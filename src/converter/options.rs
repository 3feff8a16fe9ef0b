use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_FONT_SIZE, DEFAULT_FONT_STACK, DEFAULT_PRIMARY_COLOR};
use crate::domain::types::Legend;
use crate::engine::RenderFlags;
use crate::theme::{Theme, presets};

/// Options accepted by [`crate::MarkdownConverter::init`] and
/// [`crate::MarkdownConverter::update_theme`].
///
/// Every field is optional; defaults are applied explicitly when the
/// operation runs, never through implicit field inheritance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererInitOptions {
    /// Custom CSS merged over the selected theme when non-empty.
    pub css_content: Option<String>,
    pub theme: Option<Theme>,
    pub fonts: Option<String>,
    /// Pixel-suffixed font size, e.g. `"16px"`.
    pub size: Option<String>,
    pub primary_color: Option<String>,
    pub is_use_indent: Option<bool>,
    pub is_use_justify: Option<bool>,
    pub is_mac_code_block: Option<bool>,
    pub is_show_line_number: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedInitOptions {
    pub(crate) css_content: String,
    pub(crate) theme: Theme,
    pub(crate) fonts: String,
    pub(crate) size: String,
    pub(crate) primary_color: String,
    pub(crate) is_use_indent: bool,
    pub(crate) is_use_justify: bool,
    pub(crate) is_mac_code_block: bool,
    pub(crate) is_show_line_number: bool,
}

impl RendererInitOptions {
    pub(crate) fn resolve(&self) -> ResolvedInitOptions {
        ResolvedInitOptions {
            css_content: self.css_content.clone().unwrap_or_default(),
            theme: self
                .theme
                .clone()
                .unwrap_or_else(|| presets::default_theme().clone()),
            fonts: self
                .fonts
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_STACK.to_string()),
            size: self
                .size
                .clone()
                .unwrap_or_else(|| DEFAULT_FONT_SIZE.to_string()),
            primary_color: self
                .primary_color
                .clone()
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            is_use_indent: self.is_use_indent.unwrap_or(false),
            is_use_justify: self.is_use_justify.unwrap_or(false),
            is_mac_code_block: self.is_mac_code_block.unwrap_or(false),
            is_show_line_number: self.is_show_line_number.unwrap_or(true),
        }
    }
}

/// Per-call options accepted by [`crate::MarkdownConverter::render`].
///
/// Resolved against the defaults below on every call; nothing persists from
/// one render to the next except through the handle's own configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub is_cite_status: Option<bool>,
    pub legend: Option<Legend>,
    pub is_use_indent: Option<bool>,
    pub is_use_justify: Option<bool>,
    pub is_count_status: Option<bool>,
    pub is_mac_code_block: Option<bool>,
    pub is_show_line_number: Option<bool>,
}

impl RenderOptions {
    pub(crate) fn resolve(&self) -> RenderFlags {
        RenderFlags {
            cite_status: self.is_cite_status.unwrap_or(false),
            legend: self.legend.unwrap_or_default(),
            is_use_indent: self.is_use_indent.unwrap_or(false),
            is_use_justify: self.is_use_justify.unwrap_or(false),
            count_status: self.is_count_status.unwrap_or(true),
            is_mac_code_block: self.is_mac_code_block.unwrap_or(false),
            is_show_line_number: self.is_show_line_number.unwrap_or(true),
        }
    }
}

/// Flattened union of initialisation and render options for the one-shot
/// [`crate::convert_markdown_to_html`] helper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    pub css_content: Option<String>,
    pub theme: Option<Theme>,
    pub fonts: Option<String>,
    pub size: Option<String>,
    pub primary_color: Option<String>,
    pub is_use_indent: Option<bool>,
    pub is_use_justify: Option<bool>,
    pub is_mac_code_block: Option<bool>,
    pub is_show_line_number: Option<bool>,
    pub is_cite_status: Option<bool>,
    pub legend: Option<Legend>,
    pub is_count_status: Option<bool>,
}

impl ConvertOptions {
    /// Split the union by field name into the init and render subsets.
    /// Fields shared by both records (layout flags) land in each.
    pub fn split(&self) -> (RendererInitOptions, RenderOptions) {
        let init = RendererInitOptions {
            css_content: self.css_content.clone(),
            theme: self.theme.clone(),
            fonts: self.fonts.clone(),
            size: self.size.clone(),
            primary_color: self.primary_color.clone(),
            is_use_indent: self.is_use_indent,
            is_use_justify: self.is_use_justify,
            is_mac_code_block: self.is_mac_code_block,
            is_show_line_number: self.is_show_line_number,
        };
        let render = RenderOptions {
            is_cite_status: self.is_cite_status,
            legend: self.legend,
            is_use_indent: self.is_use_indent,
            is_use_justify: self.is_use_justify,
            is_count_status: self.is_count_status,
            is_mac_code_block: self.is_mac_code_block,
            is_show_line_number: self.is_show_line_number,
        };

        (init, render)
    }
}
