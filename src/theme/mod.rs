//! Theme composition: built-in presets, per-instance customisation and
//! custom-CSS merging.
//!
//! The composed [`Theme`] is the engine-ready description of colors, fonts
//! and sizes; the converter core treats it as opaque and only passes it
//! through to the renderer handle.

pub mod css;
pub mod presets;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::DEFAULT_FONT_SIZE_PX;

/// CSS property name → value map for one element.
pub type StyleRules = BTreeMap<String, String>;

/// Placeholder substituted with the instance's primary color during
/// composition. Preset and caller stylesheets may reference it freely.
pub const PRIMARY_COLOR_VAR: &str = "var(--md-primary-color)";

/// Fully merged theme configuration consumed by the rendering engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    /// Rules applied to the rendered document's wrapper element.
    pub base: StyleRules,
    /// Rules applied inline per element tag.
    pub elements: BTreeMap<String, StyleRules>,
}

/// Per-instance adjustments applied on top of a preset.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeTweaks {
    pub font_size: f32,
    pub color: String,
}

const HEADING_SCALES: [(u8, f32); 6] = [
    (1, 1.4),
    (2, 1.3),
    (3, 1.2),
    (4, 1.1),
    (5, 1.0),
    (6, 0.9),
];

/// Produce the engine-ready theme for one converter instance.
///
/// The customised base theme (font size and primary color applied) is always
/// built; a non-empty `css_content` is additionally parsed and merged over
/// it. The branch is presence-driven, never error-driven.
pub fn compose_theme(css_content: &str, theme: &Theme, size: &str, primary_color: &str) -> Theme {
    let tweaks = ThemeTweaks {
        font_size: parse_px_size(size),
        color: primary_color.to_string(),
    };
    let customized = customize_theme(theme, &tweaks);

    if css_content.is_empty() {
        customized
    } else {
        custom_css_with_template(css::parse_css(css_content), primary_color, customized)
    }
}

/// Apply font-size scaling and the primary color to a theme.
pub fn customize_theme(theme: &Theme, tweaks: &ThemeTweaks) -> Theme {
    let mut customized = theme.clone();

    customized
        .base
        .insert("font-size".to_string(), px(tweaks.font_size));
    for (level, scale) in HEADING_SCALES {
        customized
            .elements
            .entry(format!("h{level}"))
            .or_default()
            .insert("font-size".to_string(), px(tweaks.font_size * scale));
    }

    substitute_primary_color(&mut customized, &tweaks.color);
    customized
}

/// Merge parsed caller CSS over a customised theme.
///
/// `:root` and `body` selectors target the wrapper rules; everything else is
/// merged per element tag. Values may reference [`PRIMARY_COLOR_VAR`].
pub fn custom_css_with_template(
    css: BTreeMap<String, StyleRules>,
    primary_color: &str,
    mut theme: Theme,
) -> Theme {
    for (selector, rules) in css {
        let target = if selector == ":root" || selector == "body" {
            &mut theme.base
        } else {
            theme.elements.entry(selector).or_default()
        };

        for (property, value) in rules {
            target.insert(property, value.replace(PRIMARY_COLOR_VAR, primary_color));
        }
    }

    theme
}

/// Coerce a pixel-suffixed size string into a number.
///
/// Best-effort policy: the `px` suffix is optional, and a malformed residue
/// falls back to the process default with a warning instead of failing the
/// call.
pub fn parse_px_size(size: &str) -> f32 {
    let trimmed = size.trim();
    let digits = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();

    match digits.parse::<f32>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            warn!(
                target = "calamo::theme",
                size = %size,
                fallback = DEFAULT_FONT_SIZE_PX,
                "unparseable font size; using default"
            );
            DEFAULT_FONT_SIZE_PX
        }
    }
}

fn substitute_primary_color(theme: &mut Theme, color: &str) {
    for rules in theme
        .elements
        .values_mut()
        .chain(std::iter::once(&mut theme.base))
    {
        for value in rules.values_mut() {
            if value.contains(PRIMARY_COLOR_VAR) {
                *value = value.replace(PRIMARY_COLOR_VAR, color);
            }
        }
    }
}

fn px(value: f32) -> String {
    if (value - value.round()).abs() < 1e-3 {
        format!("{}px", value.round() as i32)
    } else {
        format!("{value:.1}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::presets::default_theme;

    #[test]
    fn parse_px_size_strips_suffix() {
        assert_eq!(parse_px_size("16px"), 16.0);
        assert_eq!(parse_px_size(" 18px "), 18.0);
    }

    #[test]
    fn parse_px_size_accepts_bare_numbers() {
        assert_eq!(parse_px_size("16"), 16.0);
    }

    #[test]
    fn parse_px_size_coerces_malformed_input_to_default() {
        assert_eq!(parse_px_size("huge"), DEFAULT_FONT_SIZE_PX);
        assert_eq!(parse_px_size(""), DEFAULT_FONT_SIZE_PX);
        assert_eq!(parse_px_size("-4px"), DEFAULT_FONT_SIZE_PX);
    }

    #[test]
    fn customize_theme_scales_headings_and_applies_color() {
        let tweaks = ThemeTweaks {
            font_size: 20.0,
            color: "#ff0000".to_string(),
        };
        let customized = customize_theme(default_theme(), &tweaks);

        assert_eq!(customized.base["font-size"], "20px");
        assert_eq!(customized.elements["h1"]["font-size"], "28px");
        assert_eq!(customized.elements["h1"]["color"], "#ff0000");
        assert!(!customized.elements["h2"]["border-bottom"].contains(PRIMARY_COLOR_VAR));
    }

    #[test]
    fn compose_theme_merges_custom_css() {
        let css = "h2 { color: var(--md-primary-color); letter-spacing: 1px }";
        let composed = compose_theme(css, default_theme(), "16px", "#00aa00");

        assert_eq!(composed.elements["h2"]["color"], "#00aa00");
        assert_eq!(composed.elements["h2"]["letter-spacing"], "1px");
        // Customised base survives the merge.
        assert_eq!(composed.elements["h2"]["font-size"], "20.8px");
    }

    #[test]
    fn compose_theme_without_css_skips_parsing() {
        let composed = compose_theme("", default_theme(), "16px", "#00aa00");
        assert_eq!(composed.base["font-size"], "16px");
    }

    #[test]
    fn root_selector_targets_wrapper_rules() {
        let css = ":root { background: #fff }";
        let composed = compose_theme(css, default_theme(), "16px", "#00aa00");
        assert_eq!(composed.base["background"], "#fff");
    }
}
