//! Built-in theme presets.
//!
//! The registry is an immutable shared static; callers customise a preset per
//! converter instance via [`super::customize_theme`] rather than mutating it.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use super::{PRIMARY_COLOR_VAR, StyleRules, Theme};

/// Name of the preset used when the caller does not pick one.
pub const DEFAULT_THEME_NAME: &str = "default";

static THEMES: Lazy<BTreeMap<&'static str, Theme>> = Lazy::new(|| {
    let mut themes = BTreeMap::new();
    themes.insert(DEFAULT_THEME_NAME, default_preset());
    themes.insert("serif", serif_preset());
    themes
});

/// Look up a built-in theme by name.
pub fn preset(name: &str) -> Option<&'static Theme> {
    THEMES.get(name)
}

/// The built-in theme applied when initialisation options omit one.
pub fn default_theme() -> &'static Theme {
    &THEMES[DEFAULT_THEME_NAME]
}

/// Names of all built-in themes, in stable order.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    THEMES.keys().copied()
}

fn default_preset() -> Theme {
    let accent = PRIMARY_COLOR_VAR;
    let mut elements = BTreeMap::new();

    elements.insert(
        "h1".to_string(),
        rules(&[
            ("margin", "32px 0 16px"),
            ("font-weight", "700"),
            ("text-align", "center"),
            ("color", accent),
        ]),
    );
    elements.insert(
        "h2".to_string(),
        rules(&[
            ("margin", "24px 0 16px"),
            ("font-weight", "700"),
            ("border-bottom", "2px solid var(--md-primary-color)"),
            ("padding-bottom", "4px"),
        ]),
    );
    elements.insert(
        "h3".to_string(),
        rules(&[("margin", "20px 0 8px"), ("font-weight", "600")]),
    );
    elements.insert(
        "h4".to_string(),
        rules(&[("margin", "16px 0 8px"), ("font-weight", "600")]),
    );
    elements.insert(
        "h5".to_string(),
        rules(&[("margin", "16px 0 8px"), ("font-weight", "600")]),
    );
    elements.insert(
        "h6".to_string(),
        rules(&[("margin", "16px 0 8px"), ("font-weight", "600")]),
    );
    elements.insert(
        "p".to_string(),
        rules(&[("margin", "16px 0"), ("line-height", "1.75")]),
    );
    elements.insert(
        "blockquote".to_string(),
        rules(&[
            ("margin", "16px 0"),
            ("padding", "8px 16px"),
            ("border-left", "4px solid var(--md-primary-color)"),
            ("background", "#f6f8fa"),
            ("color", "#57606a"),
        ]),
    );
    elements.insert(
        "code".to_string(),
        rules(&[
            ("padding", "2px 4px"),
            ("border-radius", "4px"),
            ("background", "#f6f8fa"),
            ("font-family", "Menlo, Consolas, monospace"),
        ]),
    );
    elements.insert(
        "pre".to_string(),
        rules(&[
            ("margin", "16px 0"),
            ("padding", "16px"),
            ("border-radius", "8px"),
            ("background", "#f6f8fa"),
            ("overflow-x", "auto"),
        ]),
    );
    elements.insert(
        "a".to_string(),
        rules(&[("color", accent), ("text-decoration", "none")]),
    );
    elements.insert(
        "strong".to_string(),
        rules(&[("color", accent), ("font-weight", "700")]),
    );
    elements.insert(
        "ul".to_string(),
        rules(&[("margin", "16px 0"), ("padding-left", "24px")]),
    );
    elements.insert(
        "ol".to_string(),
        rules(&[("margin", "16px 0"), ("padding-left", "24px")]),
    );
    elements.insert("li".to_string(), rules(&[("margin", "4px 0")]));
    elements.insert(
        "hr".to_string(),
        rules(&[
            ("margin", "24px 0"),
            ("border", "none"),
            ("border-top", "1px solid #d0d7de"),
        ]),
    );
    elements.insert(
        "img".to_string(),
        rules(&[("max-width", "100%"), ("border-radius", "4px")]),
    );
    elements.insert(
        "table".to_string(),
        rules(&[
            ("margin", "16px 0"),
            ("width", "100%"),
            ("border-collapse", "collapse"),
        ]),
    );
    elements.insert(
        "th".to_string(),
        rules(&[
            ("padding", "8px 12px"),
            ("border", "1px solid #d0d7de"),
            ("background", "#f6f8fa"),
            ("font-weight", "600"),
        ]),
    );
    elements.insert(
        "td".to_string(),
        rules(&[("padding", "8px 12px"), ("border", "1px solid #d0d7de")]),
    );
    elements.insert(
        "figcaption".to_string(),
        rules(&[
            ("margin-top", "8px"),
            ("text-align", "center"),
            ("color", "#57606a"),
            ("font-size", "14px"),
        ]),
    );

    Theme {
        name: DEFAULT_THEME_NAME.to_string(),
        base: rules(&[
            ("line-height", "1.75"),
            ("color", "#353535"),
            ("word-break", "break-word"),
        ]),
        elements,
    }
}

fn serif_preset() -> Theme {
    let mut theme = default_preset();
    theme.name = "serif".to_string();
    theme
        .base
        .insert("font-family".to_string(), "Georgia, serif".to_string());

    for heading in ["h1", "h2", "h3", "h4", "h5", "h6"] {
        let rules = theme.elements.entry(heading.to_string()).or_default();
        rules.insert("font-family".to_string(), "Georgia, serif".to_string());
        rules.insert("font-weight".to_string(), "600".to_string());
    }
    theme
        .elements
        .entry("blockquote".to_string())
        .or_default()
        .insert("font-style".to_string(), "italic".to_string());

    theme
}

fn rules(pairs: &[(&str, &str)]) -> StyleRules {
    pairs
        .iter()
        .map(|(property, value)| (property.to_string(), value.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_registered() {
        assert_eq!(default_theme().name, DEFAULT_THEME_NAME);
        assert!(preset(DEFAULT_THEME_NAME).is_some());
    }

    #[test]
    fn unknown_preset_is_none() {
        assert!(preset("brutalist").is_none());
    }

    #[test]
    fn presets_carry_heading_rules() {
        for name in preset_names() {
            let theme = preset(name).expect("registered preset");
            assert!(theme.elements.contains_key("h1"), "{name} misses h1");
            assert!(theme.elements.contains_key("p"), "{name} misses p");
        }
    }
}
