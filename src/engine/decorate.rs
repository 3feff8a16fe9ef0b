use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use lol_html::{RewriteStrSettings, element, rewrite_str, text};

use crate::domain::error::RenderError;

use super::Renderer;

pub(crate) struct Decorated {
    pub(crate) html: String,
    pub(crate) words: u32,
}

/// Apply the handle's theme as inline styles, mark headings for outline
/// extraction and count visible words in a single rewriting pass.
pub(crate) fn apply_theme(html: &str, renderer: &Renderer) -> Result<Decorated, RenderError> {
    let styles = Rc::new(inline_styles(renderer));
    let words = Rc::new(RefCell::new(0u32));

    let rewritten = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("*", {
                    let styles = Rc::clone(&styles);
                    move |el| {
                        let tag = el.tag_name();
                        if let Some(style) = styles.get(tag.as_str()) {
                            el.set_attribute("style", style)?;
                        }
                        if is_heading_tag(&tag) {
                            el.set_attribute("data-heading", "")?;
                        }
                        Ok(())
                    }
                }),
                text!("*", {
                    let words = Rc::clone(&words);
                    move |chunk| {
                        let count = chunk.as_str().split_whitespace().count() as u32;
                        if count > 0 {
                            let mut words = words.borrow_mut();
                            *words = words.saturating_add(count);
                        }
                        Ok(())
                    }
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| RenderError::Document {
        message: err.to_string(),
    })?;

    let words = *words.borrow();
    Ok(Decorated {
        html: rewritten,
        words,
    })
}

/// Flatten the theme into per-tag inline style strings, folding the
/// paragraph layout flags into the `p` rules.
fn inline_styles(renderer: &Renderer) -> BTreeMap<String, String> {
    let flags = renderer.flags();
    let mut styles = BTreeMap::new();

    for (selector, rules) in &renderer.theme().elements {
        let mut rules = rules.clone();
        if selector == "p" {
            if flags.is_use_indent {
                rules.insert("text-indent".to_string(), "2em".to_string());
            }
            if flags.is_use_justify {
                rules.insert("text-align".to_string(), "justify".to_string());
            }
        }

        let declaration = rules
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        if !declaration.is_empty() {
            styles.insert(selector.clone(), declaration);
        }
    }

    styles
}

fn is_heading_tag(tag: &str) -> bool {
    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RendererConfig, init_renderer};
    use crate::theme::presets::default_theme;

    fn renderer(indent: bool, justify: bool) -> Renderer {
        init_renderer(RendererConfig {
            theme: default_theme().clone(),
            fonts: "sans-serif".to_string(),
            size: "16px".to_string(),
            is_use_indent: indent,
            is_use_justify: justify,
            is_mac_code_block: false,
            is_show_line_number: true,
        })
    }

    #[test]
    fn headings_receive_marker_and_style() {
        let decorated =
            apply_theme("<h2>Setup</h2><p>body</p>", &renderer(false, false)).expect("decorate");

        assert!(decorated.html.contains("data-heading"));
        assert!(decorated.html.contains("<h2 style=\""));
    }

    #[test]
    fn counts_visible_words_across_nested_elements() {
        let decorated = apply_theme(
            "<p>one <strong>two</strong> three</p>",
            &renderer(false, false),
        )
        .expect("decorate");

        assert_eq!(decorated.words, 3);
    }

    #[test]
    fn paragraph_layout_flags_fold_into_styles() {
        let decorated = apply_theme("<p>body</p>", &renderer(true, true)).expect("decorate");

        assert!(decorated.html.contains("text-indent: 2em"));
        assert!(decorated.html.contains("text-align: justify"));
    }

    #[test]
    fn unthemed_elements_are_left_alone() {
        let decorated = apply_theme("<kbd>ctrl</kbd>", &renderer(false, false)).expect("decorate");

        assert!(!decorated.html.contains("<kbd style"));
        assert_eq!(decorated.words, 1);
    }
}
