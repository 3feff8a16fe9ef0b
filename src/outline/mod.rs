//! Title extraction: turn heading markers in rendered HTML into a navigable
//! title list.
//!
//! Structural HTML processing is an injected capability. Deployments without
//! it plug in [`NoopScanner`], which models the capability gap: an empty
//! title list and untouched output, not an error.

use std::{cell::RefCell, rc::Rc};

use lol_html::{RewriteStrSettings, element, rewrite_str, text};
use tracing::warn;

use crate::domain::types::TitleItem;

/// Result of one scan: the rewritten document and its ordered title list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedOutline {
    pub html: String,
    pub titles: Vec<TitleItem>,
}

/// Structural-HTML port used by the converter to extract titles.
///
/// `None` means the capability is unavailable; the converter then keeps the
/// document unmodified and publishes an empty title list.
pub trait HeadingScanner {
    fn scan(&self, html: &str) -> Option<ScannedOutline>;
}

/// Default scanner backed by `lol_html`.
///
/// Elements carrying the `data-heading` marker receive sequential `id`
/// attributes in document order; each becomes one title entry with
/// `url = "#" + id` and the heading depth parsed from the tag name.
#[derive(Debug, Clone, Copy, Default)]
pub struct LolHtmlScanner;

/// Scanner for environments without structural HTML processing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScanner;

impl HeadingScanner for LolHtmlScanner {
    fn scan(&self, html: &str) -> Option<ScannedOutline> {
        let titles: Rc<RefCell<Vec<TitleItem>>> = Rc::new(RefCell::new(Vec::new()));

        let rewritten = rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: vec![
                    element!("[data-heading]", {
                        let titles = Rc::clone(&titles);
                        move |el| {
                            let mut titles = titles.borrow_mut();
                            let index = titles.len();
                            el.set_attribute("id", &index.to_string())?;

                            let tag = el.tag_name();
                            let level = tag
                                .strip_prefix('h')
                                .and_then(|value| value.parse::<u8>().ok())
                                .unwrap_or(0);

                            titles.push(TitleItem {
                                url: format!("#{index}"),
                                title: String::new(),
                                level,
                            });
                            Ok(())
                        }
                    }),
                    text!("[data-heading]", {
                        let titles = Rc::clone(&titles);
                        move |chunk| {
                            if let Some(item) = titles.borrow_mut().last_mut() {
                                item.title.push_str(chunk.as_str());
                            }
                            Ok(())
                        }
                    }),
                ],
                ..RewriteStrSettings::default()
            },
        );

        match rewritten {
            Ok(html) => {
                let mut titles = Rc::try_unwrap(titles)
                    .map(|cell| cell.into_inner())
                    .unwrap_or_else(|rc| rc.borrow().clone());
                for item in &mut titles {
                    item.title = decode_entities(item.title.trim());
                }
                Some(ScannedOutline { html, titles })
            }
            Err(err) => {
                warn!(
                    target = "calamo::outline",
                    error = %err,
                    "title extraction failed; skipping outline"
                );
                None
            }
        }
    }
}

impl HeadingScanner for NoopScanner {
    fn scan(&self, _html: &str) -> Option<ScannedOutline> {
        None
    }
}

/// Undo the serializer's escaping for the visible title text.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequential_ids_in_document_order() {
        let html = "<h1 data-heading=\"\">First</h1><p>body</p><h3 data-heading=\"\">Second</h3>";
        let outline = LolHtmlScanner.scan(html).expect("scan");

        assert!(outline.html.contains("id=\"0\""));
        assert!(outline.html.contains("id=\"1\""));
        assert_eq!(
            outline.titles,
            vec![
                TitleItem {
                    url: "#0".to_string(),
                    title: "First".to_string(),
                    level: 1,
                },
                TitleItem {
                    url: "#1".to_string(),
                    title: "Second".to_string(),
                    level: 3,
                },
            ]
        );
    }

    #[test]
    fn collects_text_from_nested_inline_elements() {
        let html = "<h2 data-heading=\"\">Deep <em>dive</em> notes</h2>";
        let outline = LolHtmlScanner.scan(html).expect("scan");

        assert_eq!(outline.titles[0].title, "Deep dive notes");
    }

    #[test]
    fn title_text_is_trimmed_and_unescaped() {
        let html = "<h2 data-heading=\"\">  Fish &amp; Chips  </h2>";
        let outline = LolHtmlScanner.scan(html).expect("scan");

        assert_eq!(outline.titles[0].title, "Fish & Chips");
    }

    #[test]
    fn unmarked_headings_are_ignored() {
        let html = "<h1>plain</h1><h2 data-heading=\"\">marked</h2>";
        let outline = LolHtmlScanner.scan(html).expect("scan");

        assert_eq!(outline.titles.len(), 1);
        assert_eq!(outline.titles[0].url, "#0");
        assert!(!outline.html.contains("<h1 id"));
    }

    #[test]
    fn non_heading_markers_pass_level_zero_through() {
        let html = "<div data-heading=\"\">odd</div>";
        let outline = LolHtmlScanner.scan(html).expect("scan");

        assert_eq!(outline.titles[0].level, 0);
    }

    #[test]
    fn noop_scanner_reports_missing_capability() {
        assert!(NoopScanner.scan("<h1 data-heading=\"\">x</h1>").is_none());
    }
}
