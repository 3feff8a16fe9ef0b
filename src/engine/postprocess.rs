use std::{cell::RefCell, rc::Rc};

use lol_html::{RewriteStrSettings, element, rewrite_str};
use lol_html::html_content::ContentType;

use crate::domain::error::RenderError;
use crate::domain::types::Legend;

use super::{ReadingTimeResult, Renderer};

const READING_META_STYLE: &str = "margin: 8px 0; color: #8a919f; font-size: 14px";

const MAC_SIGN: &str = "<span class=\"mac-sign\"><span class=\"mac-dot mac-dot-red\"></span>\
<span class=\"mac-dot mac-dot-yellow\"></span><span class=\"mac-dot mac-dot-green\"></span></span>";

/// Finalize rendered HTML: image legends, citation decoration, the reading
/// banner, macOS code-block chrome and the styled wrapper element.
pub fn post_process_html(
    html: &str,
    reading_time: &ReadingTimeResult,
    renderer: &Renderer,
) -> Result<String, RenderError> {
    let flags = renderer.flags().clone();
    let citations: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let figcaption_style = inline_rule(renderer, "figcaption");

    let mut handlers = Vec::new();

    if flags.legend != Legend::None {
        let legend = flags.legend;
        let style_attr = figcaption_style
            .map(|style| format!(" style=\"{}\"", escape_attr(&style)))
            .unwrap_or_default();
        handlers.push(element!("img", move |el| {
            let caption = match legend {
                Legend::Alt => el.get_attribute("alt"),
                Legend::Title => el.get_attribute("title"),
                Legend::None => None,
            };
            if let Some(caption) = caption {
                let caption = caption.trim().to_string();
                if !caption.is_empty() {
                    el.after(
                        &format!(
                            "<figcaption class=\"image-caption\"{style_attr}>{}</figcaption>",
                            ammonia::clean_text(&caption)
                        ),
                        ContentType::Html,
                    );
                }
            }
            Ok(())
        }));
    }

    if flags.cite_status {
        let citations = Rc::clone(&citations);
        handlers.push(element!("a[href]", move |el| {
            let Some(href) = el.get_attribute("href") else {
                return Ok(());
            };
            if !href.starts_with("http://") && !href.starts_with("https://") {
                return Ok(());
            }

            let mut citations = citations.borrow_mut();
            citations.push(href);
            el.after(
                &format!(
                    "<sup class=\"footnote-ref\">[{}]</sup>",
                    citations.len()
                ),
                ContentType::Html,
            );
            Ok(())
        }));
    }

    if flags.is_mac_code_block {
        handlers.push(element!("pre", |el| {
            let classes = match el.get_attribute("class") {
                Some(existing) => format!("{existing} mac-code"),
                None => "mac-code".to_string(),
            };
            el.set_attribute("class", &classes)?;
            el.prepend(MAC_SIGN, ContentType::Html);
            Ok(())
        }));
    }

    let rewritten = if handlers.is_empty() {
        html.to_string()
    } else {
        rewrite_str(
            html,
            RewriteStrSettings {
                element_content_handlers: handlers,
                ..RewriteStrSettings::default()
            },
        )
        .map_err(|err| RenderError::Document {
            message: err.to_string(),
        })?
    };

    let mut body = String::with_capacity(rewritten.len() + 256);
    if flags.count_status {
        body.push_str(&reading_banner(reading_time));
    }
    body.push_str(&rewritten);

    let citations = citations.borrow();
    if flags.cite_status && !citations.is_empty() {
        body.push_str("<h4 class=\"footnotes-title\">References</h4><ol class=\"footnotes\">");
        for href in citations.iter() {
            body.push_str(&format!("<li>{}</li>", ammonia::clean_text(href)));
        }
        body.push_str("</ol>");
    }

    Ok(format!(
        "<section class=\"markdown-body\" style=\"{}\">{body}</section>",
        escape_attr(&wrapper_style(renderer))
    ))
}

fn reading_banner(reading_time: &ReadingTimeResult) -> String {
    let minutes = if reading_time.words == 0 {
        0
    } else {
        (reading_time.minutes.ceil() as u32).max(1)
    };
    format!(
        "<section class=\"reading-meta\" style=\"{READING_META_STYLE}\">{} words, {} min read</section>",
        reading_time.words, minutes
    )
}

/// Wrapper style: the theme's base rules plus the handle's font stack.
fn wrapper_style(renderer: &Renderer) -> String {
    let mut rules = renderer.theme().base.clone();
    rules.insert("font-family".to_string(), renderer.fonts().to_string());

    rules
        .iter()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

fn inline_rule(renderer: &Renderer, selector: &str) -> Option<String> {
    let rules = renderer.theme().elements.get(selector)?;
    if rules.is_empty() {
        return None;
    }
    Some(
        rules
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
