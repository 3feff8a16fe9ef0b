use comrak::{
    Arena, Options, format_html,
    nodes::{AstNode, NodeHtmlBlock, NodeValue},
    parse_document,
};
use serde::{Deserialize, Serialize};

use crate::config::WORDS_PER_MINUTE;
use crate::domain::error::RenderError;

use super::{Renderer, decorate, highlight, sanitize};

/// Reading-time estimate produced alongside the rendered HTML.
///
/// `minutes` stays fractional here; rounding policy belongs to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingTimeResult {
    pub words: u32,
    pub minutes: f32,
}

/// Output of one render operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDocument {
    pub html: String,
    pub reading_time: ReadingTimeResult,
}

/// Render Markdown into themed HTML using the handle's current
/// configuration.
///
/// Pipeline: comrak parse → code-block highlighting on the AST → HTML
/// formatting → sanitisation → theme decoration (which also counts visible
/// words for the reading-time estimate).
pub fn render_markdown(content: &str, renderer: &Renderer) -> Result<RenderedDocument, RenderError> {
    let arena = Arena::new();
    let options = markdown_options();
    let root = parse_document(&arena, content, &options);

    highlight_code_blocks(root, renderer.flags().is_show_line_number)?;

    let mut raw = String::new();
    format_html(root, &options, &mut raw).map_err(|err| RenderError::Markdown {
        message: err.to_string(),
    })?;

    let clean = sanitize::sanitize_html(&raw);
    let decorated = decorate::apply_theme(&clean, renderer)?;

    let minutes = if decorated.words == 0 {
        0.0
    } else {
        decorated.words as f32 / WORDS_PER_MINUTE
    };

    Ok(RenderedDocument {
        html: decorated.html,
        reading_time: ReadingTimeResult {
            words: decorated.words,
            minutes,
        },
    })
}

fn markdown_options() -> Options<'static> {
    let mut options = Options::default();

    let ext = &mut options.extension;
    ext.strikethrough = true;
    ext.table = true;
    ext.autolink = true;
    ext.tasklist = true;
    ext.footnotes = true;

    // Raw HTML passes through the formatter and is cleaned by the
    // sanitisation stage instead of comrak's tag filter.
    options.render.r#unsafe = true;

    options
}

fn highlight_code_blocks<'a>(
    node: &'a AstNode<'a>,
    show_line_numbers: bool,
) -> Result<(), RenderError> {
    if let Some((info, literal)) = extract_code_block(node) {
        let mut segments = info.split_whitespace();
        let language = segments.next().map(|s| s.to_string());
        let meta = segments.collect::<Vec<_>>().join(" ");
        let meta = (!meta.is_empty()).then_some(meta);

        let html = highlight::highlight_code(
            language.as_deref(),
            meta.as_deref(),
            &literal,
            show_line_numbers,
        )?;

        let mut data = node.data.borrow_mut();
        data.value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: html,
        });
    }

    let mut child = node.first_child();
    while let Some(next) = child {
        highlight_code_blocks(next, show_line_numbers)?;
        child = next.next_sibling();
    }

    Ok(())
}

fn extract_code_block(node: &AstNode<'_>) -> Option<(String, String)> {
    let data = node.data.borrow();
    if let NodeValue::CodeBlock(ref block) = data.value {
        Some((block.info.clone(), block.literal.clone()))
    } else {
        None
    }
}
