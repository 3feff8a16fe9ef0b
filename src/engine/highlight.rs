use once_cell::sync::Lazy;
use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use crate::domain::error::RenderError;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);

const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "syntax-" };

/// Highlight one fenced code block into a `pre > code` fragment with
/// `syntax-` prefixed CSS classes. Unknown languages fall back to the plain
/// text syntax.
pub(crate) fn highlight_code(
    language: Option<&str>,
    meta: Option<&str>,
    code: &str,
    show_line_numbers: bool,
) -> Result<String, RenderError> {
    let lang_token = language.unwrap_or("text");
    let syntax =
        find_syntax(&SYNTAX_SET, lang_token).unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut code_with_newline = code.to_string();
    if !code_with_newline.ends_with('\n') {
        code_with_newline.push('\n');
    }

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, &SYNTAX_SET, CLASS_STYLE);

    for line in LinesWithEndings::from(code_with_newline.as_str()) {
        generator
            .parse_html_for_line_which_includes_newline(line)
            .map_err(|err| RenderError::Highlighting {
                language: lang_token.to_string(),
                message: err.to_string(),
            })?;
    }

    let highlighted = generator.finalize();
    let body = if show_line_numbers {
        wrap_lines(&highlighted)
    } else {
        highlighted
    };

    let mut pre_classes = vec![
        "syntax-highlight".to_string(),
        format!("syntax-lang-{}", lang_token.to_ascii_lowercase()),
    ];
    if show_line_numbers {
        pre_classes.push("line-numbers".to_string());
    }

    let meta_attr = meta
        .filter(|m| !m.is_empty())
        .map(|m| format!(" data-meta=\"{}\"", ammonia::clean_text(m)))
        .unwrap_or_default();
    let lang_attr = format!(" data-language=\"{}\"", ammonia::clean_text(lang_token));

    Ok(format!(
        "<pre class=\"{}\"{lang_attr}><code class=\"language-{} syntax-code\"{meta_attr}>{body}</code></pre>",
        pre_classes.join(" "),
        lang_token.to_ascii_lowercase(),
    ))
}

fn wrap_lines(highlighted: &str) -> String {
    highlighted
        .lines()
        .enumerate()
        .map(|(index, line)| {
            format!(
                "<span class=\"code-line\" data-line=\"{}\">{line}\n</span>",
                index + 1
            )
        })
        .collect()
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_name(&lowercase))
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}
