//! Minimal CSS-text scanner used to merge caller-provided stylesheets into a
//! theme.
//!
//! This is deliberately not a CSS engine: it understands flat
//! `selector { property: value; }` blocks, grouped selectors and block
//! comments. At-rules and nested blocks are skipped, and malformed
//! declarations are dropped rather than rejected.

use std::collections::BTreeMap;

use super::StyleRules;

/// Parse CSS text into per-selector style rules.
pub fn parse_css(input: &str) -> BTreeMap<String, StyleRules> {
    let stripped = strip_comments(input);
    let mut parsed: BTreeMap<String, StyleRules> = BTreeMap::new();
    let mut rest = stripped.as_str();

    while let Some(open) = rest.find('{') {
        let selector_part = rest[..open].trim();
        let Some(close) = rest[open + 1..].find('}') else {
            break;
        };
        let body = &rest[open + 1..open + 1 + close];
        rest = &rest[open + 1 + close + 1..];

        if selector_part.is_empty() || selector_part.starts_with('@') {
            continue;
        }

        let rules = parse_declarations(body);
        if rules.is_empty() {
            continue;
        }

        for selector in selector_part.split(',') {
            let selector = selector.trim();
            if selector.is_empty() {
                continue;
            }
            parsed
                .entry(selector.to_string())
                .or_default()
                .extend(rules.clone());
        }
    }

    parsed
}

fn parse_declarations(body: &str) -> StyleRules {
    let mut rules = StyleRules::new();

    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() || declaration.contains('{') || declaration.contains('}') {
            continue;
        }

        let Some((property, value)) = declaration.split_once(':') else {
            continue;
        };
        let property = property.trim();
        let value = value.trim();
        if property.is_empty() || value.is_empty() {
            continue;
        }

        rules.insert(property.to_string(), value.to_string());
    }

    rules
}

fn strip_comments(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("/*") {
        output.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return output,
        }
    }

    output.push_str(rest);
    output
}
