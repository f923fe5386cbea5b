//! Mustache-subset fragment renderer.
//!
//! Two placeholder flavors: `{{ key }}` substitutes the entity-escaped
//! field value, `{{{ key }}}` substitutes it raw. Raw insertion is the
//! trust boundary for tab titles and pane bodies, which are allowed to
//! carry markup. Unknown keys substitute as empty strings; no loops or
//! conditionals — callers perform all iteration.

use htmldom::escape_text;
use thiserror::Error;

/// Errors from rendering a template string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` or `{{{` opener without its matching closer.
    #[error("unclosed placeholder at byte offset {offset}")]
    UnclosedTag { offset: usize },
}

/// Render a template against a flat key/value field list.
pub fn render(template: &str, fields: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;

    while let Some(rel) = template[pos..].find("{{") {
        let start = pos + rel;
        out.push_str(&template[pos..start]);

        let raw = template[start..].starts_with("{{{");
        let close = if raw { "}}}" } else { "}}" };
        let body_start = start + if raw { 3 } else { 2 };

        let Some(end_rel) = template[body_start..].find(close) else {
            return Err(TemplateError::UnclosedTag { offset: start });
        };

        let key = template[body_start..body_start + end_rel].trim();
        let value = lookup(fields, key);
        if raw {
            out.push_str(value);
        } else {
            out.push_str(&escape_text(value));
        }

        pos = body_start + end_rel + close.len();
    }

    out.push_str(&template[pos..]);
    Ok(out)
}

fn lookup<'a>(fields: &[(&str, &'a str)], key: &str) -> &'a str {
    fields
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or("")
}
