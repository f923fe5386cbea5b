//! Element tree to HTML string serialization.
//!
//! Output is deterministic: attributes are emitted in sorted key order
//! so two structurally equal trees serialize byte-for-byte identically.

use crate::element::{Content, Element};
use crate::escape::escape_text;

/// Serialize an element and its subtree to an HTML string.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    out.push_str(" id=\"");
    out.push_str(&escape_text(&element.id));
    out.push('"');

    if !element.classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_text(&element.classes.join(" ")));
        out.push('"');
    }

    let mut keys: Vec<&String> = element.attrs.keys().collect();
    keys.sort();
    for key in keys {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_text(&element.attrs[key]));
        out.push('"');
    }

    if !element.visible {
        out.push_str(" style=\"display:none\"");
    }

    out.push('>');

    match &element.content {
        Content::None => {}
        Content::Raw(html) => out.push_str(html),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}
