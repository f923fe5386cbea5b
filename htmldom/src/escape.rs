/// Entity-escape text for insertion into HTML content or attribute values.
///
/// Raw insertion points (pane bodies, tab labels) bypass this on purpose:
/// callers own the sanitization of externally-sourced markup.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
