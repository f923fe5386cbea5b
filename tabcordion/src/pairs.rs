//! Tab/pane pair extraction.
//!
//! Titles and panes are linked positionally, never by id equality: the
//! anchor at index `i` under the `.nav-tabs` child pairs with the
//! `.tab-pane` at index `i` under the `.tab-content` child.

use htmldom::{collect_anchors, collect_descendants_with_class, direct_child_with_class, Element};

/// One tab/pane pair read from the large-screen DOM.
///
/// Missing fields degrade to empty strings rather than errors; `title`
/// and `content` are raw markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPair {
    /// The title anchor's href target, typically `#id`-shaped.
    pub target: String,
    /// The title anchor's inner markup.
    pub title: String,
    /// The pane's element id.
    pub id: String,
    /// The pane's inner markup.
    pub content: String,
}

/// Read the ordered tab/pane pairs from a container.
///
/// Returns `None` when either list container is missing or the title
/// and pane counts differ — callers treat that as a structural no-op.
pub fn collect_pairs(container: &Element) -> Option<Vec<TabPair>> {
    let nav = direct_child_with_class(container, "nav-tabs")?;
    let content = direct_child_with_class(container, "tab-content")?;

    let titles = collect_anchors(nav);
    let panes = collect_descendants_with_class(content, "tab-pane");

    if titles.len() != panes.len() {
        log::warn!(
            "[pairs] title/pane count mismatch in {}: {} titles, {} panes",
            container.id,
            titles.len(),
            panes.len()
        );
        return None;
    }

    let pairs = titles
        .iter()
        .zip(panes.iter())
        .map(|(title, pane)| TabPair {
            target: title.attr_value("href").unwrap_or("").to_string(),
            title: title.inner_html(),
            id: pane.id.clone(),
            content: pane.inner_html(),
        })
        .collect();

    Some(pairs)
}
