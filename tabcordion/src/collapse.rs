//! One-shot collapser.
//!
//! When the document is already narrower than the break width at
//! attach time, the container's tab markup is read once and replaced
//! with accordion markup. The rewrite is destructive and never
//! revisited; above the break width the container is left untouched.

use htmldom::Element;

use crate::options::CollapseOptions;
use crate::pairs::collect_pairs;
use crate::template;

/// Data-map marker recording a completed rewrite, so a second attach
/// on the same container is a no-op.
const ATTACHED_KEY: &str = "collapse-attached";

const HEADING_TEMPLATE: &str = "<h4 class=\"panel-title\">\
    <a class=\"accordion-toggle\" data-toggle=\"collapse\" \
    data-parent=\"#accordion\" href=\"{{ target }}\">{{{ title }}}</a></h4>";

const CONTENT_TEMPLATE: &str = "<div class=\"panel-body\">{{{ content }}}</div>";

/// Conditionally rewrite the container into accordion markup.
///
/// Runs synchronously, exactly once, at attach time. The condition is
/// `break_width > document_width`; when it does not hold, or the
/// container's tab structure is malformed, nothing is mutated.
pub fn attach(container: &mut Element, options: &CollapseOptions, document_width: u32) {
    if container.get_data(ATTACHED_KEY).is_some() {
        log::debug!("[collapse] {} already attached, skipping", container.id);
        return;
    }

    if options.break_width <= document_width {
        return;
    }

    let Some(pairs) = collect_pairs(container) else {
        return;
    };

    // Render everything up front so a template failure aborts cleanly
    // before any mutation.
    let mut fragments = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let heading_html = match template::render(
            HEADING_TEMPLATE,
            &[
                ("target", pair.target.as_str()),
                ("title", pair.title.as_str()),
            ],
        ) {
            Ok(html) => html,
            Err(err) => {
                log::warn!("[collapse] heading template failed: {err}");
                return;
            }
        };
        let body_html =
            match template::render(CONTENT_TEMPLATE, &[("content", pair.content.as_str())]) {
                Ok(html) => html,
                Err(err) => {
                    log::warn!("[collapse] content template failed: {err}");
                    return;
                }
            };

        let heading = Element::div().class("panel-heading").raw_html(heading_html);
        let body = Element::div()
            .id(pair.id.clone())
            .class("panel-collapse")
            .class("collapse")
            .raw_html(body_html);
        fragments.push((heading, body));
    }

    log::debug!(
        "[collapse] rewriting {} into {} accordion panels",
        container.id,
        fragments.len()
    );

    container.clear_children();
    for (heading, body) in fragments {
        container.append_child(heading);
        container.append_child(body);
    }
    container.set_data(ATTACHED_KEY, "1");
}
