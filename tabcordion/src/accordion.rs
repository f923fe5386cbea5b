//! Accordion markup construction for the live toggler.
//!
//! Generated ids carry an `_accordion` suffix so they never collide
//! with the original tab ids: the tab subtree stays in the container
//! (hidden, not removed) while the accordion coexists with it.

use htmldom::Element;

use crate::options::TabcordionOptions;
use crate::pairs::collect_pairs;
use crate::template;

/// Fragment templates for Bootstrap 3 collapsible accordions,
/// specialized from the configured title tag and group id.
#[derive(Debug, Clone)]
pub struct Templates {
    /// Heading inner markup; expects `target` (such as `#foo`) and `title`.
    pub heading: String,
    /// Body inner markup; expects `content`.
    pub content: String,
}

impl Templates {
    pub fn new(options: &TabcordionOptions) -> Self {
        let tag = &options.tabs.panel_title_tag;
        let group = &options.accordion.element_id;
        Self {
            heading: format!(
                "<{tag} class=\"panel-title\">\
                 <a class=\"accordion-toggle\" data-toggle=\"collapse\" \
                 data-parent=\"#{group}\" href=\"{{{{ target }}}}_accordion\">\
                 {{{{{{ title }}}}}}</a></{tag}>"
            ),
            content: "<div class=\"panel-body\">{{{ content }}}</div>".to_string(),
        }
    }
}

/// Build the accordion group element from the container's tab pairs.
///
/// Returns `None` on structural mismatch or a template failure; in both
/// cases nothing has been mutated.
pub fn build(container: &Element, options: &TabcordionOptions) -> Option<Element> {
    let pairs = collect_pairs(container)?;
    let templates = Templates::new(options);

    let mut panels = Vec::with_capacity(pairs.len());
    for pair in &pairs {
        let heading_html = match template::render(
            &templates.heading,
            &[
                ("target", pair.target.as_str()),
                ("title", pair.title.as_str()),
            ],
        ) {
            Ok(html) => html,
            Err(err) => {
                log::warn!("[accordion] heading template failed: {err}");
                return None;
            }
        };
        let body_html =
            match template::render(&templates.content, &[("content", pair.content.as_str())]) {
                Ok(html) => html,
                Err(err) => {
                    log::warn!("[accordion] content template failed: {err}");
                    return None;
                }
            };

        let heading = Element::div().class("panel-heading").raw_html(heading_html);
        let body = Element::div()
            .id(format!("{}_accordion", pair.id))
            .class("panel-collapse")
            .class("collapse")
            .raw_html(body_html);

        panels.push(
            Element::div()
                .class("panel")
                .class("panel-default")
                .child(heading)
                .child(body),
        );
    }

    Some(
        Element::div()
            .id(options.accordion.element_id.clone())
            .class("panel-group")
            .children(panels),
    )
}
