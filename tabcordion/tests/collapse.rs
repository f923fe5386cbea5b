use htmldom::{to_html, Element};
use tabcordion::{collapse, CollapseOptions};

fn tabbed_container() -> Element {
    Element::div()
        .id("features")
        .child(
            Element::ul()
                .class("nav-tabs")
                .child(Element::li().child(Element::anchor("#intro").raw_html("Intro")))
                .child(Element::li().child(Element::anchor("#specs").raw_html("<em>Specs</em>"))),
        )
        .child(
            Element::div()
                .class("tab-content")
                .child(
                    Element::section()
                        .id("intro")
                        .class("tab-pane")
                        .raw_html("<p>Welcome</p>"),
                )
                .child(
                    Element::section()
                        .id("specs")
                        .class("tab-pane")
                        .raw_html("<table></table>"),
                ),
        )
}

// ============================================================================
// Threshold (P1)
// ============================================================================

#[test]
fn test_rewrites_below_break_width() {
    let mut container = tabbed_container();
    collapse::attach(&mut container, &CollapseOptions::new().break_width(500), 300);

    // Heading/body pairs in original order, tabs gone
    let children = container.child_elements();
    assert_eq!(children.len(), 4);
    assert!(children[0].has_class("panel-heading"));
    assert!(children[1].has_class("panel-collapse"));
    assert!(children[2].has_class("panel-heading"));
    assert!(children[3].has_class("panel-collapse"));
}

#[test]
fn test_untouched_at_or_above_break_width() {
    for width in [500, 800] {
        let mut container = tabbed_container();
        let before = to_html(&container);
        collapse::attach(&mut container, &CollapseOptions::new().break_width(500), width);
        assert_eq!(to_html(&container), before, "width {width}");
    }
}

// ============================================================================
// Generated markup
// ============================================================================

#[test]
fn test_heading_targets_original_href() {
    let mut container = tabbed_container();
    collapse::attach(&mut container, &CollapseOptions::default(), 300);

    let heading = container.child_elements()[0].inner_html();
    assert!(heading.contains("href=\"#intro\""), "got: {heading}");
    assert!(heading.contains(">Intro</a>"), "got: {heading}");
    assert!(heading.contains("data-parent=\"#accordion\""), "got: {heading}");
}

#[test]
fn test_body_keeps_original_id_and_content() {
    let mut container = tabbed_container();
    collapse::attach(&mut container, &CollapseOptions::default(), 300);

    let body = &container.child_elements()[1];
    assert_eq!(body.id, "intro");
    assert_eq!(
        body.inner_html(),
        "<div class=\"panel-body\"><p>Welcome</p></div>"
    );
}

#[test]
fn test_title_markup_inserted_raw() {
    let mut container = tabbed_container();
    collapse::attach(&mut container, &CollapseOptions::default(), 300);

    let heading = container.child_elements()[2].inner_html();
    assert!(heading.contains("<em>Specs</em>"), "got: {heading}");
}

// ============================================================================
// Malformed input (P2) & re-attach
// ============================================================================

#[test]
fn test_count_mismatch_leaves_container_byte_identical() {
    let mut container = tabbed_container();
    // Third pane without a matching title
    if let Some(content) = container.find_child_mut(|c| c.has_class("tab-content")) {
        content.append_child(Element::section().id("extra").class("tab-pane"));
    }

    let before = to_html(&container);
    collapse::attach(&mut container, &CollapseOptions::default(), 300);
    assert_eq!(to_html(&container), before);
}

#[test]
fn test_missing_nav_leaves_container_byte_identical() {
    let mut container = Element::div().id("bare").child(
        Element::div()
            .class("tab-content")
            .child(Element::section().id("only").class("tab-pane")),
    );

    let before = to_html(&container);
    collapse::attach(&mut container, &CollapseOptions::default(), 300);
    assert_eq!(to_html(&container), before);
}

#[test]
fn test_second_attach_is_a_no_op() {
    let mut container = tabbed_container();
    collapse::attach(&mut container, &CollapseOptions::default(), 300);
    let after_first = to_html(&container);

    collapse::attach(&mut container, &CollapseOptions::default(), 300);
    assert_eq!(to_html(&container), after_first);
}
