use htmldom::{
    collect_anchors, collect_descendants_with_class, direct_child_with_class,
    direct_child_with_class_mut, direct_child_with_id_mut, Element,
};

fn tabbed_container() -> Element {
    Element::div()
        .id("tabs")
        .child(
            Element::ul()
                .class("nav-tabs")
                .child(Element::li().child(Element::anchor("#one").raw_html("One")))
                .child(Element::li().child(Element::anchor("#two").raw_html("Two"))),
        )
        .child(
            Element::div()
                .class("tab-content")
                .child(Element::section().id("one").class("tab-pane").raw_html("first"))
                .child(Element::section().id("two").class("tab-pane").raw_html("second")),
        )
}

// ============================================================================
// Direct-child lookups
// ============================================================================

#[test]
fn test_direct_child_with_class_finds_immediate_only() {
    let container = tabbed_container();
    assert!(direct_child_with_class(&container, "nav-tabs").is_some());
    assert!(direct_child_with_class(&container, "tab-content").is_some());
    // tab-pane is nested one level down, not a direct child
    assert!(direct_child_with_class(&container, "tab-pane").is_none());
}

#[test]
fn test_direct_child_with_class_mut_allows_mutation() {
    let mut container = tabbed_container();
    let nav = direct_child_with_class_mut(&mut container, "nav-tabs").unwrap();
    nav.set_visible(false);
    assert!(!direct_child_with_class(&container, "nav-tabs").unwrap().visible);
}

#[test]
fn test_direct_child_with_id_mut() {
    let mut container = Element::div().child(Element::div().id("accordion"));
    assert!(direct_child_with_id_mut(&mut container, "accordion").is_some());
    assert!(direct_child_with_id_mut(&mut container, "other").is_none());
}

// ============================================================================
// Subtree collectors
// ============================================================================

#[test]
fn test_collect_descendants_with_class_in_document_order() {
    let container = tabbed_container();
    let panes = collect_descendants_with_class(&container, "tab-pane");
    let ids: Vec<&str> = panes.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["one", "two"]);
}

#[test]
fn test_collect_anchors_in_document_order() {
    let container = tabbed_container();
    let anchors = collect_anchors(&container);
    let hrefs: Vec<&str> = anchors
        .iter()
        .filter_map(|a| a.attr_value("href"))
        .collect();
    assert_eq!(hrefs, ["#one", "#two"]);
}

#[test]
fn test_collectors_empty_when_nothing_matches() {
    let empty = Element::div();
    assert!(collect_anchors(&empty).is_empty());
    assert!(collect_descendants_with_class(&empty, "tab-pane").is_empty());
}
