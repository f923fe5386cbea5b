use htmldom::{to_html, Element};

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_empty_element() {
    let el = Element::div().id("x");
    assert_eq!(to_html(&el), "<div id=\"x\"></div>");
}

#[test]
fn test_classes_joined() {
    let el = Element::div().id("p").class("panel").class("panel-default");
    assert_eq!(to_html(&el), "<div id=\"p\" class=\"panel panel-default\"></div>");
}

#[test]
fn test_attrs_in_sorted_order() {
    let el = Element::anchor("#a")
        .id("t")
        .attr("data-toggle", "collapse")
        .attr("data-parent", "#accordion");
    assert_eq!(
        to_html(&el),
        "<a id=\"t\" data-parent=\"#accordion\" data-toggle=\"collapse\" href=\"#a\"></a>"
    );
}

#[test]
fn test_hidden_element_gets_display_none() {
    let mut el = Element::div().id("x");
    el.set_visible(false);
    assert_eq!(to_html(&el), "<div id=\"x\" style=\"display:none\"></div>");
}

#[test]
fn test_raw_content_emitted_verbatim() {
    let el = Element::div().id("x").raw_html("<b>not touched &</b>");
    assert_eq!(to_html(&el), "<div id=\"x\"><b>not touched &</b></div>");
}

#[test]
fn test_attr_values_escaped() {
    let el = Element::div().id("x").attr("title", "a \"quoted\" <value>");
    assert_eq!(
        to_html(&el),
        "<div id=\"x\" title=\"a &quot;quoted&quot; &lt;value&gt;\"></div>"
    );
}

#[test]
fn test_nested_children() {
    let el = Element::ul()
        .id("nav")
        .class("nav-tabs")
        .child(Element::li().id("i").child(Element::anchor("#one").id("a").raw_html("One")));
    assert_eq!(
        to_html(&el),
        "<ul id=\"nav\" class=\"nav-tabs\">\
         <li id=\"i\"><a id=\"a\" href=\"#one\">One</a></li>\
         </ul>"
    );
}

#[test]
fn test_serialization_is_deterministic() {
    let make = || {
        Element::div()
            .id("x")
            .attr("b", "2")
            .attr("a", "1")
            .attr("c", "3")
    };
    assert_eq!(to_html(&make()), to_html(&make()));
}
