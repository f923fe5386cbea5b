//! Traversal helpers over the element tree.
//!
//! Widgets locate their collaborating nodes structurally (by class and
//! tag), never by walking layout state. Direct-child lookups only see
//! immediate children; collectors walk the whole subtree in document
//! order.

use crate::element::{Content, Element};

/// Find the first direct child carrying the given class.
pub fn direct_child_with_class<'a>(parent: &'a Element, class: &str) -> Option<&'a Element> {
    parent.child_elements().iter().find(|c| c.has_class(class))
}

/// Mutable variant of [`direct_child_with_class`].
pub fn direct_child_with_class_mut<'a>(
    parent: &'a mut Element,
    class: &str,
) -> Option<&'a mut Element> {
    parent
        .child_elements_mut()
        .iter_mut()
        .find(|c| c.has_class(class))
}

/// Find the first direct child with the given element id.
pub fn direct_child_with_id<'a>(parent: &'a Element, id: &str) -> Option<&'a Element> {
    parent.child_elements().iter().find(|c| c.id == id)
}

/// Mutable variant of [`direct_child_with_id`].
pub fn direct_child_with_id_mut<'a>(
    parent: &'a mut Element,
    id: &str,
) -> Option<&'a mut Element> {
    parent.child_elements_mut().iter_mut().find(|c| c.id == id)
}

/// Collect every descendant carrying the given class, in document order.
/// The parent itself is not included.
pub fn collect_descendants_with_class<'a>(parent: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_class_recursive(parent, class, &mut found);
    found
}

fn collect_class_recursive<'a>(parent: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if let Content::Children(children) = &parent.content {
        for child in children {
            if child.has_class(class) {
                found.push(child);
            }
            collect_class_recursive(child, class, found);
        }
    }
}

/// Collect every descendant anchor (`a` tag), in document order.
pub fn collect_anchors(parent: &Element) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_tag_recursive(parent, "a", &mut found);
    found
}

fn collect_tag_recursive<'a>(parent: &'a Element, tag: &str, found: &mut Vec<&'a Element>) {
    if let Content::Children(children) = &parent.content {
        for child in children {
            if child.tag == tag {
                found.push(child);
            }
            collect_tag_recursive(child, tag, found);
        }
    }
}
