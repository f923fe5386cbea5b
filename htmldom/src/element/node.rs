use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub tag: String,
    pub id: String,

    // Markup
    pub classes: Vec<String>,
    pub attrs: HashMap<String, String>,

    // Presentation (display:none when false; the node stays in the tree)
    pub visible: bool,

    // Content
    pub content: Content,

    // Custom data storage (for widget instance markers, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            tag: "div".to_string(),
            id: generate_id("el"),
            classes: Vec::new(),
            attrs: HashMap::new(),
            visible: true,
            content: Content::None,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn ul() -> Self {
        Self::new("ul")
    }

    pub fn li() -> Self {
        Self::new("li")
    }

    pub fn section() -> Self {
        Self::new("section")
    }

    /// Create an anchor element with an href attribute.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    // Presentation
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    // Content
    pub fn raw_html(mut self, html: impl Into<String>) -> Self {
        self.content = Content::Raw(html.into());
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            Content::None => self.content = Content::Children(vec![child]),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            Content::None => self.content = Content::Children(new_children.into_iter().collect()),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    // Runtime accessors

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr_value(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    /// The element's inner markup: a raw fragment verbatim, or the
    /// serialized concatenation of its children.
    pub fn inner_html(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Raw(html) => html.clone(),
            Content::Children(children) => {
                children.iter().map(crate::render::to_html).collect()
            }
        }
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    // Runtime mutators

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn find_child_mut(
        &mut self,
        mut pred: impl FnMut(&Element) -> bool,
    ) -> Option<&mut Element> {
        self.child_elements_mut().iter_mut().find(|c| pred(c))
    }

    /// Remove every direct child matching the predicate.
    /// Returns true if anything was removed.
    pub fn remove_child_where(&mut self, mut pred: impl FnMut(&Element) -> bool) -> bool {
        if let Content::Children(children) = &mut self.content {
            let before = children.len();
            children.retain(|c| !pred(c));
            let removed = before - children.len();
            if removed > 0 {
                log::debug!("[element] removed {removed} children from {}", self.id);
            }
            return removed > 0;
        }
        false
    }

    pub fn prepend_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.insert(0, child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn append_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
    }

    pub fn clear_children(&mut self) {
        log::debug!("[element] clearing content of {}", self.id);
        self.content = Content::None;
    }
}
