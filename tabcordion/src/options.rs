//! Widget configuration types.

use std::time::Duration;

/// Configuration for the live [`Tabcordion`](crate::Tabcordion) toggler.
///
/// Frozen at attach time; never mutated afterwards. The width compared
/// against `break_width` is always the document width carried by the
/// resize signal itself (the upstream plugin accepted a `resizeEl`
/// option it never consulted for this comparison; that option does not
/// exist here).
#[derive(Debug, Clone)]
pub struct TabcordionOptions {
    /// Whether to react to resize signals at all. When false, the
    /// presentation is evaluated exactly once at attach time.
    pub on_resize: bool,

    /// Debounce quiet period before a resize signal is acted on.
    pub delay: Duration,

    /// Accordion presentation is selected when
    /// `break_width > document width`.
    pub break_width: u32,

    /// Tab-side rendering options.
    pub tabs: TabsOptions,

    /// Accordion-side rendering options.
    pub accordion: AccordionOptions,
}

impl Default for TabcordionOptions {
    fn default() -> Self {
        Self {
            on_resize: true,
            delay: Duration::from_millis(500),
            break_width: 500,
            tabs: TabsOptions::default(),
            accordion: AccordionOptions::default(),
        }
    }
}

impl TabcordionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether resize signals are handled.
    pub fn on_resize(mut self, on_resize: bool) -> Self {
        self.on_resize = on_resize;
        self
    }

    /// Set the debounce quiet period.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the width threshold.
    pub fn break_width(mut self, break_width: u32) -> Self {
        self.break_width = break_width;
        self
    }

    /// Set the tag wrapping each accordion heading title.
    pub fn panel_title_tag(mut self, tag: impl Into<String>) -> Self {
        self.tabs.panel_title_tag = tag.into();
        self
    }

    /// Set the id of the generated accordion group element.
    pub fn accordion_element_id(mut self, id: impl Into<String>) -> Self {
        self.accordion.element_id = id.into();
        self
    }
}

/// Tab-side rendering options.
#[derive(Debug, Clone)]
pub struct TabsOptions {
    /// Tag used to wrap each accordion heading's title.
    pub panel_title_tag: String,
}

impl Default for TabsOptions {
    fn default() -> Self {
        Self {
            panel_title_tag: "h4".to_string(),
        }
    }
}

/// Accordion-side rendering options.
#[derive(Debug, Clone)]
pub struct AccordionOptions {
    /// Id of the generated accordion group element; also scopes the
    /// "already built" check.
    pub element_id: String,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            element_id: "accordion".to_string(),
        }
    }
}

/// Configuration for the one-shot collapser.
#[derive(Debug, Clone)]
pub struct CollapseOptions {
    /// The container is rewritten only when
    /// `break_width > document width` at attach time.
    pub break_width: u32,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self { break_width: 500 }
    }
}

impl CollapseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the width threshold.
    pub fn break_width(mut self, break_width: u32) -> Self {
        self.break_width = break_width;
        self
    }
}
