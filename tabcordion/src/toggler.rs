//! Live tab/accordion toggler.
//!
//! State machine over two presentations. Entering `Accordion` hides the
//! tab subtree and builds (or re-reveals) the accordion group; entering
//! `Tabs` removes the group and re-shows the tab subtree. Re-asserting
//! the current presentation is a visibility-only no-op, so settled
//! evaluations are idempotent.

use std::time::Instant;

use htmldom::{
    direct_child_with_class_mut, direct_child_with_id, direct_child_with_id_mut, Element,
};

use crate::accordion;
use crate::debounce::Debounce;
use crate::options::TabcordionOptions;

/// The currently visible layout mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Tabs,
    Accordion,
}

/// Deferred-execution seam for settled evaluations.
///
/// When installed, the settled resize evaluation is handed to the
/// scheduler as a closure instead of running directly. The scheduler
/// decides whether to run it within the call (for example to batch it
/// with other work); declining drops that evaluation and the instance
/// simply waits for the next settled signal.
pub type Scheduler = Box<dyn FnMut(&mut dyn FnMut())>;

/// Live toggler instance for one container element.
pub struct Tabcordion {
    options: TabcordionOptions,
    presentation: Presentation,
    debounce: Debounce,
    scheduler: Option<Scheduler>,
    disposed: bool,
}

impl std::fmt::Debug for Tabcordion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tabcordion")
            .field("options", &self.options)
            .field("presentation", &self.presentation)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Tabcordion {
    /// Attach to a container, immediately evaluating the current width
    /// condition and entering the matching presentation. Does not wait
    /// for a resize signal.
    pub fn attach(
        container: &mut Element,
        options: TabcordionOptions,
        document_width: u32,
    ) -> Self {
        let debounce = Debounce::new(options.delay);
        let mut instance = Self {
            options,
            presentation: Presentation::Tabs,
            debounce,
            scheduler: None,
            disposed: false,
        };
        instance.evaluate(container, document_width);
        instance
    }

    /// Install a deferred-execution scheduler for settled evaluations.
    pub fn set_scheduler(&mut self, scheduler: Scheduler) {
        self.scheduler = Some(scheduler);
    }

    /// The presentation currently applied to the container.
    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Record a resize signal carrying the new document width.
    ///
    /// Cancels any pending quiet period and starts a new one; only the
    /// last signal before the period elapses is evaluated. Ignored when
    /// resize handling is disabled or the instance is disposed.
    pub fn notify_resize(&mut self, document_width: u32, now: Instant) {
        if self.disposed || !self.options.on_resize {
            return;
        }
        self.debounce.signal(document_width, now);
    }

    /// Poll the debounce timer and apply any settled evaluation.
    ///
    /// Returns true if an evaluation ran. With a scheduler installed,
    /// the settled evaluation is handed over instead; a scheduler that
    /// declines to run it leaves the container untouched (and this
    /// returns false).
    pub fn tick(&mut self, container: &mut Element, now: Instant) -> bool {
        if self.disposed {
            return false;
        }
        let Some(width) = self.debounce.poll(now) else {
            return false;
        };

        if let Some(mut scheduler) = self.scheduler.take() {
            let mut ran = false;
            {
                let mut run = || {
                    self.evaluate(container, width);
                    ran = true;
                };
                scheduler(&mut run);
            }
            self.scheduler = Some(scheduler);
            ran
        } else {
            self.evaluate(container, width);
            true
        }
    }

    /// Tear down the instance: cancel any pending evaluation and stop
    /// reacting to signals. The container is left in whatever
    /// presentation it currently shows.
    pub fn dispose(&mut self) {
        self.debounce.cancel();
        self.disposed = true;
    }

    /// Evaluate the width condition and apply the matching presentation.
    pub fn evaluate(&mut self, container: &mut Element, document_width: u32) {
        if self.options.break_width > document_width {
            self.enter_accordion(container);
        } else {
            self.enter_tabs(container);
        }
    }

    /// Hide the tab subtree and build or re-reveal the accordion group.
    fn enter_accordion(&mut self, container: &mut Element) {
        // Direct-child lookup, matching the re-reveal and removal paths:
        // an unrelated nested element carrying the group id must not
        // mask the build.
        if direct_child_with_id(container, &self.options.accordion.element_id).is_none() {
            // Build before touching visibility: a malformed structure
            // must leave the container exactly as it was.
            let Some(group) = accordion::build(container, &self.options) else {
                return;
            };
            log::debug!(
                "[tabcordion] built accordion group {} in {}",
                self.options.accordion.element_id,
                container.id
            );
            set_tab_subtree_visible(container, false);
            container.prepend_child(group);
        } else {
            set_tab_subtree_visible(container, false);
            // Re-reveal headings only; bodies keep their collapse state.
            if let Some(group) =
                direct_child_with_id_mut(container, &self.options.accordion.element_id)
            {
                show_panel_headings(group);
            }
        }

        self.presentation = Presentation::Accordion;
    }

    /// Remove the accordion group and re-show the tab subtree.
    fn enter_tabs(&mut self, container: &mut Element) {
        // Duplicate ids are tolerated while both subtrees coexist; the
        // group is removed outright rather than hidden.
        let removed =
            container.remove_child_where(|c| c.id == self.options.accordion.element_id);
        if removed {
            log::debug!(
                "[tabcordion] removed accordion group from {}",
                container.id
            );
        }

        set_tab_subtree_visible(container, true);
        self.presentation = Presentation::Tabs;
    }
}

fn set_tab_subtree_visible(container: &mut Element, visible: bool) {
    if let Some(nav) = direct_child_with_class_mut(container, "nav-tabs") {
        nav.set_visible(visible);
    }
    if let Some(content) = direct_child_with_class_mut(container, "tab-content") {
        content.set_visible(visible);
    }
}

fn show_panel_headings(group: &mut Element) {
    for child in group.child_elements_mut() {
        if child.has_class("panel-heading") {
            child.set_visible(true);
        }
        show_panel_headings(child);
    }
}
