//! Instance registry for live toggler attachments.
//!
//! Instances are keyed by container element id, so a second attach on
//! the same container reuses the recorded instance instead of
//! constructing (and re-evaluating) a new one.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::time::Instant;

use htmldom::Element;

use crate::options::TabcordionOptions;
use crate::toggler::Tabcordion;

/// Registry owning all attached [`Tabcordion`] instances.
#[derive(Debug, Default)]
pub struct Registry {
    instances: HashMap<String, Tabcordion>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a toggler to a container, or return the instance already
    /// attached to it. A fresh attachment evaluates the presentation
    /// immediately; a reused one is returned untouched (its options are
    /// kept and the supplied ones ignored).
    pub fn attach(
        &mut self,
        container: &mut Element,
        options: TabcordionOptions,
        document_width: u32,
    ) -> &mut Tabcordion {
        match self.instances.entry(container.id.clone()) {
            Entry::Occupied(entry) => {
                log::debug!("[registry] reusing instance for {}", container.id);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                entry.insert(Tabcordion::attach(container, options, document_width))
            }
        }
    }

    /// Look up the instance attached to a container id.
    pub fn get_mut(&mut self, container_id: &str) -> Option<&mut Tabcordion> {
        self.instances.get_mut(container_id)
    }

    /// Fan a resize signal out to every attached instance.
    pub fn notify_resize(&mut self, document_width: u32, now: Instant) {
        for instance in self.instances.values_mut() {
            instance.notify_resize(document_width, now);
        }
    }

    /// Tick the instance attached to this container.
    /// Returns true if an evaluation ran.
    pub fn tick(&mut self, container: &mut Element, now: Instant) -> bool {
        match self.instances.get_mut(&container.id) {
            Some(instance) => instance.tick(container, now),
            None => false,
        }
    }

    /// Dispose and forget the instance attached to a container id.
    /// Returns true if one existed.
    pub fn dispose(&mut self, container_id: &str) -> bool {
        match self.instances.remove(container_id) {
            Some(mut instance) => {
                instance.dispose();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
