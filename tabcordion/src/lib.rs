//! Responsive tab/accordion widget controllers.
//!
//! Two independent controllers attach to a container element holding a
//! Bootstrap-style tab widget (a `.nav-tabs` list plus a `.tab-content`
//! pane area):
//!
//! - [`collapse::attach`] rewrites the container into accordion markup
//!   once, at attach time, when the document is narrower than the
//!   configured break width. It never reverts.
//! - [`Tabcordion`] toggles live between `Tabs` and `Accordion`
//!   presentations on settled (debounced) resize signals, building the
//!   accordion subtree lazily on first need.
//!
//! Malformed structural input (title/pane count mismatch, missing list
//! containers) degrades to a no-op with a `log::warn!`, never a panic.

pub mod accordion;
pub mod collapse;
pub mod debounce;
pub mod options;
pub mod pairs;
pub mod registry;
pub mod template;
pub mod toggler;

pub use debounce::Debounce;
pub use options::{AccordionOptions, CollapseOptions, TabcordionOptions, TabsOptions};
pub use registry::Registry;
pub use toggler::{Presentation, Scheduler, Tabcordion};
pub use template::{render, TemplateError};
