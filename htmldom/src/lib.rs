pub mod element;
pub mod escape;
pub mod query;
pub mod render;

pub use element::{Content, Element};
pub use escape::escape_text;
pub use query::{
    collect_anchors, collect_descendants_with_class, direct_child_with_class,
    direct_child_with_class_mut, direct_child_with_id, direct_child_with_id_mut,
};
pub use render::to_html;
