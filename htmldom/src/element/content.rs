#[derive(Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    /// An opaque HTML fragment the tree does not parse (template output,
    /// pane bodies, tab labels). Serialized verbatim.
    Raw(String),
    Children(Vec<super::Element>),
}

impl std::fmt::Debug for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Raw(s) => write!(f, "Raw({s:?})"),
            Self::Children(c) => write!(f, "Children({c:?})"),
        }
    }
}
