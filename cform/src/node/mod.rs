//! Framework-neutral view tree produced by forms and items.

mod layout;
pub mod render;

pub use layout::{Direction, Layout, Size};

/// What a piece of text is for; hosts style each role differently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextRole {
    #[default]
    Plain,
    Label,
    /// Required-field marker next to a label
    Marker,
    Error,
}

/// A node in the view tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Node {
    /// Empty node (renders nothing)
    #[default]
    Empty,

    /// Text content
    Text {
        content: String,
        role: TextRole,
        layout: Layout,
    },

    /// Container laying out its children
    Container { children: Vec<Node>, layout: Layout },

    /// Input control bound to a form field
    Control {
        /// Field the control edits
        field: String,
        /// Current value as displayed
        value: String,
        /// Whether the field currently has an error
        invalid: bool,
        layout: Layout,
    },
}

impl Node {
    /// Create a plain text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            role: TextRole::Plain,
            layout: Layout::default(),
        }
    }

    /// Create a text node with a role
    pub fn text_as(content: impl Into<String>, role: TextRole, layout: Layout) -> Self {
        Self::Text {
            content: content.into(),
            role,
            layout,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        match self {
            Self::Empty => None,
            Self::Text { layout, .. }
            | Self::Container { layout, .. }
            | Self::Control { layout, .. } => Some(layout),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container { children, .. } => children,
            _ => &[],
        }
    }

    /// All text nodes with `role`, depth first.
    pub fn texts(&self, role: TextRole) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(role, &mut out);
        out
    }

    fn collect_texts<'a>(&'a self, wanted: TextRole, out: &mut Vec<&'a str>) {
        match self {
            Self::Text { content, role, .. } if *role == wanted => out.push(content),
            Self::Container { children, .. } => {
                for child in children {
                    child.collect_texts(wanted, out);
                }
            }
            _ => {}
        }
    }

    /// The control bound to `field`, if any.
    pub fn control(&self, field: &str) -> Option<&Node> {
        match self {
            Self::Control { field: f, .. } if f == field => Some(self),
            Self::Container { children, .. } => {
                children.iter().find_map(|child| child.control(field))
            }
            _ => None,
        }
    }
}
