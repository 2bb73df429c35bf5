//! # Navigation Tree Description
//!
//! `NavNode` describes *what* exists in a navigation tree, independent of
//! how it renders or reacts. A `Nav` mounts a list of these into live
//! components.
//!
//! ```rust,ignore
//! let children = vec![
//!     NavNode::item("home", "Home"),
//!     NavNode::group("about", "About")
//!         .child(NavNode::item("culture", "Culture"))
//!         .child(NavNode::item("developers", "Developers")),
//! ];
//! ```
//!
//! Children keep insertion order; that is the render order.

/// A node in a navigation tree description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// A selectable leaf entry.
    Item { name: String, label: String },
    /// A titled container of further nodes.
    Group {
        name: String,
        title: String,
        children: Vec<NavNode>,
    },
}

impl NavNode {
    pub fn item(name: impl Into<String>, label: impl Into<String>) -> Self {
        NavNode::Item {
            name: name.into(),
            label: label.into(),
        }
    }

    /// An empty group. Add children with [`NavNode::child`].
    pub fn group(name: impl Into<String>, title: impl Into<String>) -> Self {
        NavNode::Group {
            name: name.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Append a child. On an `Item` the child is dropped with a warning,
    /// since leaves cannot contain anything.
    pub fn child(mut self, node: NavNode) -> Self {
        match &mut self {
            NavNode::Group { children, .. } => children.push(node),
            NavNode::Item { name, .. } => {
                log::warn!("Ignoring child of nav item '{}': items are leaves", name);
            }
        }
        self
    }

    pub fn children(self, nodes: impl IntoIterator<Item = NavNode>) -> Self {
        nodes.into_iter().fold(self, NavNode::child)
    }

    pub fn name(&self) -> &str {
        match self {
            NavNode::Item { name, .. } | NavNode::Group { name, .. } => name.as_str(),
        }
    }
}
