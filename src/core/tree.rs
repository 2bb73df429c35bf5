//! # Mounted Tree
//!
//! Live counterpart of [`NavNode`]: the same shape, but every node is a
//! component wired to the root's selection and to its parent's relay.
//!
//! Nodes are addressed by *path*: the child index at each level, so
//! `[1, 0]` is the first child of the root's second child.

use std::rc::Rc;

use crate::core::item::NavItem;
use crate::core::node::NavNode;
use crate::core::render::{EntryKind, RenderedEntry};
use crate::core::selection::SelectionView;
use crate::core::sub_nav::SubNav;

/// Upward "select" callback. Each level hands one to its children.
pub type Relay = Rc<dyn Fn(&str)>;

/// A mounted node: either a leaf item or a group.
#[derive(Debug)]
pub enum MountedNode {
    Item(NavItem),
    Group(SubNav),
}

impl MountedNode {
    pub fn mount(node: NavNode, selection: SelectionView, on_select: Relay) -> Self {
        match node {
            NavNode::Item { name, label } => {
                MountedNode::Item(NavItem::mount(name, label, selection, on_select))
            }
            NavNode::Group {
                name,
                title,
                children,
            } => MountedNode::Group(SubNav::mount(name, title, children, &selection, on_select)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MountedNode::Item(item) => item.name(),
            MountedNode::Group(group) => group.name(),
        }
    }
}

/// First item named `name`, depth-first in render order.
pub fn find_item<'a>(nodes: &'a [MountedNode], name: &str) -> Option<&'a NavItem> {
    nodes.iter().find_map(|node| match node {
        MountedNode::Item(item) if item.name() == name => Some(item),
        MountedNode::Item(_) => None,
        MountedNode::Group(group) => find_item(group.children(), name),
    })
}

/// Node at `path`, if every index along it exists.
pub fn node_at<'a>(nodes: &'a [MountedNode], path: &[usize]) -> Option<&'a MountedNode> {
    let (first, rest) = path.split_first()?;
    let node = nodes.get(*first)?;
    match (rest.is_empty(), node) {
        (true, _) => Some(node),
        (false, MountedNode::Group(group)) => node_at(group.children(), rest),
        (false, MountedNode::Item(_)) => None,
    }
}

/// Group at `path`, mutably.
pub fn group_at_mut<'a>(nodes: &'a mut [MountedNode], path: &[usize]) -> Option<&'a mut SubNav> {
    let (first, rest) = path.split_first()?;
    match nodes.get_mut(*first)? {
        MountedNode::Group(group) => {
            if rest.is_empty() {
                Some(group)
            } else {
                group_at_mut(group.children_mut(), rest)
            }
        }
        MountedNode::Item(_) => None,
    }
}

/// Flatten the tree into render entries, in render order.
///
/// Group titles come before their children. Children of a closed group are
/// still emitted, marked invisible.
pub fn render_entries(nodes: &[MountedNode]) -> Vec<RenderedEntry> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    render_into(nodes, 0, true, &mut path, &mut entries);
    entries
}

fn render_into(
    nodes: &[MountedNode],
    depth: usize,
    visible: bool,
    path: &mut Vec<usize>,
    out: &mut Vec<RenderedEntry>,
) {
    for (index, node) in nodes.iter().enumerate() {
        path.push(index);
        match node {
            MountedNode::Item(item) => out.push(RenderedEntry {
                name: item.name().to_string(),
                label: item.label().to_string(),
                kind: EntryKind::Item,
                depth,
                path: path.clone(),
                active: item.is_active(),
                visible,
            }),
            MountedNode::Group(group) => {
                out.push(RenderedEntry {
                    name: group.name().to_string(),
                    label: group.title().to_string(),
                    kind: EntryKind::Group { open: group.is_open() },
                    depth,
                    path: path.clone(),
                    active: false,
                    visible,
                });
                render_into(
                    group.children(),
                    depth + 1,
                    visible && group.is_open(),
                    path,
                    out,
                );
            }
        }
        path.pop();
    }
}
