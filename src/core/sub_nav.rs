//! # SubNav
//!
//! Titled, collapsible group of navigation entries. A SubNav is pure
//! plumbing between its parent and its children:
//!
//! ```text
//!            parent
//!   selection │   ▲ on_select(name)
//!             ▼   │
//!         ┌───────────┐
//!         │  SubNav   │  relay: forwards name verbatim
//!         └───────────┘
//!   selection │   ▲ relay(name)
//!             ▼   │
//!     NavItem / SubNav children
//! ```
//!
//! It has no active state of its own. The `open` flag is a display
//! affordance only; collapsed children stay mounted and keep relaying.

use log::debug;
use std::rc::Rc;

use crate::core::node::NavNode;
use crate::core::selection::SelectionView;
use crate::core::tree::{MountedNode, Relay};

/// A mounted navigation group.
pub struct SubNav {
    name: String,
    title: String,
    open: bool,
    children: Vec<MountedNode>,
    relay: Relay,
}

impl SubNav {
    /// Mount a group and, recursively, its children.
    ///
    /// Every child receives a clone of `selection` unchanged, and the
    /// group's own relay, which hands whatever it gets straight to
    /// `on_select`.
    pub fn mount(
        name: impl Into<String>,
        title: impl Into<String>,
        children: Vec<NavNode>,
        selection: &SelectionView,
        on_select: Relay,
    ) -> Self {
        let name = name.into();
        let relay = relay_through(&name, on_select);
        let children = children
            .into_iter()
            .map(|child| MountedNode::mount(child, selection.clone(), relay.clone()))
            .collect();

        Self {
            name,
            title: title.into(),
            open: false,
            children,
            relay,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn children(&self) -> &[MountedNode] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [MountedNode] {
        &mut self.children
    }

    /// The callback this group hands to its children.
    pub fn relay(&self) -> Relay {
        self.relay.clone()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!(
            "Sub nav '{}' {}",
            self.name,
            if self.open { "expanded" } else { "collapsed" }
        );
    }
}

/// Wrap a parent's callback so that a group forwards a child's selection
/// request without touching the payload.
fn relay_through(group: &str, parent: Relay) -> Relay {
    let group = group.to_string();
    Rc::new(move |name: &str| {
        debug!("Sub nav '{}' relaying select '{}'", group, name);
        parent(name);
    })
}

impl std::fmt::Debug for SubNav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubNav")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("open", &self.open)
            .field("children", &self.children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::SelectionState;
    use crate::test_support::Recorder;

    fn about_group(selection: &SelectionView, recorder: &Recorder) -> SubNav {
        SubNav::mount(
            "about",
            "About",
            vec![
                NavNode::item("culture", "Culture"),
                NavNode::item("developers", "Developers"),
            ],
            selection,
            recorder.relay(),
        )
    }

    #[test]
    fn test_relays_child_click_verbatim() {
        let state = SelectionState::new("home");
        let recorder = Recorder::new();
        let group = about_group(&state.view(), &recorder);

        let MountedNode::Item(developers) = &group.children()[1] else {
            panic!("expected an item");
        };
        developers.click();

        assert_eq!(recorder.calls(), vec!["developers"]);
    }

    #[test]
    fn test_relay_callable_directly() {
        let state = SelectionState::new("");
        let recorder = Recorder::new();
        let group = about_group(&state.view(), &recorder);

        (group.relay())("anything at all");

        assert_eq!(recorder.calls(), vec!["anything at all"]);
    }

    #[test]
    fn test_forwards_selection_to_children() {
        let state = SelectionState::new("culture");
        let recorder = Recorder::new();
        let group = about_group(&state.view(), &recorder);

        let active: Vec<bool> = group
            .children()
            .iter()
            .map(|child| match child {
                MountedNode::Item(item) => item.is_active(),
                MountedNode::Group(_) => false,
            })
            .collect();
        assert_eq!(active, vec![true, false]);

        state.replace("developers");
        let MountedNode::Item(developers) = &group.children()[1] else {
            panic!("expected an item");
        };
        assert!(developers.is_active());
    }

    #[test]
    fn test_empty_group_relays_nothing() {
        let state = SelectionState::new("home");
        let recorder = Recorder::new();
        let group = SubNav::mount("empty", "Empty", Vec::new(), &state.view(), recorder.relay());

        assert!(group.children().is_empty());
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn test_toggle_does_not_affect_relay() {
        let state = SelectionState::new("");
        let recorder = Recorder::new();
        let mut group = about_group(&state.view(), &recorder);

        assert!(!group.is_open());
        group.toggle();
        assert!(group.is_open());
        group.toggle();
        assert!(!group.is_open());

        // Collapsed children still relay
        let MountedNode::Item(culture) = &group.children()[0] else {
            panic!("expected an item");
        };
        culture.click();
        assert_eq!(recorder.calls(), vec!["culture"]);
    }
}
