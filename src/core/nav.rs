//! # Nav (root)
//!
//! Owns the selection and closes the loop between the tree and whoever
//! embeds it.
//!
//! ```text
//!             owner
//!   selected   │   ▲ selection changed(name)
//!              ▼   │
//!          ┌─────────┐
//!          │   Nav   │   SelectionState (one writer)
//!          └─────────┘
//!   view       │   ▲ relay(name)
//!              ▼   │
//!        NavItem / SubNav ...
//! ```
//!
//! ## One-way data flow
//!
//! A click anywhere in the tree reaches the listener synchronously, but the
//! root does *not* select the clicked item itself. The owner decides, and
//! calls [`Nav::set_selected`] if it agrees.
//!
//! ## Two-phase update
//!
//! State changes (mount, `set_selected`, group toggles) take effect
//! immediately on the live components, but the committed [`RenderedNav`]
//! only catches up on the next [`Nav::tick`]. Anything inspecting rendered
//! output has to await a tick first.

use log::{debug, info};
use std::rc::Rc;

use crate::core::item::NavItem;
use crate::core::node::NavNode;
use crate::core::render::RenderedNav;
use crate::core::selection::SelectionState;
use crate::core::tree::{self, MountedNode, Relay};

type Listener = Box<dyn Fn(&str)>;

/// Declarative description of a root, ready to mount.
///
/// ```rust,ignore
/// let nav = Nav::builder()
///     .selected("home")
///     .child(NavNode::item("home", "Home"))
///     .on_selection_changed(|name| println!("selected {name}"))
///     .mount();
/// ```
#[derive(Default)]
pub struct NavBuilder {
    selected: String,
    children: Vec<NavNode>,
    listener: Option<Listener>,
}

impl NavBuilder {
    pub fn selected(mut self, selected: impl Into<String>) -> Self {
        self.selected = selected.into();
        self
    }

    pub fn child(mut self, node: NavNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = NavNode>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Listener for the "selection changed" notification. Without one,
    /// clicks are relayed to the root and dropped there.
    pub fn on_selection_changed(mut self, listener: impl Fn(&str) + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    /// Mount the tree. The first render is scheduled, not committed.
    pub fn mount(self) -> Nav {
        let selection = SelectionState::new(self.selected);
        let root_relay = notify_owner(self.listener);
        let view = selection.view();
        let children: Vec<MountedNode> = self
            .children
            .into_iter()
            .map(|child| MountedNode::mount(child, view.clone(), root_relay.clone()))
            .collect();

        info!(
            "Mounted nav with {} top-level entries, selected '{}'",
            children.len(),
            selection.current()
        );

        Nav {
            selection,
            children,
            rendered: RenderedNav::default(),
            pending: true,
        }
    }
}

/// The relay at the top of the chain: turns a relayed select into the
/// externally visible notification, payload untouched.
fn notify_owner(listener: Option<Listener>) -> Relay {
    Rc::new(move |name: &str| {
        debug!("Nav emitting selection changed '{}'", name);
        match &listener {
            Some(listener) => listener(name),
            None => debug!("No selection listener, dropping '{}'", name),
        }
    })
}

/// A mounted navigation root.
pub struct Nav {
    selection: SelectionState,
    children: Vec<MountedNode>,
    rendered: RenderedNav,
    pending: bool,
}

impl Nav {
    pub fn builder() -> NavBuilder {
        NavBuilder::default()
    }

    /// The current `selected` prop.
    pub fn selected(&self) -> String {
        self.selection.current()
    }

    /// Supply a new `selected` value. Live components see it at once;
    /// rendered output updates on the next tick.
    pub fn set_selected(&mut self, selected: impl Into<String>) {
        let selected = selected.into();
        let previous = self.selection.replace(selected.clone());
        if previous != selected {
            debug!("Nav selected '{}' -> '{}'", previous, selected);
            self.schedule();
        }
    }

    pub fn children(&self) -> &[MountedNode] {
        &self.children
    }

    /// First item with this name, in render order.
    pub fn find_item(&self, name: &str) -> Option<&NavItem> {
        tree::find_item(&self.children, name)
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&MountedNode> {
        tree::node_at(&self.children, path)
    }

    /// Interact with the node at `path`: click an item, toggle a group.
    /// Unknown paths are ignored.
    pub fn activate(&mut self, path: &[usize]) {
        match tree::node_at(&self.children, path) {
            Some(MountedNode::Item(item)) => item.click(),
            Some(MountedNode::Group(_)) => {
                if let Some(group) = tree::group_at_mut(&mut self.children, path) {
                    group.toggle();
                    self.schedule();
                }
            }
            None => debug!("Ignoring activation of unknown path {:?}", path),
        }
    }

    /// Expand or collapse the group at `path`.
    pub fn set_open(&mut self, path: &[usize], open: bool) {
        if let Some(group) = tree::group_at_mut(&mut self.children, path)
            && group.is_open() != open
        {
            group.set_open(open);
            self.schedule();
        }
    }

    /// Output as of the last flush.
    pub fn rendered(&self) -> &RenderedNav {
        &self.rendered
    }

    pub fn has_pending_update(&self) -> bool {
        self.pending
    }

    /// Update-cycle flush: yield once to the runtime, then commit any
    /// pending change to the rendered output.
    pub async fn tick(&mut self) {
        tokio::task::yield_now().await;
        if self.pending {
            self.commit();
        }
    }

    fn schedule(&mut self) {
        self.pending = true;
    }

    fn commit(&mut self) {
        self.rendered = RenderedNav::new(tree::render_entries(&self.children));
        self.pending = false;
        debug!(
            "Nav committed {} entries, active: {:?}",
            self.rendered.entries.len(),
            self.rendered.active_names()
        );
    }

    /// Tear the tree down. A pending update is discarded, not flushed.
    pub fn unmount(self) {
        if self.pending {
            debug!("Discarding pending nav update on unmount");
        }
        info!("Unmounted nav");
    }
}

impl std::fmt::Debug for Nav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Nav")
            .field("selected", &self.selection.current())
            .field("children", &self.children)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Recorder, scenario_a, scenario_b};
    use tokio_test::block_on;

    fn mount(selected: &str, children: Vec<NavNode>, recorder: &Recorder) -> Nav {
        Nav::builder()
            .selected(selected)
            .children(children)
            .on_selection_changed(recorder.listener())
            .mount()
    }

    #[test]
    fn test_initial_render_waits_for_tick() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_a(), &recorder);

        assert!(nav.has_pending_update());
        assert!(nav.rendered().is_empty());

        block_on(nav.tick());

        assert!(!nav.has_pending_update());
        assert!(nav.rendered().find_active("home").is_some());
        assert!(nav.rendered().find_active("culture").is_none());
    }

    #[test]
    fn test_click_notifies_without_selecting() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_b(), &recorder);
        block_on(nav.tick());

        nav.find_item("developers").expect("developers").click();

        assert_eq!(recorder.calls(), vec!["developers"]);
        assert_eq!(nav.selected(), "home");
        assert!(!nav.has_pending_update());
        assert_eq!(nav.rendered().active_names(), vec!["home"]);
    }

    #[test]
    fn test_set_selected_is_live_but_rendered_lags() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_b(), &recorder);
        block_on(nav.tick());

        nav.set_selected("culture");

        assert!(nav.find_item("culture").unwrap().is_active());
        assert!(!nav.find_item("home").unwrap().is_active());
        assert_eq!(nav.rendered().active_names(), vec!["home"]);

        block_on(nav.tick());
        assert_eq!(nav.rendered().active_names(), vec!["culture"]);
    }

    #[test]
    fn test_set_same_selected_schedules_nothing() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_a(), &recorder);
        block_on(nav.tick());

        nav.set_selected("home");
        assert!(!nav.has_pending_update());
    }

    #[test]
    fn test_missing_selected_renders_nothing_active() {
        let recorder = Recorder::new();
        let mut nav = Nav::builder()
            .children(scenario_b())
            .on_selection_changed(recorder.listener())
            .mount();
        block_on(nav.tick());

        assert_eq!(nav.selected(), "");
        assert!(nav.rendered().active_names().is_empty());
    }

    #[test]
    fn test_unknown_selected_renders_nothing_active() {
        let recorder = Recorder::new();
        let mut nav = mount("nowhere", scenario_b(), &recorder);
        block_on(nav.tick());
        assert!(nav.rendered().active_names().is_empty());
    }

    #[test]
    fn test_activate_clicks_items_and_toggles_groups() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_b(), &recorder);
        block_on(nav.tick());

        nav.activate(&[1]);
        assert!(nav.has_pending_update());
        block_on(nav.tick());
        assert!(nav.rendered().find("culture").unwrap().visible);

        nav.activate(&[1, 0]);
        assert_eq!(recorder.calls(), vec!["culture"]);

        nav.activate(&[7, 7]);
        assert_eq!(recorder.calls(), vec!["culture"]);
    }

    #[test]
    fn test_set_open_only_schedules_on_change() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_b(), &recorder);
        block_on(nav.tick());

        nav.set_open(&[1], false);
        assert!(!nav.has_pending_update());
        nav.set_open(&[1], true);
        assert!(nav.has_pending_update());
        // Items are not groups
        block_on(nav.tick());
        nav.set_open(&[0], true);
        assert!(!nav.has_pending_update());
    }

    #[test]
    fn test_without_listener_click_is_harmless() {
        let mut nav = Nav::builder().selected("home").children(scenario_b()).mount();
        block_on(nav.tick());
        nav.find_item("culture").unwrap().click();
        assert_eq!(nav.selected(), "home");
    }

    #[test]
    fn test_unmount_with_pending_update() {
        let recorder = Recorder::new();
        let mut nav = mount("home", scenario_a(), &recorder);
        nav.set_selected("culture");
        nav.unmount();
        assert!(recorder.calls().is_empty());
    }
}
