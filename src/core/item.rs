//! # NavItem
//!
//! Leaf of the navigation tree. Holds no mutable state: whether it is
//! active is derived from the root's selection every time it is asked,
//! and a click only emits its name upward.

use log::debug;

use crate::core::selection::SelectionView;
use crate::core::tree::Relay;

/// A mounted, selectable navigation entry.
pub struct NavItem {
    name: String,
    label: String,
    selection: SelectionView,
    on_select: Relay,
}

impl NavItem {
    /// Mount an item under a parent that provides the selection view and
    /// the callback to signal a selection request.
    pub fn mount(
        name: impl Into<String>,
        label: impl Into<String>,
        selection: SelectionView,
        on_select: Relay,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            selection,
            on_select,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Live comparison against the root's current selection.
    pub fn is_active(&self) -> bool {
        self.selection.matches(&self.name)
    }

    /// Signal "select me" to the parent. Changes nothing locally.
    pub fn click(&self) {
        debug!("Nav item '{}' clicked", self.name);
        (self.on_select)(&self.name);
    }
}

impl std::fmt::Debug for NavItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavItem")
            .field("name", &self.name)
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
