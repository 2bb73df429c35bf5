//! # Selection State
//!
//! The single "which entry is active" value, owned by the root `Nav`.
//!
//! ```text
//! SelectionState (root, one writer)
//!        │ watch channel
//!        ├──▶ SelectionView (NavItem "home")
//!        ├──▶ SelectionView (SubNav "about") ──▶ children...
//!        └──▶ SelectionView (...)
//! ```
//!
//! Descendants never receive a copy of the string. They hold a
//! `SelectionView`, a read-only handle onto the live value, so a
//! replacement by the root is visible everywhere the moment it happens.

use tokio::sync::watch;

/// Writable side of the selection. Only the root holds one.
#[derive(Debug)]
pub struct SelectionState {
    tx: watch::Sender<String>,
}

impl SelectionState {
    pub fn new(initial: impl Into<String>) -> Self {
        let (tx, _rx) = watch::channel(initial.into());
        Self { tx }
    }

    /// Hand out a read-only view onto the live value.
    pub fn view(&self) -> SelectionView {
        SelectionView {
            rx: self.tx.subscribe(),
        }
    }

    /// Replace the selection, returning the previous value.
    pub fn replace(&self, selected: impl Into<String>) -> String {
        self.tx.send_replace(selected.into())
    }

    pub fn current(&self) -> String {
        self.tx.borrow().clone()
    }
}

/// Read-only handle on the root's selection.
///
/// Cloning a view is how a container forwards the selection to its
/// children: every clone observes the same value.
#[derive(Debug, Clone)]
pub struct SelectionView {
    rx: watch::Receiver<String>,
}

impl SelectionView {
    pub fn current(&self) -> String {
        self.rx.borrow().clone()
    }

    /// True when `name` is the current selection. An empty selection
    /// matches nothing.
    pub fn matches(&self, name: &str) -> bool {
        let selected = self.rx.borrow();
        !selected.is_empty() && *selected == name
    }
}
