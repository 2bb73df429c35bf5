//! # Rendered Output
//!
//! What a `Nav` has committed for display: a flat list of entries, one per
//! item and one per group title. This is the layer inspected by tests and
//! drawn by UI adapters, so it only changes when the root flushes a
//! pending update (see [`crate::core::nav::Nav::tick`]).
//!
//! Each entry carries its identifier (`data-name`) and a set of classes.
//! An item whose name matched the selection at commit time has the
//! `active` class.

use serde::Serialize;

pub const ITEM_CLASS: &str = "nav-item";
pub const GROUP_CLASS: &str = "sub-nav";
pub const ACTIVE_CLASS: &str = "active";
pub const OPEN_CLASS: &str = "open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EntryKind {
    Item,
    Group { open: bool },
}

/// One committed line of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEntry {
    /// Identifier, exposed as `data-name`
    #[serde(rename = "data-name")]
    pub name: String,
    /// Item label or group title
    pub label: String,
    #[serde(flatten)]
    pub kind: EntryKind,
    /// Number of enclosing groups
    pub depth: usize,
    /// Child index at each level from the root
    pub path: Vec<usize>,
    pub active: bool,
    /// False when any enclosing group is collapsed
    pub visible: bool,
}

impl RenderedEntry {
    pub fn data_name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        match self.kind {
            EntryKind::Item => classes.push(ITEM_CLASS),
            EntryKind::Group { open } => {
                classes.push(GROUP_CLASS);
                if open {
                    classes.push(OPEN_CLASS);
                }
            }
        }
        if self.active {
            classes.push(ACTIVE_CLASS);
        }
        classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| *c == class)
    }
}

/// The committed render tree. Empty until the first flush after mount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedNav {
    pub entries: Vec<RenderedEntry>,
}

impl RenderedNav {
    pub fn new(entries: Vec<RenderedEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry with this `data-name`, in render order.
    pub fn find(&self, name: &str) -> Option<&RenderedEntry> {
        self.entries.iter().find(|entry| entry.data_name() == name)
    }

    /// First entry with this `data-name` that also has the `active` class.
    pub fn find_active(&self, name: &str) -> Option<&RenderedEntry> {
        self.entries
            .iter()
            .find(|entry| entry.data_name() == name && entry.active)
    }

    /// Names of every entry carrying the `active` class.
    pub fn active_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    /// Entries not hidden by a collapsed group.
    pub fn visible(&self) -> impl Iterator<Item = &RenderedEntry> {
        self.entries.iter().filter(|entry| entry.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kind: EntryKind, active: bool, visible: bool) -> RenderedEntry {
        RenderedEntry {
            name: name.to_string(),
            label: name.to_uppercase(),
            kind,
            depth: 0,
            path: vec![0],
            active,
            visible,
        }
    }

    #[test]
    fn test_classes() {
        let item = entry("home", EntryKind::Item, true, true);
        assert_eq!(item.classes(), vec![ITEM_CLASS, ACTIVE_CLASS]);
        assert!(item.has_class("active"));

        let closed = entry("about", EntryKind::Group { open: false }, false, true);
        assert_eq!(closed.classes(), vec![GROUP_CLASS]);

        let open = entry("about", EntryKind::Group { open: true }, false, true);
        assert!(open.has_class(OPEN_CLASS));
        assert!(!open.has_class(ACTIVE_CLASS));
    }

    #[test]
    fn test_find_and_active_queries() {
        let nav = RenderedNav::new(vec![
            entry("home", EntryKind::Item, true, true),
            entry("about", EntryKind::Group { open: false }, false, true),
            entry("culture", EntryKind::Item, false, false),
        ]);

        assert_eq!(nav.find("culture").map(RenderedEntry::data_name), Some("culture"));
        assert!(nav.find_active("home").is_some());
        assert!(nav.find_active("culture").is_none());
        assert_eq!(nav.active_names(), vec!["home"]);
        assert_eq!(nav.visible().count(), 2);
    }

    #[test]
    fn test_serializes_with_data_name() {
        let nav = RenderedNav::new(vec![
            entry("home", EntryKind::Item, true, true),
            entry("about", EntryKind::Group { open: true }, false, true),
        ]);
        let json = serde_json::to_value(&nav).unwrap();

        assert_eq!(json["entries"][0]["data-name"], "home");
        assert_eq!(json["entries"][0]["kind"], "item");
        assert_eq!(json["entries"][0]["active"], true);
        assert_eq!(json["entries"][1]["kind"], "group");
        assert_eq!(json["entries"][1]["open"], true);
    }
}
