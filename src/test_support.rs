//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::node::NavNode;
use crate::core::tree::Relay;

/// Records every identifier delivered to a selection callback.
#[derive(Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<String>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener suitable for `NavBuilder::on_selection_changed`.
    pub fn listener(&self) -> impl Fn(&str) + 'static {
        let calls = self.calls.clone();
        move |name: &str| calls.borrow_mut().push(name.to_string())
    }

    /// The same recorder as a relay, for mounting components directly.
    pub fn relay(&self) -> Relay {
        Rc::new(self.listener())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

/// `home`, plus `about` holding `culture`.
pub fn scenario_a() -> Vec<NavNode> {
    vec![
        NavNode::item("home", "首页"),
        NavNode::group("about", "关于").child(NavNode::item("culture", "企业文化")),
    ]
}

/// Scenario A with `developers` added to `about`.
pub fn scenario_b() -> Vec<NavNode> {
    vec![
        NavNode::item("home", "首页"),
        NavNode::group("about", "关于").children([
            NavNode::item("culture", "企业文化"),
            NavNode::item("developers", "开发团队"),
        ]),
    ]
}
