//! # TitleBar Component
//!
//! Top status bar showing the current selection and the last
//! "selection changed" notification.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(nav.selected(), tui.last_notification.clone());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Notification seen**: `"navtree (selected: home) | clicked: developers"`
//! 2. **Nothing selected**: `"navtree (no selection)"`
//! 3. **Default**: `"navtree (selected: home)"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar.
///
/// # Props
///
/// - `selected`: The root's current `selected` value
/// - `last_notification`: Payload of the most recent selection-changed event
pub struct TitleBar {
    pub selected: String,
    pub last_notification: Option<String>,
}

impl TitleBar {
    pub fn new(selected: String, last_notification: Option<String>) -> Self {
        Self {
            selected,
            last_notification,
        }
    }

    fn title_text(&self) -> String {
        let head = if self.selected.is_empty() {
            "navtree (no selection)".to_string()
        } else {
            format!("navtree (selected: {})", self.selected)
        };
        match &self.last_notification {
            Some(name) => format!("{} | clicked: {}", head, name),
            None => head,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.title_text()), area);
    }
}
