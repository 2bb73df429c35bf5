//! # NavBar Component
//!
//! Sidebar drawing of a `Nav`'s committed output.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `NavBarState` lives in `TuiState` (focus, list scroll, hit-test cache)
//! - `NavBar` is created each frame with the borrowed `RenderedNav` and state
//!
//! The bar only ever draws what the nav has committed. Interaction is
//! reported upward as tree paths; the caller forwards those to
//! `Nav::activate` / `Nav::set_open` and the result shows up after the next
//! flush.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::render::{EntryKind, RenderedEntry, RenderedNav};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const ACTIVE_MARKER: &str = "● ";
const INACTIVE_MARKER: &str = "  ";
const OPEN_MARKER: &str = "▾ ";
const CLOSED_MARKER: &str = "▸ ";
const INDENT: &str = "  ";

/// Events emitted by the nav bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavBarEvent {
    /// Click the item / toggle the group at this path
    Activate(Vec<usize>),
    /// Expand or collapse the group at this path
    SetOpen(Vec<usize>, bool),
}

/// What a visible row points at. Rebuilt on every render.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowTarget {
    path: Vec<usize>,
    open: Option<bool>, // None for items
}

/// Persistent state for the nav bar.
#[derive(Debug, Default)]
pub struct NavBarState {
    pub focused: usize,
    pub list_state: ListState,
    rows: Vec<RowTarget>,
    area: Rect,
}

impl NavBarState {
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_row(&self) -> Option<&RowTarget> {
        self.rows.get(self.focused)
    }

    /// Map a screen position to a row index, if it lands on one.
    fn row_at(&self, col: u16, row: u16) -> Option<usize> {
        // Skip the border on every side
        let inner = self.area.inner(ratatui::layout::Margin::new(1, 1));
        if !inner.contains(Position::new(col, row)) {
            return None;
        }
        let index = (row - inner.y) as usize + self.list_state.offset();
        (index < self.rows.len()).then_some(index)
    }

    fn clamp_focus(&mut self) {
        if self.rows.is_empty() {
            self.focused = 0;
            self.list_state.select(None);
        } else {
            self.focused = self.focused.min(self.rows.len() - 1);
            self.list_state.select(Some(self.focused));
        }
    }
}

impl EventHandler for NavBarState {
    type Event = NavBarEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<NavBarEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.focused = self.focused.saturating_sub(1);
                self.clamp_focus();
                None
            }
            TuiEvent::CursorDown => {
                self.focused = self.focused.saturating_add(1);
                self.clamp_focus();
                None
            }
            TuiEvent::Activate => self
                .focused_row()
                .map(|row| NavBarEvent::Activate(row.path.clone())),
            TuiEvent::Expand => self.focused_row().and_then(|row| match row.open {
                Some(false) => Some(NavBarEvent::SetOpen(row.path.clone(), true)),
                _ => None,
            }),
            TuiEvent::Collapse => self.focused_row().and_then(|row| match row.open {
                Some(true) => Some(NavBarEvent::SetOpen(row.path.clone(), false)),
                _ => None,
            }),
            TuiEvent::MouseClick(col, row) => {
                let index = self.row_at(*col, *row)?;
                self.focused = index;
                self.list_state.select(Some(index));
                Some(NavBarEvent::Activate(self.rows[index].path.clone()))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the nav bar.
pub struct NavBar<'a> {
    rendered: &'a RenderedNav,
    state: &'a mut NavBarState,
}

impl<'a> NavBar<'a> {
    pub fn new(rendered: &'a RenderedNav, state: &'a mut NavBarState) -> Self {
        Self { rendered, state }
    }
}

impl Component for NavBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Navigation ");

        let label_width = area.width.saturating_sub(2) as usize;
        let visible: Vec<&RenderedEntry> = self.rendered.visible().collect();

        self.state.rows = visible
            .iter()
            .map(|entry| RowTarget {
                path: entry.path.clone(),
                open: match entry.kind {
                    EntryKind::Item => None,
                    EntryKind::Group { open } => Some(open),
                },
            })
            .collect();
        self.state.area = area;
        self.state.clamp_focus();

        let items: Vec<ListItem> = visible
            .iter()
            .map(|entry| ListItem::new(entry_line(entry, label_width)))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn entry_line(entry: &RenderedEntry, width: usize) -> Line<'static> {
    let marker = match entry.kind {
        EntryKind::Item if entry.active => ACTIVE_MARKER,
        EntryKind::Item => INACTIVE_MARKER,
        EntryKind::Group { open: true } => OPEN_MARKER,
        EntryKind::Group { open: false } => CLOSED_MARKER,
    };
    let prefix = format!("{}{}", INDENT.repeat(entry.depth), marker);
    let label = truncate_to_width(&entry.label, width.saturating_sub(prefix.width()));

    let style = match entry.kind {
        EntryKind::Item if entry.active => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        EntryKind::Item => Style::default().fg(Color::Gray),
        EntryKind::Group { .. } => Style::default().fg(Color::White),
    };

    Line::from(vec![Span::styled(prefix, style), Span::styled(label, style)])
}

/// Truncate to `max_width` display columns, adding "…" if cut.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
