//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the committed
//! nav tree, and translates keyboard/mouse events into `Nav` interactions.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Owning the Selection
//!
//! The adapter plays the part of the nav's owner. The root never selects
//! anything by itself; it notifies, and the loop below answers every
//! notification with `Nav::set_selected`. Notifications arrive through a
//! channel because the listener cannot borrow the nav it is attached to.
//!
//! ## Redraw Strategy
//!
//! The loop flushes pending nav updates with `Nav::tick` before drawing,
//! and only draws when an event, a notification, or a flush changed
//! something. Idle, it waits up to 250ms for input. Terminal polling is
//! blocking I/O, so it runs on tokio's blocking pool.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::config::ResolvedConfig;
use crate::core::nav::Nav;
use crate::tui::component::EventHandler;
use crate::tui::components::{NavBarEvent, NavBarState};
use crate::tui::event::{TuiEvent, poll_events};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of the nav itself)
pub struct TuiState {
    pub nav_bar: NavBarState,
    /// Payload of the most recent selection-changed notification
    pub last_notification: Option<String>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            nav_bar: NavBarState::new(),
            last_notification: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Mount the configured menu with a listener that forwards every
/// selection-changed notification into `sender`.
pub fn mount_nav(config: &ResolvedConfig, sender: mpsc::Sender<String>) -> Nav {
    Nav::builder()
        .selected(config.selected.clone())
        .children(config.menu.clone())
        .on_selection_changed(move |name| {
            if sender.send(name.to_string()).is_err() {
                warn!("Failed to forward selection '{}': receiver dropped", name);
            }
        })
        .mount()
}

/// Route a nav bar event to the nav.
fn apply(nav: &mut Nav, event: NavBarEvent) {
    match event {
        NavBarEvent::Activate(path) => nav.activate(&path),
        NavBarEvent::SetOpen(path, open) => nav.set_open(&path, open),
    }
}

/// Feed a batch of input events to the nav bar. Returns true on quit.
fn handle_events(nav: &mut Nav, tui: &mut TuiState, events: Vec<TuiEvent>) -> bool {
    let mut should_quit = false;
    for event in events {
        match event {
            TuiEvent::Quit => should_quit = true,
            // Resize just needs a redraw
            TuiEvent::Resize => {}
            other => {
                if let Some(nav_event) = tui.nav_bar.handle_event(&other) {
                    apply(nav, nav_event);
                }
            }
        }
    }
    should_quit
}

/// Accept every pending selection request. Returns true if any arrived.
fn accept_selections(nav: &mut Nav, tui: &mut TuiState, rx: &mpsc::Receiver<String>) -> bool {
    let mut received = false;
    while let Ok(name) = rx.try_recv() {
        debug!("Owner accepting selection '{}'", name);
        nav.set_selected(name.clone());
        tui.last_notification = Some(name);
        received = true;
    }
    received
}

pub async fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut nav = mount_nav(&config, tx);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if nav.has_pending_update() {
            nav.tick().await;
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &nav, &mut tui))?;
            needs_redraw = false;
        }

        let events = match tokio::task::spawn_blocking(|| poll_events(IDLE_POLL)).await {
            Ok(events) => events,
            Err(e) => {
                warn!("Event polling task failed: {}", e);
                Vec::new()
            }
        };
        if !events.is_empty() {
            needs_redraw = true;
        }

        // Process every drained event before the next draw
        let should_quit = handle_events(&mut nav, &mut tui, events);

        if should_quit {
            break;
        }

        if accept_selections(&mut nav, &mut tui, &rx) {
            needs_redraw = true;
        }
    }

    nav.unmount();
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{NavtreeConfig, resolve};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn config() -> ResolvedConfig {
        resolve(&NavtreeConfig::default(), Some("home"))
    }

    #[tokio::test]
    async fn test_owner_loop_accepts_clicked_selection() {
        let (tx, rx) = mpsc::channel();
        let mut nav = mount_nav(&config(), tx);
        let mut tui = TuiState::new();
        nav.tick().await;

        nav.find_item("developers").unwrap().click();
        assert_eq!(nav.selected(), "home");

        assert!(accept_selections(&mut nav, &mut tui, &rx));
        assert_eq!(nav.selected(), "developers");
        assert_eq!(tui.last_notification.as_deref(), Some("developers"));

        // Rendered output follows on the next flush
        assert_eq!(nav.rendered().active_names(), vec!["home"]);
        nav.tick().await;
        assert_eq!(nav.rendered().active_names(), vec!["developers"]);
    }

    #[tokio::test]
    async fn test_apply_routes_nav_bar_events() {
        let (tx, rx) = mpsc::channel();
        let mut nav = mount_nav(&config(), tx);
        nav.tick().await;

        apply(&mut nav, NavBarEvent::SetOpen(vec![1], true));
        nav.tick().await;
        assert!(nav.rendered().find("culture").unwrap().visible);

        apply(&mut nav, NavBarEvent::Activate(vec![1, 0]));
        assert_eq!(rx.try_recv().ok().as_deref(), Some("culture"));
    }

    fn draw(nav: &Nav, tui: &mut TuiState) {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| ui::draw_ui(f, nav, tui)).unwrap();
    }

    #[tokio::test]
    async fn test_handle_events_routes_batch_and_reports_quit() {
        let (tx, rx) = mpsc::channel();
        let mut nav = mount_nav(&config(), tx);
        let mut tui = TuiState::new();
        nav.tick().await;
        draw(&nav, &mut tui);

        // Focus starts on "home"; move to "about" and open it
        let quit = handle_events(
            &mut nav,
            &mut tui,
            vec![TuiEvent::CursorDown, TuiEvent::Expand, TuiEvent::Resize],
        );
        assert!(!quit);
        nav.tick().await;
        assert!(nav.rendered().find("culture").unwrap().visible);
        assert!(rx.try_recv().is_err());

        // Rows now include the children; focus "culture" and click it
        draw(&nav, &mut tui);
        let quit = handle_events(&mut nav, &mut tui, vec![TuiEvent::CursorDown, TuiEvent::Activate]);
        assert!(!quit);
        assert_eq!(rx.try_recv().ok().as_deref(), Some("culture"));

        assert!(handle_events(&mut nav, &mut tui, vec![TuiEvent::Quit]));
    }

    #[test]
    fn test_no_notifications_means_no_change() {
        let (tx, rx) = mpsc::channel();
        let mut nav = mount_nav(&config(), tx);
        let mut tui = TuiState::new();
        assert!(!accept_selections(&mut nav, &mut tui, &rx));
        assert!(tui.last_notification.is_none());
    }
}
