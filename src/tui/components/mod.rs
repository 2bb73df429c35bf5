//! # TUI Components
//!
//! UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top status bar showing the selection and last notification
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NavBar`: Sidebar view of the committed nav tree, with focus and
//!   mouse hit testing
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into the
//! `Nav`. The nav bar gets the committed `RenderedNav`, never the live tree,
//! so what is drawn always matches the last flush.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! NavBar::new(nav.rendered(), &mut tui.nav_bar).render(frame, area);
//!
//! // Bad: Hidden dependency on live state
//! NavBar::new(&nav, ...).render(frame, area);
//! ```

pub mod nav_bar;
mod title_bar;

pub use nav_bar::{NavBar, NavBarEvent, NavBarState};
pub use title_bar::TitleBar;
