//! # Core Navigation Logic
//!
//! This module contains the navigation components themselves.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • NavNode (what)       │
//!                    │  • Nav / SubNav /       │
//!                    │    NavItem (live tree)  │
//!                    │  • RenderedNav (output) │
//!                    │                         │
//!                    │  No I/O. No UI.         │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │   --dump   │      │   Tests    │
//!     │  Adapter   │      │   (JSON)   │      │            │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `NavNode`, the declarative tree description
//! - [`selection`]: the root-owned selection and its read-only views
//! - [`item`], [`sub_nav`], [`nav`]: the mounted components
//! - [`tree`]: mounted node enum, relay type, traversal
//! - [`render`]: committed output with `data-name` and `active` markers
//! - [`config`]: TOML config and resolution

pub mod config;
pub mod item;
pub mod nav;
pub mod node;
pub mod render;
pub mod selection;
pub mod sub_nav;
pub mod tree;

pub use item::NavItem;
pub use nav::{Nav, NavBuilder};
pub use node::NavNode;
pub use render::{RenderedEntry, RenderedNav};
pub use sub_nav::SubNav;
