//! Headless model for a user-list screen with swipe-style row actions.
//!
//! The crate keeps the roster state, describes the actions available on each
//! row, and applies them, leaving rendering and gesture handling to the host.

pub mod config;
mod error;
mod screen;

pub use config::{load_config, load_config_from, RosterEntry, ScreenConfig, UiConfig};
pub use error::RosterError;
pub use screen::action::{Accent, ActionStyle, RowAction, RowActionKind, RowUpdate};
pub use screen::dispatch::{actions_for, apply};
pub use screen::state::{Roster, User};
