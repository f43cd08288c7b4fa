//! Domain state types for the vpnpick application.
//!
//! This module contains all core state types separated by domain:
//! - `profile`: protocol tags and profile handles
//! - `menu`: per-menu selection state and lifecycle
//! - `search`: query being typed in the search modal

mod menu;
mod profile;
mod search;

// Re-export all types for easy access
pub use menu::{MenuPhase, MenuState};
pub use profile::{ProfileRef, Protocol};
pub use search::{SearchInput, SearchStep};
