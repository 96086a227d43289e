//! rollcall
//!
//! An event roster management core. This library provides modular components
//! for loading a participant roster from a data file, searching and editing
//! it, tracking attendance, keeping a bounded activity history, and deriving
//! running statistics — everything a check-in front end needs behind a single
//! service boundary.

pub mod activity;
pub mod config;
pub mod loader;
pub mod models;
pub mod prefs;
pub mod search;
pub mod services;
pub mod stats;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, RollcallError};

// Re-export main components for easy access
pub use activity::ActivityLog;
pub use loader::RosterLoader;
pub use prefs::{PreferencesStore, Theme};
pub use search::SearchFilter;
pub use services::RosterService;
pub use stats::Statistics;
pub use store::RosterStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
