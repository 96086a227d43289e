//! Services module
//!
//! This module contains the service layer exposed to the presentation layer

pub mod export;
pub mod roster;

// Re-export commonly used services
pub use export::RosterSnapshot;
pub use roster::RosterService;
