//! Roster store module
//!
//! Owns the canonical participant list and the currently active filtered view.

pub mod roster;

pub use roster::RosterStore;
