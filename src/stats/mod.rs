//! Statistics calculator
//!
//! Aggregate counts over the canonical roster. Statistics are always computed
//! from the full roster, never from the filtered view, so an active search
//! does not change them.

use serde::{Deserialize, Serialize};

use crate::models::Participant;

/// Aggregate attendance figures for the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total: usize,
    pub attended: usize,
    /// Attendance percentage, rounded to the nearest integer; 0 for an empty roster
    pub rate: u8,
}

/// Compute statistics for a roster
pub fn compute(roster: &[Participant]) -> Statistics {
    let total = roster.len();
    let attended = roster.iter().filter(|p| p.attended).count();
    let rate = if total > 0 {
        (attended as f64 / total as f64 * 100.0).round() as u8
    } else {
        0
    };

    Statistics { total, attended, rate }
}
