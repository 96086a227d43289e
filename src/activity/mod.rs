//! Activity log
//!
//! A bounded, most-recent-first record of operator actions, independent of the
//! roster. Append-only: entries are never removed individually, the only
//! shrinkage mechanism is the cap, and the log is cleared only by process
//! restart.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{ActivityCategory, ActivityRecord, Severity};

/// Maximum number of retained activity entries
pub const ACTIVITY_CAP: usize = 50;

/// Bounded most-recent-first log of operator actions
#[derive(Debug, Default)]
pub struct ActivityLog {
    entries: VecDeque<ActivityRecord>,
}

impl ActivityLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a new record, dropping the oldest entries beyond the cap
    pub fn record(
        &mut self,
        category: ActivityCategory,
        description: impl Into<String>,
        severity: Severity,
    ) {
        let record = ActivityRecord::new(category, description, severity);
        debug!(
            category = %record.category,
            severity = %record.severity,
            description = %record.description,
            "Activity recorded"
        );

        self.entries.push_front(record);
        self.entries.truncate(ACTIVITY_CAP);
    }

    /// Entries in most-recent-first order
    pub fn entries(&self) -> impl Iterator<Item = &ActivityRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_first() {
        let mut log = ActivityLog::new();
        log.record(ActivityCategory::Search, "first", Severity::Info);
        log.record(ActivityCategory::Edit, "second", Severity::Info);

        let descriptions: Vec<_> = log.entries().map(|r| r.description.as_str()).collect();
        assert_eq!(descriptions, vec!["second", "first"]);
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut log = ActivityLog::new();
        for i in 0..ACTIVITY_CAP + 1 {
            log.record(ActivityCategory::Attendance, format!("entry {}", i), Severity::Info);
        }

        assert_eq!(log.len(), ACTIVITY_CAP);
        // the 51st record is at the front, the very first one is gone
        assert_eq!(log.entries().next().unwrap().description, "entry 50");
        assert!(log.entries().all(|r| r.description != "entry 0"));
    }

    #[test]
    fn test_empty_log() {
        let log = ActivityLog::new();
        assert!(log.is_empty());
        assert_eq!(log.entries().count(), 0);
    }
}
