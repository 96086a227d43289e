//! Export service
//!
//! Serializes the current roster and statistics into a JSON snapshot for
//! download or archival.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

use crate::models::Participant;
use crate::stats::Statistics;
use crate::utils::errors::Result;
use crate::utils::helpers::file_timestamp;

/// Snapshot of the roster state at export time
#[derive(Debug, Serialize)]
pub struct RosterSnapshot<'a> {
    pub generated_at: DateTime<Local>,
    pub statistics: Statistics,
    pub participants: &'a [Participant],
}

impl<'a> RosterSnapshot<'a> {
    /// Capture a snapshot of the full roster and its statistics
    pub fn capture(participants: &'a [Participant], statistics: Statistics) -> Self {
        Self {
            generated_at: Local::now(),
            statistics,
            participants,
        }
    }

    /// Render the snapshot as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the snapshot into the export directory, returning the file path
    pub async fn write_to(&self, directory: impl AsRef<Path>) -> Result<PathBuf> {
        let directory = directory.as_ref();
        tokio::fs::create_dir_all(directory).await?;

        let filename = format!("roster-export-{}.json", file_timestamp(self.generated_at));
        let path = directory.join(filename);
        tokio::fs::write(&path, self.to_json()?).await?;

        info!(path = %path.display(), participants = self.participants.len(),
              "Roster snapshot exported");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats;

    fn sample_roster() -> Vec<Participant> {
        vec![Participant {
            id: 1,
            name: "Alice".to_string(),
            degree_programme: "CS".to_string(),
            email: "alice@example.com".to_string(),
            whatsapp: String::new(),
            lunch_type: "Veg".to_string(),
            payment_status: "Verified".to_string(),
            living_district: "Colombo".to_string(),
            attended: true,
            remarks: String::new(),
        }]
    }

    #[test]
    fn test_snapshot_contains_roster_and_statistics() {
        let roster = sample_roster();
        let snapshot = RosterSnapshot::capture(&roster, stats::compute(&roster));
        let json = snapshot.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["statistics"]["total"], 1);
        assert_eq!(value["statistics"]["rate"], 100);
        assert_eq!(value["participants"][0]["name"], "Alice");
    }

    #[tokio::test]
    async fn test_snapshot_written_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let roster = sample_roster();
        let snapshot = RosterSnapshot::capture(&roster, stats::compute(&roster));

        let path = snapshot.write_to(dir.path()).await.unwrap();
        assert!(path.exists());

        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("Alice"));
    }
}
