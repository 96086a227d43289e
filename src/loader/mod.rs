//! Roster loader
//!
//! Retrieves the input data file from an ordered list of candidate sources and
//! maps the raw records into the domain shape. Each candidate is either an
//! HTTP(S) URL fetched with the shared client or a local file path; the first
//! source that yields parseable records wins, and exhausting the list is a
//! single `LoadFailure` carrying per-source detail. One request at a time, no
//! internal concurrency, no cancellation.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::DataSourceConfig;
use crate::models::{Participant, RawParticipantRecord};
use crate::utils::errors::{Result, RollcallError};

/// Fetch-with-fallback loader for the participant data file
#[derive(Debug, Clone)]
pub struct RosterLoader {
    client: reqwest::Client,
    sources: Vec<String>,
}

impl RosterLoader {
    /// Create a loader for the configured candidate sources
    pub fn new(config: &DataSourceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            sources: config.sources.clone(),
        })
    }

    /// Load and map the roster from the first responding source
    pub async fn load(&self) -> Result<Vec<Participant>> {
        let mut failures = Vec::new();

        for source in &self.sources {
            match self.try_source(source).await {
                Ok(records) => {
                    info!(source = %source, count = records.len(), "Roster data loaded");
                    return Ok(records.into_iter().map(Participant::from).collect());
                }
                Err(e) => {
                    warn!(source = %source, error = %e, "Roster source failed, trying next");
                    failures.push(format!("{}: {}", source, e));
                }
            }
        }

        Err(RollcallError::LoadFailure {
            detail: failures.join("; "),
        })
    }

    async fn try_source(&self, source: &str) -> Result<Vec<RawParticipantRecord>> {
        if source.starts_with("http://") || source.starts_with("https://") {
            let records = self
                .client
                .get(source)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<RawParticipantRecord>>()
                .await?;
            Ok(records)
        } else {
            let bytes = tokio::fs::read(source).await?;
            Ok(serde_json::from_slice(&bytes)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "ID": 1,
            "Name": "Alice Perera",
            "Degree Programme": "Computer Science",
            "Email": "alice@example.com",
            "Whatsapp no": "+94 77 123 4567",
            "Lunch Type": "Veg",
            "Payment Slip": "Verified",
            "Living District": "Colombo"
        },
        {
            "ID": 2,
            "Name": "Bob Silva",
            "Degree Programme": "Physics",
            "Email": "bob@example.com",
            "Whatsapp no": "+94 71 765 4321",
            "Lunch Type": "Non-Veg",
            "Payment Slip": "https://example.com/slips/2.png",
            "Living District": "Kandy"
        }
    ]"#;

    fn loader_with_sources(sources: Vec<String>) -> RosterLoader {
        RosterLoader::new(&DataSourceConfig {
            sources,
            timeout_seconds: 5,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_from_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = loader_with_sources(vec![file.path().to_string_lossy().into_owned()]);
        let roster = loader.load().await.unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Alice Perera");
        assert!(!roster[0].attended);
        assert_eq!(roster[1].payment_status, "https://example.com/slips/2.png");
    }

    #[tokio::test]
    async fn test_falls_back_to_next_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let loader = loader_with_sources(vec![
            "./definitely-missing/database.json".to_string(),
            file.path().to_string_lossy().into_owned(),
        ]);
        let roster = loader.load().await.unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[tokio::test]
    async fn test_all_sources_failing_reports_each() {
        let loader = loader_with_sources(vec![
            "./missing-a.json".to_string(),
            "./missing-b.json".to_string(),
        ]);

        let err = loader.load().await.unwrap_err();
        assert_matches!(&err, RollcallError::LoadFailure { detail } => {
            assert!(detail.contains("missing-a.json"));
            assert!(detail.contains("missing-b.json"));
        });
    }

    #[tokio::test]
    async fn test_unparseable_content_fails_that_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json at all").unwrap();

        let loader = loader_with_sources(vec![file.path().to_string_lossy().into_owned()]);
        assert_matches!(loader.load().await, Err(RollcallError::LoadFailure { .. }));
    }
}
