//! Roster service implementation
//!
//! The boundary a presentation layer talks to. The service owns the store, the
//! activity log, the loader, and the preferences, and enforces the
//! post-condition the original left to discipline: every successful mutating
//! operation records an activity entry and triggers a statistics
//! recomputation.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::activity::ActivityLog;
use crate::config::Settings;
use crate::loader::RosterLoader;
use crate::models::{
    ActivityCategory, CreateParticipantRequest, Participant, ParticipantPatch, Severity,
};
use crate::prefs::{PreferencesStore, Theme};
use crate::search::SearchFilter;
use crate::services::export::RosterSnapshot;
use crate::stats::{self, Statistics};
use crate::store::RosterStore;
use crate::utils::errors::{Result, RollcallError};
use crate::utils::logging::log_operator_action;

/// Facade over the roster core, exposed to the presentation layer
#[derive(Debug)]
pub struct RosterService {
    store: RosterStore,
    log: ActivityLog,
    loader: RosterLoader,
    prefs: PreferencesStore,
    export_directory: PathBuf,
}

impl RosterService {
    /// Create the service from application settings
    pub async fn new(settings: &Settings) -> Result<Self> {
        let loader = RosterLoader::new(&settings.data_source)?;
        let prefs = PreferencesStore::open(&settings.preferences.path).await?;

        Ok(Self {
            store: RosterStore::new(),
            log: ActivityLog::new(),
            loader,
            prefs,
            export_directory: PathBuf::from(&settings.export.directory),
        })
    }

    /// Load (or reload) the roster from the configured sources
    ///
    /// On failure the store keeps its previous state and the caller is free to
    /// retry by calling this again.
    pub async fn load_roster(&mut self) -> Result<usize> {
        match self.loader.load().await {
            Ok(participants) => {
                let count = participants.len();
                self.store.load(participants);
                info!(count = count, "Roster ready");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, "Roster load failed, keeping previous state");
                Err(e)
            }
        }
    }

    /// Apply a search term, returning the size of the filtered view
    ///
    /// An empty or whitespace-only term is equivalent to clearing the search.
    pub fn search(&mut self, term: &str) -> usize {
        match SearchFilter::new(term) {
            Some(filter) => {
                let normalized = filter.term().to_string();
                let count = self.store.set_filter(Some(filter));
                self.log.record(
                    ActivityCategory::Search,
                    format!("Searched for \"{}\"", normalized),
                    Severity::Info,
                );
                debug!(term = %normalized, matches = count, "Search applied");
                count
            }
            None => self.clear_search(),
        }
    }

    /// Clear the active search, restoring the view to the full roster
    pub fn clear_search(&mut self) -> usize {
        let count = self.store.set_filter(None);
        debug!(view = count, "Search cleared");
        count
    }

    /// Add a new participant
    pub fn add_participant(&mut self, request: CreateParticipantRequest) -> Result<Statistics> {
        let added = self.store.add(Participant::from(request))?;
        let description = format!("Added new participant: {}", added.name);
        self.log
            .record(ActivityCategory::Add, description, Severity::Success);
        Ok(self.recompute_statistics())
    }

    /// Update the named fields of an existing participant
    pub fn update_participant(&mut self, id: i64, patch: ParticipantPatch) -> Result<Statistics> {
        let updated = self.store.update(id, patch)?;
        let description = format!("Updated information for {}", updated.name);
        self.log
            .record(ActivityCategory::Edit, description, Severity::Info);
        Ok(self.recompute_statistics())
    }

    /// Toggle a participant's attendance flag, returning the new value
    pub fn toggle_attendance(&mut self, id: i64) -> Result<bool> {
        let attended = self.store.toggle_attended(id)?;
        let name = self
            .store
            .find_by_id(id)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let (description, severity) = if attended {
            (format!("Marked as attended for {}", name), Severity::Success)
        } else {
            (format!("Unmarked attendance for {}", name), Severity::Warning)
        };
        self.log
            .record(ActivityCategory::Attendance, description, severity);

        self.recompute_statistics();
        Ok(attended)
    }

    /// Current statistics over the full roster, unaffected by any search
    pub fn statistics(&self) -> Statistics {
        stats::compute(self.store.participants())
    }

    /// The canonical roster in load order
    pub fn roster(&self) -> &[Participant] {
        self.store.participants()
    }

    /// The filtered view in roster order
    pub fn view(&self) -> Vec<&Participant> {
        self.store.view()
    }

    /// Find a participant by id
    pub fn find_participant(&self, id: i64) -> Result<&Participant> {
        self.store.find_by_id(id).ok_or(RollcallError::NotFound { id })
    }

    pub fn is_search_active(&self) -> bool {
        self.store.is_search_active()
    }

    /// The normalized active search term, if any
    pub fn active_search_term(&self) -> Option<&str> {
        self.store.filter().map(|f| f.term())
    }

    /// Read access to the activity log, most-recent-first
    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// Export the current roster and statistics as a JSON string
    pub fn export_json(&mut self) -> Result<String> {
        let snapshot = RosterSnapshot::capture(self.store.participants(), self.statistics());
        let json = snapshot.to_json()?;
        self.record_export();
        Ok(json)
    }

    /// Export the current roster and statistics into the export directory
    pub async fn export_to_file(&mut self) -> Result<PathBuf> {
        let snapshot = RosterSnapshot::capture(self.store.participants(), self.statistics());
        let path = snapshot.write_to(&self.export_directory).await?;
        self.record_export();
        Ok(path)
    }

    fn record_export(&mut self) {
        let statistics = self.statistics();
        self.log.record(
            ActivityCategory::Export,
            format!("Exported roster data ({} participants)", statistics.total),
            Severity::Info,
        );
    }

    /// Log an operator in, persisting the display name
    pub async fn login(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RollcallError::InvalidInput(
                "Display name cannot be empty".to_string(),
            ));
        }

        self.prefs.set_current_user(name).await?;
        log_operator_action(name, "login", None);
        self.log.record(
            ActivityCategory::Login,
            format!("{} logged in", name),
            Severity::Success,
        );
        Ok(())
    }

    /// Log the current operator out
    pub async fn logout(&mut self) -> Result<()> {
        if let Some(name) = self.prefs.current_user().map(str::to_string) {
            self.prefs.clear_current_user().await?;
            log_operator_action(&name, "logout", None);
            self.log.record(
                ActivityCategory::Logout,
                format!("{} logged out", name),
                Severity::Info,
            );
        }
        Ok(())
    }

    /// The logged-in operator's display name, if any
    pub fn current_user(&self) -> Option<&str> {
        self.prefs.current_user()
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    pub fn is_logged_in(&self) -> bool {
        self.prefs.current_user().is_some()
    }

    /// Toggle the theme, recording the change when an operator is logged in
    pub async fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.prefs.theme().toggled();
        self.prefs.set_theme(theme).await?;

        if self.is_logged_in() {
            self.log.record(
                ActivityCategory::Theme,
                format!("Switched to {} mode", theme),
                Severity::Info,
            );
        }
        Ok(theme)
    }

    fn recompute_statistics(&self) -> Statistics {
        let statistics = self.statistics();
        debug!(
            total = statistics.total,
            attended = statistics.attended,
            rate = statistics.rate,
            "Statistics recomputed"
        );
        statistics
    }
}
