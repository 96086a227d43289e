//! Roster store implementation
//!
//! The store holds the canonical roster (insertion order = load order) and the
//! filtered view as indices into it, so the view shares participant identity
//! with the roster instead of diverging copies: an in-place edit is visible
//! through both. The view is recomputed whenever the roster mutates while a
//! search is active.

use tracing::{debug, info};

use crate::models::{Participant, ParticipantPatch};
use crate::search::SearchFilter;
use crate::utils::errors::{Result, RollcallError};

/// Canonical roster plus its derived filtered view
#[derive(Debug, Default)]
pub struct RosterStore {
    roster: Vec<Participant>,
    /// Indices into `roster`, in roster order
    view: Vec<usize>,
    filter: Option<SearchFilter>,
}

impl RosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster wholesale from an ordered sequence of participants
    ///
    /// Clears any active search so the view equals the new roster. Callers are
    /// expected to keep the previous store untouched when their load fails; the
    /// store itself only ever sees a successfully parsed batch.
    pub fn load(&mut self, participants: Vec<Participant>) {
        info!(count = participants.len(), "Replacing roster from loaded records");
        self.roster = participants;
        self.filter = None;
        self.resync_view();
    }

    /// Number of participants in the canonical roster
    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// The canonical roster in load order
    pub fn participants(&self) -> &[Participant] {
        &self.roster
    }

    /// The filtered view in roster order
    ///
    /// Equals the full roster when no search is active.
    pub fn view(&self) -> Vec<&Participant> {
        self.view.iter().map(|&i| &self.roster[i]).collect()
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The currently active filter, if any
    pub fn filter(&self) -> Option<&SearchFilter> {
        self.filter.as_ref()
    }

    pub fn is_search_active(&self) -> bool {
        self.filter.is_some()
    }

    /// Find a participant by id
    pub fn find_by_id(&self, id: i64) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Append a participant, rejecting duplicate ids
    pub fn add(&mut self, participant: Participant) -> Result<&Participant> {
        if self.roster.iter().any(|p| p.id == participant.id) {
            return Err(RollcallError::DuplicateId { id: participant.id });
        }

        debug!(id = participant.id, name = %participant.name, "Adding participant");
        let index = self.roster.len();
        self.roster.push(participant);

        if self.filter.is_none() {
            // no search active: the view tracks the full roster
            self.view.push(index);
        } else {
            self.resync_view();
        }

        Ok(&self.roster[index])
    }

    /// Replace the named fields of the participant with the given id
    pub fn update(&mut self, id: i64, patch: ParticipantPatch) -> Result<&Participant> {
        let position = self
            .roster
            .iter()
            .position(|p| p.id == id)
            .ok_or(RollcallError::NotFound { id })?;

        patch.apply(&mut self.roster[position]);
        debug!(id = id, "Updated participant");

        // an edit can change whether the entry matches the active search
        if self.filter.is_some() {
            self.resync_view();
        }

        Ok(&self.roster[position])
    }

    /// Flip the attendance flag, returning the new value
    pub fn toggle_attended(&mut self, id: i64) -> Result<bool> {
        let participant = self
            .roster
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RollcallError::NotFound { id })?;

        participant.attended = !participant.attended;
        let attended = participant.attended;
        debug!(id = id, attended = attended, "Toggled attendance");
        Ok(attended)
    }

    /// Set or clear the active search filter, returning the view size
    pub fn set_filter(&mut self, filter: Option<SearchFilter>) -> usize {
        self.filter = filter;
        self.resync_view();
        self.view.len()
    }

    fn resync_view(&mut self) {
        self.view = match &self.filter {
            Some(filter) => self
                .roster
                .iter()
                .enumerate()
                .filter(|(_, p)| filter.matches(p))
                .map(|(i, _)| i)
                .collect(),
            None => (0..self.roster.len()).collect(),
        };
    }
}
