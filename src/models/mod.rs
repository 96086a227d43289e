//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod activity;
pub mod participant;

// Re-export commonly used models
pub use activity::{ActivityCategory, ActivityRecord, Severity};
pub use participant::{
    CreateParticipantRequest, Participant, ParticipantPatch, PaymentStatus, RawParticipantRecord,
};
