//! Participant model

use serde::{Deserialize, Serialize};
use url::Url;

/// A single event participant as held in the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub name: String,
    pub degree_programme: String,
    pub email: String,
    pub whatsapp: String,
    pub lunch_type: String,
    pub payment_status: String,
    pub living_district: String,
    pub attended: bool,
    pub remarks: String,
}

/// A raw record exactly as it appears in the input data file
///
/// Field names follow the source schema verbatim; the mapping into
/// [`Participant`] is the only place the two shapes meet.
#[derive(Debug, Clone, Deserialize)]
pub struct RawParticipantRecord {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Degree Programme")]
    pub degree_programme: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Whatsapp no")]
    pub whatsapp: String,
    #[serde(rename = "Lunch Type")]
    pub lunch_type: String,
    #[serde(rename = "Payment Slip")]
    pub payment_slip: String,
    #[serde(rename = "Living District")]
    pub living_district: String,
}

impl From<RawParticipantRecord> for Participant {
    fn from(raw: RawParticipantRecord) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            degree_programme: raw.degree_programme,
            email: raw.email,
            whatsapp: raw.whatsapp,
            lunch_type: raw.lunch_type,
            payment_status: raw.payment_slip,
            living_district: raw.living_district,
            // never taken from source data
            attended: false,
            remarks: String::new(),
        }
    }
}

/// Request payload for adding a participant through the service boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateParticipantRequest {
    pub id: i64,
    pub name: String,
    pub degree_programme: String,
    pub email: String,
    pub whatsapp: String,
    pub lunch_type: String,
    pub living_district: String,
    pub remarks: String,
}

impl From<CreateParticipantRequest> for Participant {
    fn from(request: CreateParticipantRequest) -> Self {
        Self {
            id: request.id,
            name: request.name,
            degree_programme: request.degree_programme,
            email: request.email,
            whatsapp: request.whatsapp,
            lunch_type: request.lunch_type,
            payment_status: "Pending".to_string(),
            living_district: request.living_district,
            attended: false,
            remarks: request.remarks,
        }
    }
}

/// Partial update applied to an existing participant; `None` fields are untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantPatch {
    pub name: Option<String>,
    pub degree_programme: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub lunch_type: Option<String>,
    pub payment_status: Option<String>,
    pub living_district: Option<String>,
    pub remarks: Option<String>,
}

impl ParticipantPatch {
    /// Apply the non-empty fields of this patch to a participant
    pub fn apply(self, participant: &mut Participant) {
        if let Some(name) = self.name {
            participant.name = name;
        }
        if let Some(degree_programme) = self.degree_programme {
            participant.degree_programme = degree_programme;
        }
        if let Some(email) = self.email {
            participant.email = email;
        }
        if let Some(whatsapp) = self.whatsapp {
            participant.whatsapp = whatsapp;
        }
        if let Some(lunch_type) = self.lunch_type {
            participant.lunch_type = lunch_type;
        }
        if let Some(payment_status) = self.payment_status {
            participant.payment_status = payment_status;
        }
        if let Some(living_district) = self.living_district {
            participant.living_district = living_district;
        }
        if let Some(remarks) = self.remarks {
            participant.remarks = remarks;
        }
    }
}

/// Interpretation of the free-text payment status field
///
/// A URL value is a reference link to a payment proof rather than a status
/// label; "verified" and "done" are the two labels the operators use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    Link(Url),
    Verified,
    Done,
    Other(String),
}

impl PaymentStatus {
    /// Classify a raw payment status value
    pub fn classify(status: &str) -> Self {
        if status.contains("http") {
            if let Ok(url) = Url::parse(status.trim()) {
                return PaymentStatus::Link(url);
            }
        }

        if status.eq_ignore_ascii_case("verified") {
            PaymentStatus::Verified
        } else if status.eq_ignore_ascii_case("done") {
            PaymentStatus::Done
        } else {
            PaymentStatus::Other(status.to_string())
        }
    }

    /// Short label for display
    pub fn label(&self) -> String {
        match self {
            PaymentStatus::Link(url) => format!("payment slip: {}", url),
            PaymentStatus::Verified => "verified".to_string(),
            PaymentStatus::Done => "done".to_string(),
            PaymentStatus::Other(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_field_mapping() {
        let raw: RawParticipantRecord = serde_json::from_str(
            r#"{
                "ID": 17,
                "Name": "Alice Perera",
                "Degree Programme": "Computer Science",
                "Email": "alice@example.com",
                "Whatsapp no": "+94 77 123 4567",
                "Lunch Type": "Veg",
                "Payment Slip": "https://example.com/slips/17.png",
                "Living District": "Colombo"
            }"#,
        )
        .unwrap();

        let participant = Participant::from(raw);
        assert_eq!(participant.id, 17);
        assert_eq!(participant.name, "Alice Perera");
        assert_eq!(participant.degree_programme, "Computer Science");
        assert_eq!(participant.payment_status, "https://example.com/slips/17.png");
        assert!(!participant.attended);
        assert_eq!(participant.remarks, "");
    }

    #[test]
    fn test_create_request_defaults() {
        let request = CreateParticipantRequest {
            id: 3,
            name: "Bob".to_string(),
            degree_programme: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            lunch_type: String::new(),
            living_district: String::new(),
            remarks: "walk-in".to_string(),
        };

        let participant = Participant::from(request);
        assert_eq!(participant.payment_status, "Pending");
        assert!(!participant.attended);
        assert_eq!(participant.remarks, "walk-in");
    }

    #[test]
    fn test_patch_applies_only_named_fields() {
        let mut participant = Participant {
            id: 1,
            name: "Bob".to_string(),
            degree_programme: "Physics".to_string(),
            email: "bob@example.com".to_string(),
            whatsapp: "123".to_string(),
            lunch_type: "Veg".to_string(),
            payment_status: "Pending".to_string(),
            living_district: "Kandy".to_string(),
            attended: true,
            remarks: String::new(),
        };

        let patch = ParticipantPatch {
            name: Some("Bobby".to_string()),
            remarks: Some("paid cash".to_string()),
            ..Default::default()
        };
        patch.apply(&mut participant);

        assert_eq!(participant.name, "Bobby");
        assert_eq!(participant.remarks, "paid cash");
        assert_eq!(participant.degree_programme, "Physics");
        assert!(participant.attended);
    }

    #[test]
    fn test_payment_status_classification() {
        assert_eq!(
            PaymentStatus::classify("https://example.com/slip.png"),
            PaymentStatus::Link(Url::parse("https://example.com/slip.png").unwrap())
        );
        assert_eq!(PaymentStatus::classify("Verified"), PaymentStatus::Verified);
        assert_eq!(PaymentStatus::classify("DONE"), PaymentStatus::Done);
        assert_eq!(
            PaymentStatus::classify("Pending"),
            PaymentStatus::Other("Pending".to_string())
        );
        // malformed URL-ish text falls through to a plain label
        assert_eq!(
            PaymentStatus::classify("http not really a link"),
            PaymentStatus::Other("http not really a link".to_string())
        );
    }
}
