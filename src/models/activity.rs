//! Activity record model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Category of an operator action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityCategory {
    Login,
    Logout,
    Search,
    Edit,
    Add,
    Attendance,
    Theme,
    Export,
    Other,
}

impl ActivityCategory {
    /// Parse a category label, falling back to `Other` for anything unknown
    pub fn parse(label: &str) -> Self {
        match label {
            "Login" => ActivityCategory::Login,
            "Logout" => ActivityCategory::Logout,
            "Search" => ActivityCategory::Search,
            "Edit" => ActivityCategory::Edit,
            "Add" => ActivityCategory::Add,
            "Attendance" => ActivityCategory::Attendance,
            "Theme" => ActivityCategory::Theme,
            "Export" => ActivityCategory::Export,
            _ => ActivityCategory::Other,
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActivityCategory::Login => "Login",
            ActivityCategory::Logout => "Logout",
            ActivityCategory::Search => "Search",
            ActivityCategory::Edit => "Edit",
            ActivityCategory::Add => "Add",
            ActivityCategory::Attendance => "Attendance",
            ActivityCategory::Theme => "Theme",
            ActivityCategory::Export => "Export",
            ActivityCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

/// Severity of a logged action, used for display emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One logged, categorized, timestamped operator action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub category: ActivityCategory,
    pub description: String,
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
}

impl ActivityRecord {
    /// Create a record stamped with the current local time
    pub fn new(category: ActivityCategory, description: impl Into<String>, severity: Severity) -> Self {
        Self {
            category,
            description: description.into(),
            severity,
            timestamp: Local::now(),
        }
    }

    /// Timestamp formatted for display
    pub fn formatted_time(&self) -> String {
        crate::utils::helpers::format_timestamp(self.timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_with_fallback() {
        assert_eq!(ActivityCategory::parse("Attendance"), ActivityCategory::Attendance);
        assert_eq!(ActivityCategory::parse("Theme"), ActivityCategory::Theme);
        assert_eq!(ActivityCategory::parse("something else"), ActivityCategory::Other);
    }

    #[test]
    fn test_category_roundtrip_display() {
        for category in [
            ActivityCategory::Login,
            ActivityCategory::Logout,
            ActivityCategory::Search,
            ActivityCategory::Edit,
            ActivityCategory::Add,
            ActivityCategory::Attendance,
            ActivityCategory::Theme,
            ActivityCategory::Export,
        ] {
            assert_eq!(ActivityCategory::parse(&category.to_string()), category);
        }
    }
}
