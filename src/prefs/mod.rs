//! Operator preferences
//!
//! File-backed key/value storage for the two values that survive a restart:
//! the current theme and the logged-in operator's display name. The file is a
//! small TOML document rewritten in full on every change; a missing file means
//! defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::utils::errors::Result;

/// Display theme preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    theme: Theme,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_user: Option<String>,
}

/// Persisted operator preferences
#[derive(Debug)]
pub struct PreferencesStore {
    path: PathBuf,
    values: PreferencesFile,
}

impl PreferencesStore {
    /// Open the preferences file, falling back to defaults when it is absent
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No preferences file, using defaults");
                PreferencesFile::default()
            }
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), theme = %values.theme,
              has_user = values.current_user.is_some(), "Preferences loaded");
        Ok(Self { path, values })
    }

    pub fn theme(&self) -> Theme {
        self.values.theme
    }

    /// Set and persist the theme
    pub async fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.values.theme = theme;
        self.persist().await
    }

    /// The logged-in operator's display name, if any
    pub fn current_user(&self) -> Option<&str> {
        self.values.current_user.as_deref()
    }

    /// Set and persist the logged-in operator
    pub async fn set_current_user(&mut self, name: impl Into<String>) -> Result<()> {
        self.values.current_user = Some(name.into());
        self.persist().await
    }

    /// Clear and persist the logged-in operator
    pub async fn clear_current_user(&mut self) -> Result<()> {
        self.values.current_user = None;
        self.persist().await
    }

    async fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let contents = toml::to_string_pretty(&self.values)?;
        tokio::fs::write(&self.path, contents).await?;
        debug!(path = %self.path.display(), "Preferences persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = PreferencesStore::open(dir.path().join("preferences.toml"))
            .await
            .unwrap();

        assert_eq!(prefs.theme(), Theme::Light);
        assert!(prefs.current_user().is_none());
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = PreferencesStore::open(&path).await.unwrap();
        prefs.set_theme(Theme::Dark).await.unwrap();
        prefs.set_current_user("Nadia").await.unwrap();

        let reopened = PreferencesStore::open(&path).await.unwrap();
        assert_eq!(reopened.theme(), Theme::Dark);
        assert_eq!(reopened.current_user(), Some("Nadia"));
    }

    #[tokio::test]
    async fn test_logout_clears_user_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");

        let mut prefs = PreferencesStore::open(&path).await.unwrap();
        prefs.set_theme(Theme::Dark).await.unwrap();
        prefs.set_current_user("Nadia").await.unwrap();
        prefs.clear_current_user().await.unwrap();

        let reopened = PreferencesStore::open(&path).await.unwrap();
        assert!(reopened.current_user().is_none());
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
