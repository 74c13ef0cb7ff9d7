//! Last-run persistence between invocations
//!
//! Each workspace keeps the most recently dispatched test path in
//! `.django-runner-state.json` at its root, so `previous` works across
//! separate processes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STATE_FILE_NAME: &str = ".django-runner-state.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub last_ran_test_path: String,
}

impl SessionState {
    pub fn path_for(workspace_root: &Path) -> PathBuf {
        workspace_root.join(STATE_FILE_NAME)
    }

    /// Load the state for a workspace; a missing or unreadable file is a fresh session
    pub fn load(workspace_root: &Path) -> Self {
        let path = Self::path_for(workspace_root);
        match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                debug!("Ignoring malformed state file {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, workspace_root: &Path) -> Result<()> {
        let path = Self::path_for(workspace_root);
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write state to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_state_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(SessionState::load(temp.path()), SessionState::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let state = SessionState {
            last_ran_test_path: "shop.tests.CartTests".to_string(),
        };
        state.save(temp.path()).unwrap();
        assert_eq!(SessionState::load(temp.path()), state);
    }

    #[test]
    fn test_malformed_state_is_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(SessionState::path_for(temp.path()), "nonsense").unwrap();
        assert_eq!(SessionState::load(temp.path()), SessionState::default());
    }
}
