use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use tracing::{debug, info};

use crate::{
    command::shell_command,
    error::{Error, Result},
    interfaces::Terminal,
};

pub const TERMINAL_NAME: &str = "Django Test Runner";

/// Runs each line through the platform shell, inheriting stdio
#[derive(Debug)]
pub struct ShellTerminal {
    name: String,
    working_dir: Option<PathBuf>,
    last_status: Option<ExitStatus>,
}

impl Default for ShellTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellTerminal {
    pub fn new() -> Self {
        Self {
            name: TERMINAL_NAME.to_string(),
            working_dir: None,
            last_status: None,
        }
    }

    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Exit status of the most recent line, if one ran
    pub fn last_status(&self) -> Option<ExitStatus> {
        self.last_status
    }
}

impl Terminal for ShellTerminal {
    fn show(&mut self) {
        debug!("Terminal '{}' in {:?}", self.name, self.working_dir);
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        info!("Running: {}", text);
        let status = shell_command(text, self.working_dir.as_deref())
            .status()
            .map_err(|e| Error::CommandError(format!("Failed to execute '{text}': {e}")))?;
        debug!("'{}' exited with {}", text, status);
        self.last_status = Some(status);
        Ok(())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_records_exit_status() {
        let mut terminal = ShellTerminal::new();
        assert!(terminal.last_status().is_none());

        terminal.send_text("true").unwrap();
        assert!(terminal.last_status().unwrap().success());

        terminal.send_text("exit 3").unwrap();
        assert_eq!(terminal.last_status().unwrap().code(), Some(3));
    }

    #[test]
    fn test_runs_in_working_dir() {
        let temp = TempDir::new().unwrap();
        let mut terminal = ShellTerminal::new().with_working_dir(temp.path());
        terminal.send_text("touch ran.txt").unwrap();
        assert!(temp.path().join("ran.txt").exists());
    }
}
