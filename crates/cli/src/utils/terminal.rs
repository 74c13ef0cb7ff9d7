use django_runner_core::interfaces::Terminal;
use django_runner_core::services::{EchoTerminal, ShellTerminal};
use django_runner_core::Result;
use std::io::Stdout;
use std::path::Path;

/// Either runs commands or, for `--dry-run`, prints them
#[derive(Debug)]
pub enum CliTerminal {
    Shell(ShellTerminal),
    Echo(EchoTerminal<Stdout>),
}

impl CliTerminal {
    pub fn new(dry_run: bool, workspace_root: &Path) -> Self {
        if dry_run {
            CliTerminal::Echo(EchoTerminal::stdout())
        } else {
            CliTerminal::Shell(ShellTerminal::new().with_working_dir(workspace_root))
        }
    }

    pub fn is_dry_run(&self) -> bool {
        matches!(self, CliTerminal::Echo(_))
    }

    /// Exit code to propagate when the last command failed
    pub fn failure_code(&self) -> Option<i32> {
        match self {
            CliTerminal::Shell(shell) => shell
                .last_status()
                .filter(|status| !status.success())
                .map(|status| status.code().unwrap_or(1)),
            CliTerminal::Echo(_) => None,
        }
    }
}

impl Terminal for CliTerminal {
    fn show(&mut self) {
        match self {
            CliTerminal::Shell(shell) => shell.show(),
            CliTerminal::Echo(echo) => echo.show(),
        }
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        match self {
            CliTerminal::Shell(shell) => shell.send_text(text),
            CliTerminal::Echo(echo) => echo.send_text(text),
        }
    }
}
