use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use django_runner_core::TestTarget;
use std::path::PathBuf;

use crate::commands::{analyze_command, app_command, init_command, previous_command, run_command};

#[derive(Parser, Debug)]
#[command(name = "django-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to look for configuration and which interpreter to use
#[derive(Args, Debug, Clone, Default)]
pub struct ContextArgs {
    /// Workspace root that test paths are relative to (discovered when omitted)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Python interpreter to use instead of the resolved one
    #[arg(long)]
    pub python: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Print the command without executing it
    #[arg(short, long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub context: ContextArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the test method enclosing a location
    #[command(visible_alias = "m")]
    Method {
        /// Python file with an optional 1-based line (e.g., app/tests.py:42)
        filepath: String,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Run the test class enclosing a location
    #[command(visible_alias = "c")]
    Class {
        /// Python file with an optional 1-based line (e.g., app/tests.py:42)
        filepath: String,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Run every test in a file
    #[command(visible_alias = "f")]
    File {
        /// Path to the Python file
        filepath: String,

        #[command(flatten)]
        run: RunArgs,
    },
    /// Run the whole test suite
    App {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Repeat the last test run in this workspace
    #[command(visible_alias = "p")]
    Previous {
        #[command(flatten)]
        run: RunArgs,
    },
    /// Show the test scope at a location and the commands that would run it
    #[command(visible_alias = "a")]
    Analyze {
        /// Python file with an optional 1-based line (e.g., app/tests.py:42)
        filepath: String,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        context: ContextArgs,
    },
    /// Write a default .django-runner.json
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Method { filepath, run } => run_command(TestTarget::Method, &filepath, &run),
            Commands::Class { filepath, run } => run_command(TestTarget::Class, &filepath, &run),
            Commands::File { filepath, run } => run_command(TestTarget::File, &filepath, &run),
            Commands::App { run } => app_command(&run),
            Commands::Previous { run } => previous_command(&run),
            Commands::Analyze {
                filepath,
                json,
                context,
            } => analyze_command(&filepath, json, &context),
            Commands::Init { cwd, force } => init_command(cwd.as_deref(), force),
        }
    }
}
