//! django-runner - locate and run the Django test under an editor cursor
//!
//! This crate provides functionality to:
//! - Scan Python source backwards from a cursor to find the enclosing test method and class
//! - Turn a workspace-relative file path into the dotted path Django's test runner expects
//! - Assemble the shell command that runs a method, class, module or the whole suite
pub mod command;
pub mod config;
pub mod error;
pub mod interfaces;
pub mod parser;
pub mod path;
pub mod runner;
pub mod services;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::build_command;
pub use config::{RunnerConfig, Settings};
pub use parser::parse_lines;
pub use runner::{Analysis, PlannedRun, TestResolution, TestRunner};
