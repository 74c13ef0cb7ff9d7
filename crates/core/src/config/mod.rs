//! Configuration management for django-runner

pub mod interpreter;
pub mod loader;
mod runner_config;
mod settings;

// Re-export main types
pub use interpreter::resolve_python_path;
pub use loader::{ConfigLoader, LoadedConfig};
pub use runner_config::RunnerConfig;
pub use settings::Settings;
