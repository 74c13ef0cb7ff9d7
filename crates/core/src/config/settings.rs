use super::{resolve_python_path, RunnerConfig};
use crate::interfaces::ConfigProvider;

/// Configuration with the interpreter already resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub runner: RunnerConfig,
    pub python_path: String,
}

impl Settings {
    pub fn new(runner: RunnerConfig, python_path: impl Into<String>) -> Self {
        Self {
            runner,
            python_path: python_path.into(),
        }
    }

    /// Resolve the interpreter from the process environment
    pub fn from_env(runner: RunnerConfig) -> Self {
        let python_path = resolve_python_path(&runner, |key| std::env::var(key).ok());
        Self { runner, python_path }
    }

    pub fn with_python_path(mut self, python_path: impl Into<String>) -> Self {
        self.python_path = python_path.into();
        self
    }
}

impl ConfigProvider for Settings {
    fn runner_config(&self) -> &RunnerConfig {
        &self.runner
    }

    fn python_path(&self) -> &str {
        &self.python_path
    }
}
