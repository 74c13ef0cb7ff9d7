use crate::config::RunnerConfig;

/// Resolved configuration for the current document
pub trait ConfigProvider {
    fn runner_config(&self) -> &RunnerConfig;

    /// Interpreter to put in front of the runner program; may be empty
    fn python_path(&self) -> &str;
}
