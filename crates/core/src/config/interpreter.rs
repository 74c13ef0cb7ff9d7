//! Interpreter resolution
//!
//! Picks the Python executable placed in front of the runner program:
//! the active virtualenv, then the active conda environment, then the
//! `python_path` setting, then nothing.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::RunnerConfig;

/// Resolve the interpreter path for `config`.
///
/// `env` looks up environment variables; pass `|key| std::env::var(key).ok()`
/// outside of tests.
pub fn resolve_python_path<F>(config: &RunnerConfig, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !config.use_python_path {
        return String::new();
    }

    let layouts: [(&str, fn(&Path) -> PathBuf); 2] = [
        ("VIRTUAL_ENV", virtualenv_python),
        ("CONDA_PREFIX", conda_python),
    ];
    for (var, python_in) in layouts {
        if let Some(prefix) = env(var).filter(|value| !value.is_empty()) {
            let python = python_in(Path::new(&prefix));
            debug!("Using interpreter from {}: {}", var, python.display());
            return python.to_string_lossy().into_owned();
        }
    }

    config.python_path.clone()
}

fn virtualenv_python(prefix: &Path) -> PathBuf {
    if cfg!(windows) {
        prefix.join("Scripts").join("python.exe")
    } else {
        prefix.join("bin").join("python")
    }
}

/// Conda keeps `python.exe` at the environment root on Windows
fn conda_python(prefix: &Path) -> PathBuf {
    if cfg!(windows) {
        prefix.join("python.exe")
    } else {
        prefix.join("bin").join("python")
    }
}
