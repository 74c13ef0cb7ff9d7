//! Configuration discovery
//!
//! Walks up from a document looking for, at each level in turn,
//! `.django-runner.json`, `django-runner.json`, and a `pyproject.toml` with a
//! `[tool.django-runner]` table. The first hit wins and its directory becomes
//! the workspace root. Without a config file the workspace root is the
//! nearest directory holding `manage.py`.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::RunnerConfig;
use crate::error::Result;

pub const CONFIG_FILE_NAMES: [&str; 2] = [".django-runner.json", "django-runner.json"];
pub const PYPROJECT_FILE_NAME: &str = "pyproject.toml";
pub const MANAGE_PY: &str = "manage.py";

/// A configuration together with where it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: RunnerConfig,
    /// File the config was read from; `None` means defaults
    pub source: Option<PathBuf>,
    pub workspace_root: PathBuf,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover configuration for `path` (a file or directory).
    ///
    /// `fallback_root` is used as the workspace root when neither a config
    /// file nor `manage.py` is found above `path`.
    pub fn load_for_path(path: &Path, fallback_root: &Path) -> Result<LoadedConfig> {
        let start = Self::start_dir(path);

        for dir in start.ancestors() {
            if let Some((config, source)) = Self::try_load(dir)? {
                debug!("Loaded config from {:?}", source);
                return Ok(LoadedConfig {
                    config,
                    source: Some(source),
                    workspace_root: dir.to_path_buf(),
                });
            }
        }

        let workspace_root =
            Self::find_manage_py_root(start).unwrap_or_else(|| fallback_root.to_path_buf());
        debug!("No config file found, workspace root: {:?}", workspace_root);

        Ok(LoadedConfig {
            config: RunnerConfig::default(),
            source: None,
            workspace_root,
        })
    }

    /// Load configuration stored directly in `dir`, if any
    pub fn try_load(dir: &Path) -> Result<Option<(RunnerConfig, PathBuf)>> {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                let config = RunnerConfig::load_from_file(&candidate)?;
                return Ok(Some((config, candidate)));
            }
        }

        let pyproject = dir.join(PYPROJECT_FILE_NAME);
        if pyproject.is_file() {
            if let Some(config) = RunnerConfig::load_from_pyproject(&pyproject)? {
                return Ok(Some((config, pyproject)));
            }
        }

        Ok(None)
    }

    /// Nearest ancestor of `start` (inclusive) that contains `manage.py`
    pub fn find_manage_py_root(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| dir.join(MANAGE_PY).is_file())
            .map(Path::to_path_buf)
    }

    fn start_dir(path: &Path) -> &Path {
        if path.is_file() {
            path.parent().unwrap_or(path)
        } else {
            path
        }
    }
}
