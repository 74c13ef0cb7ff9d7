use anyhow::{Context, Result};
use django_runner_core::config::{ConfigLoader, LoadedConfig};
use django_runner_core::Settings;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cli::ContextArgs;

/// Resolve `path` against the current directory.
///
/// Existing paths are canonicalized so `..` segments and symlinks never leak
/// into dotted test paths. Missing paths are returned joined but untouched.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to get current directory")?
            .join(path)
    };
    if joined.exists() {
        dunce::canonicalize(&joined)
            .with_context(|| format!("Failed to resolve {}", joined.display()))
    } else {
        Ok(joined)
    }
}

/// Configuration and workspace root for one invocation
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    pub loaded: LoadedConfig,
    pub settings: Settings,
}

impl WorkspaceContext {
    /// Discover configuration for `path`, honouring `--workspace` and `--python`
    pub fn discover(path: &Path, args: &ContextArgs) -> Result<Self> {
        let loaded = match &args.workspace {
            Some(workspace) => {
                let workspace = absolute_path(workspace)?;
                let mut loaded = ConfigLoader::load_for_path(&workspace, &workspace)
                    .with_context(|| format!("Failed to load config for {}", workspace.display()))?;
                loaded.workspace_root = workspace;
                loaded
            }
            None => {
                let cwd = absolute_path(Path::new("."))?;
                ConfigLoader::load_for_path(path, &cwd)
                    .with_context(|| format!("Failed to load config for {}", path.display()))?
            }
        };
        debug!(
            "Workspace root: {}, config: {:?}",
            loaded.workspace_root.display(),
            loaded.source
        );

        let mut settings = Settings::from_env(loaded.config.clone());
        if let Some(python) = &args.python {
            settings = settings.with_python_path(python.clone());
        }

        Ok(Self { loaded, settings })
    }

    /// Discover configuration from the current directory
    pub fn discover_from_cwd(args: &ContextArgs) -> Result<Self> {
        let cwd = absolute_path(Path::new("."))?;
        Self::discover(&cwd, args)
    }

    pub fn workspace_root(&self) -> &Path {
        &self.loaded.workspace_root
    }
}
