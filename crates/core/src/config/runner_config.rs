use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default runner invocation, relative to the workspace root
pub const DEFAULT_MANAGE_PROGRAM: &str = "manage.py test";

/// Per-workspace settings for building test commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct RunnerConfig {
    /// Prepended to every command, e.g. `docker compose exec web`
    pub prefix_command: String,
    /// Runner program and subcommand, e.g. `manage.py test`
    pub manage_program: String,
    /// Appended after the test path, e.g. `--keepdb --verbosity=2`
    pub flags: String,
    /// Whether to put a resolved interpreter in front of the runner program
    pub use_python_path: bool,
    /// Interpreter used when no virtual environment is active
    pub python_path: String,
    /// Drop the first segment of the module path
    pub strip_root_folder: bool,
    /// Drop everything up to and including this package in the module path
    pub root_package_name: String,
    /// Use django-nose `module:Class.method` paths
    pub django_nose: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            prefix_command: String::new(),
            manage_program: DEFAULT_MANAGE_PROGRAM.to_string(),
            flags: String::new(),
            use_python_path: true,
            python_path: String::new(),
            strip_root_folder: false,
            root_package_name: String::new(),
            django_nose: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    tool: PyProjectTools,
}

#[derive(Debug, Default, Deserialize)]
struct PyProjectTools {
    #[serde(rename = "django-runner")]
    django_runner: Option<RunnerConfig>,
}

impl RunnerConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(config)
    }

    /// Read the `[tool.django-runner]` table of a `pyproject.toml`, if it has one
    pub fn load_from_pyproject(path: &Path) -> Result<Option<Self>> {
        let contents = std::fs::read_to_string(path)?;
        let pyproject: PyProject = toml::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        Ok(pyproject.tool.django_runner)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = RunnerConfig::default();
        assert_eq!(config.manage_program, "manage.py test");
        assert!(config.use_python_path);
        assert!(!config.strip_root_folder);
        assert!(!config.django_nose);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: RunnerConfig = serde_json::from_str(
            r#"{"prefix_command": "docker compose exec web", "django_nose": true}"#,
        )
        .unwrap();
        assert_eq!(config.prefix_command, "docker compose exec web");
        assert!(config.django_nose);
        assert_eq!(config.manage_program, "manage.py test");
        assert!(config.use_python_path);
    }

    #[test]
    fn test_save_and_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".django-runner.json");
        let config = RunnerConfig {
            flags: "--keepdb".to_string(),
            root_package_name: "src".to_string(),
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();
        assert_eq!(RunnerConfig::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".django-runner.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            RunnerConfig::load_from_file(&path),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_pyproject_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(
            &path,
            r#"
[project]
name = "shop"

[tool.django-runner]
manage_program = "src/manage.py test"
strip_root_folder = true
"#,
        )
        .unwrap();

        let config = RunnerConfig::load_from_pyproject(&path).unwrap().unwrap();
        assert_eq!(config.manage_program, "src/manage.py test");
        assert!(config.strip_root_folder);
        assert_eq!(config.flags, "");
    }

    #[test]
    fn test_pyproject_without_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("pyproject.toml");
        std::fs::write(&path, "[tool.black]\nline-length = 100\n").unwrap();
        assert!(RunnerConfig::load_from_pyproject(&path).unwrap().is_none());
    }
}
