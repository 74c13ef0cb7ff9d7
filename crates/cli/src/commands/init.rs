use anyhow::{Context, Result};
use django_runner_core::config::loader::{CONFIG_FILE_NAMES, MANAGE_PY};
use django_runner_core::RunnerConfig;
use std::path::{Path, PathBuf};
use std::env;
use tracing::{debug, info};
use walkdir::WalkDir;

const SKIPPED_DIRS: [&str; 4] = ["node_modules", "venv", "env", "__pycache__"];

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    println!("🚀 Initializing django-runner in: {}", project_root.display());

    let mut config = RunnerConfig::default();
    match find_manage_py(&project_root) {
        Some(relative) if relative != Path::new(MANAGE_PY) => {
            let program = relative.to_string_lossy().replace('\\', "/");
            config.manage_program = format!("{program} test");
            println!("   • Found {}", program);
        }
        Some(_) => println!("   • Found {}", MANAGE_PY),
        None => println!("   ⚠️  No {} found, using the default runner program", MANAGE_PY),
    }

    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Wrote {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("\n📌 Edit prefix_command, flags and root_package_name to match your project");

    Ok(())
}

/// Shallowest `manage.py` under `root`, relative to it
fn find_manage_py(root: &Path) -> Option<PathBuf> {
    WalkDir::new(root)
        .max_depth(3)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            entry.depth() == 0 || !(name.starts_with('.') || SKIPPED_DIRS.contains(&&*name))
        })
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == MANAGE_PY)
        .min_by_key(|entry| entry.depth())
        .and_then(|entry| {
            debug!("Found {}", entry.path().display());
            entry.path().strip_prefix(root).ok().map(Path::to_path_buf)
        })
}
