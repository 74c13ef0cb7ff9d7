use anyhow::{bail, Context, Result};
use django_runner_core::services::{EchoTerminal, FileSource, StderrNotifier};
use django_runner_core::TestRunner;
use std::path::Path;
use tracing::debug;

use crate::cli::ContextArgs;
use crate::display::print_analysis;
use crate::utils::{absolute_path, parse_filepath_with_line, WorkspaceContext};

pub fn analyze_command(filepath_arg: &str, json: bool, args: &ContextArgs) -> Result<()> {
    debug!("Analyzing file: {}", filepath_arg);

    // Parse filepath and line number first
    let (filepath, line) = parse_filepath_with_line(filepath_arg)?;

    let file = absolute_path(Path::new(&filepath))?;
    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }

    let context = WorkspaceContext::discover(&file, args)?;
    let source = FileSource::open(&file, context.workspace_root(), line)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    // Analysis never dispatches, the terminal only satisfies the runner's type.
    let runner = TestRunner::new(context.settings.clone(), EchoTerminal::stdout(), StderrNotifier);
    let analysis = runner.analyze(&source)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_analysis(&source, &context, &analysis);
    }

    Ok(())
}
