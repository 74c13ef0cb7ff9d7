use anyhow::{bail, Context, Result};
use django_runner_core::services::{FileSource, StderrNotifier};
use django_runner_core::{Settings, TestRunner, TestTarget};
use std::path::Path;
use tracing::debug;

use crate::cli::RunArgs;
use crate::utils::{absolute_path, parse_filepath_with_line, CliTerminal, SessionState, WorkspaceContext};

type CliRunner = TestRunner<Settings, CliTerminal, StderrNotifier>;

pub fn run_command(target: TestTarget, filepath_arg: &str, args: &RunArgs) -> Result<()> {
    // Parse filepath and line number
    let (filepath, line) = parse_filepath_with_line(filepath_arg)?;
    debug!("Running {} tests in {} at line {:?}", target, filepath, line);

    let file = absolute_path(Path::new(&filepath))?;
    if !file.is_file() {
        bail!("File not found: {}", file.display());
    }

    let context = WorkspaceContext::discover(&file, &args.context)?;
    let source = FileSource::open(&file, context.workspace_root(), line)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    dispatch(&context, args.dry_run, |runner| {
        Ok(Some(runner.run(target, &source)?))
    })
}

pub fn app_command(args: &RunArgs) -> Result<()> {
    let context = WorkspaceContext::discover_from_cwd(&args.context)?;
    dispatch(&context, args.dry_run, |runner| Ok(Some(runner.run_tests("")?)))
}

pub fn previous_command(args: &RunArgs) -> Result<()> {
    let context = WorkspaceContext::discover_from_cwd(&args.context)?;
    dispatch(&context, args.dry_run, |runner| Ok(runner.run_previous()?))
}

/// Build a runner for the workspace, hand it to `action`, then persist the
/// last-run path and propagate a failing exit code.
fn dispatch<F>(context: &WorkspaceContext, dry_run: bool, action: F) -> Result<()>
where
    F: FnOnce(&mut CliRunner) -> Result<Option<String>>,
{
    let root = context.workspace_root();
    let state = SessionState::load(root);
    let terminal = CliTerminal::new(dry_run, root);

    let mut runner = TestRunner::new(context.settings.clone(), terminal, StderrNotifier)
        .with_last_ran_test_path(state.last_ran_test_path);

    let Some(command) = action(&mut runner)? else {
        // Nothing to repeat; the notifier has already told the user.
        std::process::exit(1);
    };
    debug!("Sent: {}", command);

    if !runner.terminal().is_dry_run() {
        let state = SessionState {
            last_ran_test_path: runner.last_ran_test_path().unwrap_or_default().to_string(),
        };
        state.save(root)?;
    }

    if let Some(code) = runner.terminal().failure_code() {
        std::process::exit(code);
    }

    Ok(())
}
