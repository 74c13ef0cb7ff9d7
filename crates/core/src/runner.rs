//! Session runner that coordinates parsing, path building and dispatch

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    command::build_command,
    error::Result,
    interfaces::{ConfigProvider, Notifier, SourceProvider, Terminal},
    parser::parse_lines,
    path::{build_class_test_path, build_full_test_path, file_path_to_dotted_path, strip_root_package},
    types::{ScopeMatch, TestTarget},
};

/// Reported when a repeat is requested before anything has run
pub const NO_PREVIOUS_TESTS: &str = "No previous tests!";

/// Where a target resolved to, before anything is dispatched
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResolution {
    pub target: TestTarget,
    pub scope: ScopeMatch,
    pub module_path: String,
    pub test_path: String,
}

/// One target that can be run from the current cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedRun {
    pub target: TestTarget,
    pub test_path: String,
    pub command: String,
}

/// Everything runnable from the current cursor, most specific first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub relative_path: String,
    pub scope: ScopeMatch,
    pub module_path: String,
    pub runs: Vec<PlannedRun>,
}

impl Analysis {
    pub fn run_for(&self, target: TestTarget) -> Option<&PlannedRun> {
        self.runs.iter().find(|run| run.target == target)
    }
}

/// Resolves test paths for a document and sends commands to a terminal.
///
/// The runner keeps the last dispatched test path so `run_previous` can
/// repeat it. Nothing else survives between calls: every resolution re-reads
/// the source and configuration it is given.
pub struct TestRunner<C, T, N> {
    config: C,
    terminal: T,
    notifier: N,
    last_ran_test_path: String,
}

impl<C, T, N> TestRunner<C, T, N>
where
    C: ConfigProvider,
    T: Terminal,
    N: Notifier,
{
    pub fn new(config: C, terminal: T, notifier: N) -> Self {
        Self {
            config,
            terminal,
            notifier,
            last_ran_test_path: String::new(),
        }
    }

    /// Seed the last-run register, e.g. from a previous session
    pub fn with_last_ran_test_path(mut self, test_path: impl Into<String>) -> Self {
        self.last_ran_test_path = test_path.into();
        self
    }

    pub fn last_ran_test_path(&self) -> Option<&str> {
        if self.last_ran_test_path.is_empty() {
            None
        } else {
            Some(&self.last_ran_test_path)
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Dotted module path of the document, after root stripping
    pub fn module_path(&self, source: &dyn SourceProvider) -> Result<String> {
        let config = self.config.runner_config();
        let dotted = file_path_to_dotted_path(&source.relative_path()?);
        Ok(strip_root_package(
            &dotted,
            config.strip_root_folder,
            &config.root_package_name,
        ))
    }

    pub fn resolve(&self, target: TestTarget, source: &dyn SourceProvider) -> Result<TestResolution> {
        let module_path = self.module_path(source)?;
        let scope = if target.needs_scope() {
            parse_lines(source.lines_to_cursor()?)
        } else {
            ScopeMatch::default()
        };
        debug!("Resolved {} scope {:?} in {}", target, scope, module_path);

        let django_nose = self.config.runner_config().django_nose;
        let test_path = match target {
            TestTarget::Method => {
                if !scope.has_method() {
                    warn!("No test method found above the cursor");
                }
                build_full_test_path(&module_path, &scope.class_name, &scope.method_name, django_nose)
            }
            TestTarget::Class => {
                if !scope.has_class() {
                    warn!("No test class found above the cursor");
                }
                build_class_test_path(&module_path, &scope.class_name, django_nose)
            }
            TestTarget::File => module_path.clone(),
            TestTarget::App => String::new(),
        };

        Ok(TestResolution {
            target,
            scope,
            module_path,
            test_path,
        })
    }

    /// The command line that would run `test_path`
    pub fn command_for(&self, test_path: &str) -> String {
        let config = self.config.runner_config();
        build_command(
            &config.prefix_command,
            self.config.python_path(),
            &config.manage_program,
            test_path,
            &config.flags,
        )
    }

    /// Every target runnable from the cursor, without dispatching any
    pub fn analyze(&self, source: &dyn SourceProvider) -> Result<Analysis> {
        let relative_path = source.relative_path()?;
        let module_path = self.module_path(source)?;
        let scope = parse_lines(source.lines_to_cursor()?);
        let django_nose = self.config.runner_config().django_nose;

        let mut paths = Vec::new();
        if scope.has_method() && scope.has_class() {
            paths.push((
                TestTarget::Method,
                build_full_test_path(&module_path, &scope.class_name, &scope.method_name, django_nose),
            ));
        }
        if scope.has_class() {
            paths.push((
                TestTarget::Class,
                build_class_test_path(&module_path, &scope.class_name, django_nose),
            ));
        }
        paths.push((TestTarget::File, module_path.clone()));
        paths.push((TestTarget::App, String::new()));

        let runs = paths
            .into_iter()
            .map(|(target, test_path)| PlannedRun {
                target,
                command: self.command_for(&test_path),
                test_path,
            })
            .collect();

        Ok(Analysis {
            relative_path,
            scope,
            module_path,
            runs,
        })
    }

    /// Resolve `target` and dispatch it. Returns the command sent.
    pub fn run(&mut self, target: TestTarget, source: &dyn SourceProvider) -> Result<String> {
        let resolution = self.resolve(target, source)?;
        self.run_tests(&resolution.test_path)
    }

    /// Dispatch `test_path`, remembering it for `run_previous`. Returns the command sent.
    pub fn run_tests(&mut self, test_path: &str) -> Result<String> {
        self.last_ran_test_path = test_path.to_string();
        let command = self.command_for(test_path);
        info!("Dispatching: {}", command);

        self.terminal.show();
        self.terminal.send_text(&command)?;
        Ok(command)
    }

    /// Repeat the last dispatched test path.
    ///
    /// With nothing recorded the notifier is told and `None` is returned.
    pub fn run_previous(&mut self) -> Result<Option<String>> {
        if self.last_ran_test_path.is_empty() {
            self.notifier.show_error(NO_PREVIOUS_TESTS);
            return Ok(None);
        }
        let test_path = self.last_ran_test_path.clone();
        self.run_tests(&test_path).map(Some)
    }
}
