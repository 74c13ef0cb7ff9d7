//! Default capability implementations for running outside an editor

pub mod echo_terminal;
pub mod file_source;
pub mod shell_terminal;
pub mod stderr_notifier;

pub use echo_terminal::EchoTerminal;
pub use file_source::FileSource;
pub use shell_terminal::{ShellTerminal, TERMINAL_NAME};
pub use stderr_notifier::StderrNotifier;
