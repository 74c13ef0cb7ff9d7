//! Capability interfaces between the runner and its host
//!
//! The host (an editor, the CLI, a test) supplies the document, the resolved
//! configuration, somewhere to send the command and somewhere to report
//! errors. The runner itself never touches the filesystem or a process.

pub mod config_provider;
pub mod notifier;
pub mod source_provider;
pub mod terminal;

pub use config_provider::ConfigProvider;
pub use notifier::Notifier;
pub use source_provider::SourceProvider;
pub use terminal::Terminal;
