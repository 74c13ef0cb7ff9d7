//! Test command assembly and execution

pub mod builder;
pub mod shell;

// Re-export commonly used items
pub use builder::build_command;
pub use shell::shell_command;
