pub mod analyze;
pub mod init;
pub mod run;

pub use analyze::analyze_command;
pub use init::init_command;
pub use run::{app_command, previous_command, run_command};
