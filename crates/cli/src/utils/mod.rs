pub mod parser;
pub mod state;
pub mod terminal;
pub mod workspace;

pub use parser::parse_filepath_with_line;
pub use state::SessionState;
pub use terminal::CliTerminal;
pub use workspace::{absolute_path, WorkspaceContext};
