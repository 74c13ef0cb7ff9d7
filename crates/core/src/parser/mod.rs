//! Line-oriented scanning of Python test sources

pub mod scope_parser;
pub mod utils;

// Re-export commonly used items
pub use scope_parser::parse_lines;
pub use utils::{indent_width, lines_to_cursor};
