pub mod formatter;

pub use formatter::{describe_target, print_analysis};
