pub mod scope_match;
pub mod test_target;

// Re-export commonly used types
pub use scope_match::ScopeMatch;
pub use test_target::TestTarget;
