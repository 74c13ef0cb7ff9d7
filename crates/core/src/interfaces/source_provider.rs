use crate::error::Result;

/// Access to the document under the cursor
pub trait SourceProvider {
    /// Lines from the top of the document through the cursor line, nearest first
    fn lines_to_cursor(&self) -> Result<Vec<String>>;

    /// Document path relative to the workspace root
    fn relative_path(&self) -> Result<String>;
}
