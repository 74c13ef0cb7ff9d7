//! Document access backed by a file on disk

use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    interfaces::SourceProvider,
    parser::lines_to_cursor,
    path::relative_path,
};

/// A Python file read once, with an optional 0-based cursor line
#[derive(Debug, Clone)]
pub struct FileSource {
    file_path: PathBuf,
    workspace_root: PathBuf,
    cursor_line: Option<usize>,
    contents: String,
}

impl FileSource {
    /// Read `file_path`. A `cursor_line` of `None` puts the cursor on the last line.
    pub fn open(file_path: &Path, workspace_root: &Path, cursor_line: Option<usize>) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        Ok(Self::from_contents(file_path, workspace_root, cursor_line, contents))
    }

    pub fn from_contents(
        file_path: &Path,
        workspace_root: &Path,
        cursor_line: Option<usize>,
        contents: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_path_buf(),
            workspace_root: workspace_root.to_path_buf(),
            cursor_line,
            contents: contents.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn cursor_line(&self) -> Option<usize> {
        self.cursor_line
    }
}

impl SourceProvider for FileSource {
    fn lines_to_cursor(&self) -> Result<Vec<String>> {
        let cursor = self.cursor_line.unwrap_or(usize::MAX);
        Ok(lines_to_cursor(&self.contents, cursor)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn relative_path(&self) -> Result<String> {
        Ok(relative_path(&self.file_path, &self.workspace_root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SOURCE: &str = "\
from django.test import TestCase


class CartTests(TestCase):
    def test_add(self):
        pass

    def test_remove(self):
        pass
";

    #[test]
    fn test_open_reads_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("shop/tests.py");
        std::fs::create_dir_all(file.parent().unwrap()).unwrap();
        std::fs::write(&file, SOURCE).unwrap();

        let source = FileSource::open(&file, temp.path(), Some(4)).unwrap();
        let lines = source.lines_to_cursor().unwrap();
        assert_eq!(lines.first().map(String::as_str), Some("    def test_add(self):"));
        assert_eq!(lines.len(), 5);
        assert_eq!(
            source.relative_path().unwrap(),
            Path::new("shop/tests.py").to_string_lossy()
        );
    }

    #[test]
    fn test_missing_cursor_means_end_of_file() {
        let source = FileSource::from_contents(Path::new("/w/tests.py"), Path::new("/w"), None, SOURCE);
        let lines = source.lines_to_cursor().unwrap();
        assert_eq!(lines.first().map(String::as_str), Some("        pass"));
        assert_eq!(lines.last().map(String::as_str), Some("from django.test import TestCase"));
    }

    #[test]
    fn test_open_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(FileSource::open(&temp.path().join("nope.py"), temp.path(), None).is_err());
    }
}
