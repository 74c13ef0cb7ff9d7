use serde::{Deserialize, Serialize};
use std::fmt;

/// How much of the suite a run should cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestTarget {
    /// The test method enclosing the cursor
    Method,
    /// The test class enclosing the cursor
    Class,
    /// Every test in the current module
    File,
    /// The whole suite; the runner receives no test path
    App,
}

impl TestTarget {
    /// Whether resolving this target needs the source lines above the cursor
    pub fn needs_scope(&self) -> bool {
        matches!(self, TestTarget::Method | TestTarget::Class)
    }
}

impl fmt::Display for TestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestTarget::Method => "method",
            TestTarget::Class => "class",
            TestTarget::File => "file",
            TestTarget::App => "app",
        };
        f.write_str(name)
    }
}
