use serde::{Deserialize, Serialize};

/// The test method and class enclosing a cursor position.
///
/// An empty field means the parser did not find that scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeMatch {
    pub method_name: String,
    pub class_name: String,
}

impl ScopeMatch {
    pub fn new(method_name: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            class_name: class_name.into(),
        }
    }

    pub fn has_method(&self) -> bool {
        !self.method_name.is_empty()
    }

    pub fn has_class(&self) -> bool {
        !self.class_name.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_method() && !self.has_class()
    }
}
