//! ProjectName type, the identifier every generated artifact is named after.

use serde::Serialize;
use std::fmt;

/// A project name derived from a source file's base name.
///
/// Never empty and never starts with an ASCII digit, so it can be used as a
/// sketch name. Build one with [`crate::naming::derive_project_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    /// Wraps an already-derived name.
    pub(crate) fn from_derived(name: String) -> Self {
        debug_assert!(!name.is_empty());
        debug_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
        Self(name)
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercase form written as the README title.
    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }

    /// Returns true if the name is a valid C/C++ identifier.
    pub fn is_identifier(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
