//! Project name validation
//!
//! The name becomes a single path component (`<name>.xcodeproj`), so it
//! must not be able to escape the project root.

use std::fmt;

use crate::error::{Result, ScaffoldError};

/// A validated project name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        let reason = if name.is_empty() {
            Some("name must not be empty")
        } else if name == "." || name == ".." {
            Some("name must not be a relative directory")
        } else if name.contains(['/', '\\']) {
            Some("name must not contain a path separator")
        } else if name.contains('\0') {
            Some("name must not contain NUL")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Folder name of the bundle, e.g. `Lymbo.xcodeproj`
    pub fn bundle_dir_name(&self) -> String {
        format!("{}.{}", self.0, crate::config::BUNDLE_EXTENSION)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
