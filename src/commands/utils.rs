//! Shared utilities for commands

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// Create a single directory if it is absent
///
/// Returns `true` when the directory was created, `false` when it already
/// existed. The parent must exist. A non-directory at `path` is an error.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    match fs::create_dir(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            if path.is_dir() {
                Ok(false)
            } else {
                Err(ScaffoldError::NotADirectory {
                    path: path.to_path_buf(),
                })
            }
        }
        Err(source) => Err(ScaffoldError::CreateDir {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Join names for prose: `A`, `A and B`, `A, B and C`
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    match names {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|s| s.as_ref()).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}
