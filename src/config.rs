//! Bundle layout constants and root path resolution

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// Project name used when none is given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "Lymbo";

/// Extension Xcode expects on the bundle folder
pub const BUNDLE_EXTENSION: &str = "xcodeproj";

pub const WORKSPACE_DIR: &str = "project.xcworkspace";
pub const SHARED_DATA_DIR: &str = "xcshareddata";
pub const USER_DATA_DIR: &str = "xcuserdata";

/// Subdirectories created inside the bundle, in creation order
pub const BUNDLE_SUBDIRS: [&str; 3] = [WORKSPACE_DIR, SHARED_DATA_DIR, USER_DATA_DIR];

/// Folders named in the last setup step when no Swift sources are found
pub const FALLBACK_SOURCE_FOLDERS: [&str; 2] = ["Views", "Theme"];

/// Resolve the project root given on the command line
///
/// A leading `~` expands to the home directory. The result is not
/// canonicalized; existence is checked by the scaffolder.
pub fn resolve_root(root: &str) -> Result<PathBuf> {
    if root == "~" {
        return dirs::home_dir().ok_or(ScaffoldError::HomeDirUnavailable);
    }

    if let Some(rest) = root.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or(ScaffoldError::HomeDirUnavailable)?;
        return Ok(home.join(rest));
    }

    Ok(Path::new(root).to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(resolve_root(".").unwrap(), PathBuf::from("."));
        assert_eq!(
            resolve_root("/tmp/project").unwrap(),
            PathBuf::from("/tmp/project")
        );
    }

    #[test]
    fn test_tilde_expansion() {
        // Only meaningful where a home directory is known
        if let Some(home) = dirs::home_dir() {
            assert_eq!(resolve_root("~").unwrap(), home);
            assert_eq!(resolve_root("~/apps").unwrap(), home.join("apps"));
        }
    }

    #[test]
    fn test_tilde_inside_path_is_literal() {
        assert_eq!(resolve_root("a/~/b").unwrap(), PathBuf::from("a/~/b"));
    }

    #[test]
    fn test_subdirs_order() {
        assert_eq!(
            BUNDLE_SUBDIRS,
            ["project.xcworkspace", "xcshareddata", "xcuserdata"]
        );
    }
}
