//! Swift source discovery
//!
//! Finds the top-level folders under the project root that hold Swift
//! sources, so the setup instructions can name the folders to add.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Folders never worth adding to a project
const SKIPPED_FOLDERS: [&str; 5] = ["build", "DerivedData", "node_modules", "Pods", "Carthage"];

/// How deep below a top-level folder Swift files are looked for
const MAX_SOURCE_DEPTH: usize = 6;

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || name.ends_with(".xcodeproj")
        || name.ends_with(".xcworkspace")
        || SKIPPED_FOLDERS.iter().any(|skipped| *skipped == name)
}

fn is_swift_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .is_some_and(|ext| ext == "swift")
}

/// Names of top-level folders under `root` containing at least one `.swift` file
///
/// Sorted by name. Unreadable entries are skipped; a missing root yields an
/// empty list.
pub fn swift_source_folders(root: &Path) -> Vec<String> {
    let mut folders: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() && !is_skipped(e))
        .filter(|e| contains_swift(e.path()))
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();

    folders.sort();
    folders
}

fn contains_swift(dir: &Path) -> bool {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(MAX_SOURCE_DEPTH)
        .into_iter()
        .filter_entry(|e| !is_skipped(e))
        .filter_map(|e| e.ok())
        .any(|e| is_swift_file(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_finds_folders_with_swift() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("Views")).unwrap();
        fs::write(root.join("Views/HomeView.swift"), "").unwrap();
        fs::create_dir_all(root.join("Services/Network")).unwrap();
        fs::write(root.join("Services/Network/Client.swift"), "").unwrap();
        fs::create_dir_all(root.join("Assets")).unwrap();
        fs::write(root.join("Assets/logo.png"), "").unwrap();

        assert_eq!(swift_source_folders(root), vec!["Services", "Views"]);
    }

    #[test]
    fn test_skips_hidden_and_bundles() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join(".build")).unwrap();
        fs::write(root.join(".build/Gen.swift"), "").unwrap();
        fs::create_dir_all(root.join("Old.xcodeproj")).unwrap();
        fs::write(root.join("Old.xcodeproj/Stray.swift"), "").unwrap();
        fs::create_dir_all(root.join("DerivedData")).unwrap();
        fs::write(root.join("DerivedData/Gen.swift"), "").unwrap();

        assert!(swift_source_folders(root).is_empty());
    }

    #[test]
    fn test_skips_dependency_folders() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        fs::create_dir_all(root.join("Web/node_modules/pkg")).unwrap();
        fs::write(root.join("Web/node_modules/pkg/Shim.swift"), "").unwrap();
        fs::create_dir_all(root.join("Pods/Alamofire")).unwrap();
        fs::write(root.join("Pods/Alamofire/Session.swift"), "").unwrap();

        assert!(swift_source_folders(root).is_empty());
    }

    #[test]
    fn test_depth_limit() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();

        let shallow = root.join("Features/a/b/c/d");
        fs::create_dir_all(&shallow).unwrap();
        fs::write(shallow.join("Found.swift"), "").unwrap();

        let deep = root.join("Vendor/a/b/c/d/e/f");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("Lost.swift"), "").unwrap();

        assert_eq!(swift_source_folders(root), vec!["Features"]);
    }

    #[test]
    fn test_root_level_files_ignored() {
        // Files directly in the root are not folders to add
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("App.swift"), "").unwrap();
        assert!(swift_source_folders(dir.path()).is_empty());
    }

    #[test]
    fn test_missing_root() {
        assert!(swift_source_folders(Path::new("/nonexistent/path/for/scaffold")).is_empty());
    }
}
