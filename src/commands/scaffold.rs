//! Scaffold command - Create the Xcode bundle skeleton and print setup steps
//!
//! Xcode project files cannot be generated from here, so this only prepares
//! the bundle directories. The remaining setup happens by hand in Xcode.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::utils;
use crate::config;
use crate::error::ScaffoldError;
use crate::xcode::{swift_source_folders, BundlePaths, ProjectName};

/// Options for the scaffold command
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub name: String,
    pub root: String,
    pub dry_run: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            name: config::DEFAULT_PROJECT_NAME.to_string(),
            root: ".".to_string(),
            dry_run: false,
        }
    }
}

/// Check that the root is an existing directory
fn check_root(root: &Path) -> Result<(), ScaffoldError> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ScaffoldError::RootNotADirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ScaffoldError::RootNotFound {
            path: root.to_path_buf(),
        }),
        Err(source) => Err(ScaffoldError::InspectRoot {
            path: root.to_path_buf(),
            source,
        }),
    }
}

/// Ensure `<root>/<name>.xcodeproj` and its three subdirectories exist
///
/// Existing directories are left untouched. The bundle is created before
/// its children, so an unwritable root fails before anything is created.
pub fn ensure_bundle_layout(
    name: &ProjectName,
    root: &Path,
) -> Result<BundlePaths, ScaffoldError> {
    check_root(root)?;

    let paths = BundlePaths::new(name, root);
    utils::ensure_dir(&paths.bundle)?;
    for child in paths.children() {
        utils::ensure_dir(child)?;
    }

    Ok(paths)
}

/// Bundle path as shown in the status line, bare for the current directory
pub fn bundle_label(name: &ProjectName, root: &Path, paths: &BundlePaths) -> String {
    if root == Path::new(".") {
        name.bundle_dir_name()
    } else {
        paths.bundle.display().to_string()
    }
}

/// Manual steps to finish the project in Xcode
pub fn setup_instructions(
    name: &ProjectName,
    root: &Path,
    source_folders: &[String],
) -> Vec<String> {
    let save_location = if root == Path::new(".") {
        "Save it in the current folder".to_string()
    } else {
        format!("Save it in {}", root.display())
    };

    let folders = if source_folders.is_empty() {
        utils::join_names(&config::FALLBACK_SOURCE_FOLDERS)
    } else {
        utils::join_names(source_folders)
    };
    let folder_noun = if source_folders.len() == 1 {
        "folder"
    } else {
        "folders"
    };

    let steps = [
        "Open Xcode".to_string(),
        "File > New > Project".to_string(),
        "Choose 'iOS' > 'App'".to_string(),
        format!("Name: {}, Interface: SwiftUI, Language: Swift", name),
        save_location,
        "Delete the automatically generated files (ContentView.swift, etc.)".to_string(),
        format!("Add all Swift files from the {} {}", folders, folder_noun),
    ];

    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}

/// Execute the scaffold command
pub fn execute(options: &ScaffoldOptions) -> Result<()> {
    let name = ProjectName::new(options.name.as_str())?;
    let root = config::resolve_root(&options.root)?;

    if options.dry_run {
        check_root(&root)?;
        let paths = BundlePaths::new(&name, &root);
        println!("{}", "(DRY-RUN) Would ensure the following directories:".blue());
        for path in paths.all() {
            println!("  {}", path.display());
        }
        return Ok(());
    }

    let paths = ensure_bundle_layout(&name, &root)
        .with_context(|| format!("Failed to scaffold {}", name.bundle_dir_name()))?;

    println!(
        "{} {}",
        "Project structure created:".green(),
        bundle_label(&name, &root, &paths)
    );
    println!();
    println!("To complete the setup:");

    let folders = swift_source_folders(&root);
    for line in setup_instructions(&name, &root, &folders) {
        println!("{}", line);
    }

    Ok(())
}
