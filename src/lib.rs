//! xcodeproj-scaffold library
//!
//! Prepares the directory skeleton of an Xcode project bundle
//! (`<name>.xcodeproj/`) ahead of finishing the project by hand in Xcode.
//!
//! This tool does not write `project.pbxproj` or any other project file.

pub mod commands;
pub mod config;
pub mod error;
pub mod xcode;

pub use commands::scaffold::ensure_bundle_layout;
pub use error::ScaffoldError;
