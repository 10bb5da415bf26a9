//! Xcode bundle layout model

pub mod bundle;
pub mod name;
pub mod sources;

// Re-exports for library consumers
pub use bundle::BundlePaths;
pub use name::ProjectName;
pub use sources::swift_source_folders;
