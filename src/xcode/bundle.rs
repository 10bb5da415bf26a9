//! Bundle path derivation
//!
//! Layout under the project root:
//! <root>/<name>.xcodeproj/
//!     project.xcworkspace/
//!     xcshareddata/
//!     xcuserdata/

use std::path::{Path, PathBuf};

use super::name::ProjectName;
use crate::config;

/// The four directories that make up a scaffolded bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePaths {
    pub bundle: PathBuf,
    pub workspace: PathBuf,
    pub shared_data: PathBuf,
    pub user_data: PathBuf,
}

impl BundlePaths {
    pub fn new(name: &ProjectName, root: &Path) -> Self {
        let bundle = root.join(name.bundle_dir_name());
        let [workspace, shared_data, user_data] =
            config::BUNDLE_SUBDIRS.map(|dir| bundle.join(dir));
        Self {
            bundle,
            workspace,
            shared_data,
            user_data,
        }
    }

    /// The bundle subdirectories, in creation order
    pub fn children(&self) -> [&Path; 3] {
        [&self.workspace, &self.shared_data, &self.user_data]
    }

    /// All four paths, parent first
    pub fn all(&self) -> [&Path; 4] {
        [
            &self.bundle,
            &self.workspace,
            &self.shared_data,
            &self.user_data,
        ]
    }
}
