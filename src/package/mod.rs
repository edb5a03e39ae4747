//! Addon packaging.
//!
//! Stages the pack trees side by side in a working directory, zips the
//! working directory's contents and renames the archive to the addon
//! extension. Every output path is deleted before it is recreated, so a
//! run never trips over leftovers from a previous one.
//!
//! # Example
//!
//! ```ignore
//! use addon_assets::package::Packager;
//!
//! let summary = Packager::new("dist", "Wizardiuz_Staff", "mcaddon")
//!     .with_tree("BP", "BP")
//!     .with_tree("RP", "RP")
//!     .run()?;
//! println!("{}", summary.archive.display());
//! ```

mod archive;
mod tree;

use std::fs;
use std::path::PathBuf;

use crate::catalogue::{Layout, ADDON_NAME, ARCHIVE_EXTENSION};
use crate::error::{AssetError, Result};

pub use archive::write_zip;
pub use tree::{copy_tree, remove_dir_if_exists, remove_file_if_exists};

/// Result of a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Path of the finished archive.
    pub archive: PathBuf,
    /// Number of files stored in the archive.
    pub files: usize,
}

/// Builds `<dist_dir>/<base_name>.<extension>` from a set of source trees.
#[derive(Debug, Clone)]
pub struct Packager {
    dist_dir: PathBuf,
    base_name: String,
    extension: String,
    /// (name inside the archive, source directory)
    trees: Vec<(String, PathBuf)>,
}

impl Packager {
    pub fn new(
        dist_dir: impl Into<PathBuf>,
        base_name: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            dist_dir: dist_dir.into(),
            base_name: base_name.into(),
            extension: extension.into(),
            trees: Vec::new(),
        }
    }

    /// The addon packager for a project layout: both packs into
    /// `dist/Wizardiuz_Staff.mcaddon`.
    pub fn for_layout(layout: &Layout) -> Self {
        let packager = Self::new(layout.dist_dir(), ADDON_NAME, ARCHIVE_EXTENSION);
        layout
            .pack_trees()
            .into_iter()
            .fold(packager, |p, (name, source)| p.with_tree(name, source))
    }

    /// Add a source tree, stored under `name` in the archive.
    pub fn with_tree(mut self, name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        self.trees.push((name.into(), source.into()));
        self
    }

    /// Final archive path.
    pub fn archive_path(&self) -> PathBuf {
        self.dist_dir
            .join(format!("{}.{}", self.base_name, self.extension))
    }

    /// Intermediate zip path, before the rename.
    fn zip_path(&self) -> PathBuf {
        self.dist_dir.join(format!("{}.zip", self.base_name))
    }

    /// Working directory the trees are staged in.
    pub fn staging_dir(&self) -> PathBuf {
        self.dist_dir.join(&self.base_name)
    }

    /// Run the packaging steps. The first I/O failure aborts the run.
    pub fn run(&self) -> Result<PackageSummary> {
        for (name, source) in &self.trees {
            if !source.is_dir() {
                return Err(AssetError::Package {
                    message: format!("Source tree '{}' not found at {}", name, source.display()),
                    help: Some("Run from the addon project root".to_string()),
                });
            }
        }

        fs::create_dir_all(&self.dist_dir).map_err(|e| AssetError::Io {
            path: self.dist_dir.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;

        let archive = self.archive_path();
        let zip_path = self.zip_path();
        let staging = self.staging_dir();

        remove_file_if_exists(&archive)?;
        remove_file_if_exists(&zip_path)?;
        remove_dir_if_exists(&staging)?;

        fs::create_dir(&staging).map_err(|e| AssetError::Io {
            path: staging.clone(),
            message: format!("Failed to create staging directory: {}", e),
        })?;

        for (name, source) in &self.trees {
            copy_tree(source, &staging.join(name))?;
        }

        let files = write_zip(&staging, &zip_path)?;

        if zip_path != archive {
            fs::rename(&zip_path, &archive).map_err(|e| AssetError::Io {
                path: zip_path.clone(),
                message: format!("Failed to rename to {}: {}", archive.display(), e),
            })?;
        }

        remove_dir_if_exists(&staging)?;

        Ok(PackageSummary { archive, files })
    }
}
