//! Recursive directory copy and cleanup helpers.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{AssetError, Result};

/// Copy the directory tree at `src` into `dest`, creating `dest`.
///
/// Returns the number of files copied. Symlinks are followed, so linked
/// content is copied rather than the link itself.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::Io {
            path: e.path().unwrap_or(src).to_path_buf(),
            message: format!("Failed to walk directory: {}", e),
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| AssetError::Package {
                message: format!("{} is outside {}: {}", entry.path().display(), src.display(), e),
                help: None,
            })?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| AssetError::Io {
                path: target.clone(),
                message: format!("Failed to create directory: {}", e),
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| AssetError::Io {
                path: entry.path().to_path_buf(),
                message: format!("Failed to copy to {}: {}", target.display(), e),
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Delete a file if it exists.
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to remove stale file: {}", e),
        })?;
    }
    Ok(())
}

/// Delete a directory tree if it exists.
pub fn remove_dir_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_dir_all(path).map_err(|e| AssetError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to remove directory: {}", e),
        })?;
    }
    Ok(())
}
