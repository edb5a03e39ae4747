//! Zip archive output.
//!
//! Member names are relative to the archived root and `/`-separated.
//! Entries are written in sorted order with a fixed timestamp, so the
//! same tree always produces the same archive bytes.

use std::fs::File;
use std::io;
use std::path::{Component, Path};

use walkdir::WalkDir;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{AssetError, Result};

fn archive_error(path: &Path, e: ZipError) -> AssetError {
    AssetError::Archive {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

/// Build a zip member name from a path relative to the archive root.
fn member_name(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Zip the contents of `root` into `archive_path`.
///
/// `root` itself is not part of member names. Returns the number of
/// files stored (directories excluded).
pub fn write_zip(root: &Path, archive_path: &Path) -> Result<usize> {
    let file = File::create(archive_path).map_err(|e| AssetError::Io {
        path: archive_path.to_path_buf(),
        message: format!("Failed to create archive: {}", e),
    })?;

    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut stored = 0;
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| AssetError::Io {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: format!("Failed to walk directory: {}", e),
        })?;

        let relative = entry.path().strip_prefix(root).map_err(|e| AssetError::Package {
            message: format!("{} is outside {}: {}", entry.path().display(), root.display(), e),
            help: None,
        })?;
        let name = member_name(relative);

        if entry.file_type().is_dir() {
            zip.add_directory(format!("{}/", name), options)
                .map_err(|e| archive_error(archive_path, e))?;
            continue;
        }

        zip.start_file(name, options)
            .map_err(|e| archive_error(archive_path, e))?;

        let mut source = File::open(entry.path()).map_err(|e| AssetError::Io {
            path: entry.path().to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?;
        io::copy(&mut source, &mut zip).map_err(|e| AssetError::Io {
            path: entry.path().to_path_buf(),
            message: format!("Failed to compress file: {}", e),
        })?;
        stored += 1;
    }

    zip.finish().map_err(|e| archive_error(archive_path, e))?;

    Ok(stored)
}
