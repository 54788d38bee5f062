//! Directory listing.
//!
//! Enumerates the immediate children of a directory and partitions them
//! into subdirectories and files. Entries follow filesystem enumeration
//! order; no sorting is applied.

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::ListError;

/// A single directory entry.
///
/// Field names are capitalized on the wire (`Name`/`Path`/`Size`) for
/// compatibility with existing clients of the listing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct FileEntry {
    /// Entry name without any directory components
    #[serde(rename = "Name")]
    pub name: String,

    /// Absolute path: the parent directory joined with the entry name
    #[serde(rename = "Path")]
    pub path: String,

    /// Size in bytes as reported by the filesystem
    #[serde(rename = "Size")]
    pub size: u64,
}

/// The partitioned contents of a directory.
#[derive(Debug, Default, Serialize)]
pub struct Listing {
    /// Immediate subdirectories
    pub dirs: Vec<FileEntry>,

    /// Immediate non-directory entries
    pub files: Vec<FileEntry>,
}

/// List the immediate contents of `path`, partitioned by directory-ness.
///
/// Every returned entry's `path` is `path` joined with the entry's name.
/// The combined length of `dirs` and `files` equals the directory's total
/// entry count.
///
/// # Errors
///
/// Returns [`ListError::Unreadable`] if `path` is missing, not a
/// directory, or cannot be read.
pub fn list_directory(path: &Path) -> Result<Listing, ListError> {
    let entries = fs::read_dir(path).map_err(|source| ListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut listing = Listing::default();

    for entry in entries {
        let entry = entry.map_err(|source| ListError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = entry.metadata().map_err(|source| ListError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let name = entry.file_name().to_string_lossy().into_owned();
        let item = FileEntry {
            path: path.join(&name).to_string_lossy().into_owned(),
            size: metadata.len(),
            name,
        };

        if metadata.is_dir() {
            listing.dirs.push(item);
        } else {
            listing.files.push(item);
        }
    }

    debug!(
        path = %path.display(),
        dirs = listing.dirs.len(),
        files = listing.files.len(),
        "listed directory"
    );

    Ok(listing)
}
