//! Ephemeral thumbnail artifacts.
//!
//! A rendered thumbnail is handed to the transport's file-serving layer as
//! an on-disk file co-located with the source image. The artifact owns that
//! file for the duration of one request and removes it when dropped, so
//! cleanup runs on every exit path after creation succeeds: normal return,
//! early error return, and panic unwind alike.
//!
//! Filenames are generated, never derived from the source path, so any
//! number of concurrent requests for the same source cannot collide.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

/// A uniquely named thumbnail file staged next to the source image.
///
/// The file exists from [`stage`](Self::stage) until the artifact is
/// dropped.
#[derive(Debug)]
pub struct ThumbnailArtifact {
    file: NamedTempFile,
}

impl ThumbnailArtifact {
    /// Create a uniquely named `thumb-*.jpg` file in `dir` holding `data`.
    pub fn stage(dir: &Path, data: &[u8]) -> std::io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("thumb-")
            .suffix(".jpg")
            .tempfile_in(dir)?;
        file.write_all(data)?;
        file.flush()?;

        debug!(path = %file.path().display(), bytes = data.len(), "staged thumbnail artifact");

        Ok(Self { file })
    }

    /// Path of the staged file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
