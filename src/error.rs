use std::path::PathBuf;

use thiserror::Error;

/// Errors from resolving a caller-supplied path.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The `path` query parameter was missing or empty
    #[error("missing or empty path parameter")]
    Missing,

    /// The resolved path does not exist on the filesystem
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),
}

/// Errors from listing a directory.
#[derive(Debug, Error)]
pub enum ListError {
    /// The path could not be read (missing, not a directory, permission denied)
    #[error("cannot read directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from the thumbnail pipeline.
///
/// Each variant maps to exactly one HTTP status; no failure is retried.
#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// The `path` query parameter was missing or empty (HTTP 400)
    #[error("missing or empty path parameter")]
    MissingPath,

    /// The source image does not exist (HTTP 404)
    #[error("source image not found: {0}")]
    SourceNotFound(PathBuf),

    /// The source could not be decoded into a raster (HTTP 500)
    #[error("failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The resampled raster could not be encoded as JPEG (HTTP 500)
    #[error("failed to encode thumbnail for {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The ephemeral artifact could not be created or written (HTTP 500)
    #[error("failed to stage thumbnail artifact in {dir}: {source}")]
    Stage {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The staged artifact could not be handed to the file-serving layer (HTTP 500)
    #[error("failed to stream thumbnail artifact {path}: {source}")]
    Stream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<ResolveError> for ThumbnailError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Missing => ThumbnailError::MissingPath,
            ResolveError::NotFound(path) => ThumbnailError::SourceNotFound(path),
        }
    }
}

/// Errors from serving an original image.
#[derive(Debug, Error)]
pub enum ImageServeError {
    /// The path was missing, empty, or does not exist (HTTP 400)
    #[error("path does not exist: {0}")]
    NotFound(PathBuf),

    /// The path's extension is not in the image allowlist (HTTP 400)
    #[error("extension is not an allowed image type: {0}")]
    DisallowedExtension(PathBuf),

    /// The file could not be handed to the file-serving layer (HTTP 500)
    #[error("failed to stream {path}: {source}")]
    Stream {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
