//! Path resolution for caller-supplied query values.
//!
//! Callers pass filesystem paths as URL-encoded query parameters. The
//! resolver percent-decodes them, substitutes the configured library root
//! for an empty listing path, and reports whether a required path exists.
//! It performs no other filesystem side effects.
//!
//! The query layer has already percent-decoded the parameter once; the
//! resolver decodes a second time, so existing clients that double-encode
//! paths keep working.

use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// Resolves raw query-string paths against the configured library root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    default_root: PathBuf,
}

impl PathResolver {
    /// Create a resolver rooted at the given library directory.
    pub fn new(default_root: PathBuf) -> Self {
        Self { default_root }
    }

    /// The configured library root.
    pub fn root(&self) -> &Path {
        &self.default_root
    }

    /// Percent-decode a raw query value.
    ///
    /// Decoding is lenient: input that cannot be decoded (stray `%` not
    /// followed by valid hex) passes through unchanged.
    pub fn decode(raw: &str) -> String {
        urlencoding::decode(raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string())
    }

    /// Resolve a listing path: an empty value falls back to the root.
    pub fn resolve_or_root(&self, raw: &str) -> PathBuf {
        let decoded = Self::decode(raw);
        if decoded.is_empty() {
            self.default_root.clone()
        } else {
            PathBuf::from(decoded)
        }
    }

    /// Resolve a path that must be present and exist on disk.
    pub fn resolve_existing(&self, raw: &str) -> Result<PathBuf, ResolveError> {
        let decoded = Self::decode(raw);
        if decoded.is_empty() {
            return Err(ResolveError::Missing);
        }
        let path = PathBuf::from(decoded);
        if !path.exists() {
            return Err(ResolveError::NotFound(path));
        }
        Ok(path)
    }
}
