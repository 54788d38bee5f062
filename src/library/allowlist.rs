//! Extension allowlist for raw image streaming.
//!
//! Only files whose trailing extension is a recognized raster type may be
//! streamed via the `/image` route. Matching is case-insensitive against
//! the true trailing extension, never a substring of the whole path.

use std::path::Path;

/// Extensions permitted for raw streaming, lowercase.
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Check whether `path` has an allowlisted image extension.
pub fn is_allowed_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
