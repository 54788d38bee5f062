//! Filesystem-facing collaborators of the HTTP layer.
//!
//! This module groups the simple I/O wrappers around the image library:
//!
//! - [`resolve`] - Validates and normalizes caller-supplied paths
//! - [`list`] - Enumerates a directory's immediate children
//! - [`allowlist`] - The fixed set of extensions permitted for raw streaming

pub mod allowlist;
pub mod list;
pub mod resolve;

pub use allowlist::{is_allowed_image, ALLOWED_EXTENSIONS};
pub use list::{list_directory, FileEntry, Listing};
pub use resolve::PathResolver;
