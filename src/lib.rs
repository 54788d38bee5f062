//! # picshelf
//!
//! A local image library server. Exposes a directory tree of images over
//! HTTP: directory listings as JSON, raw image streaming, and on-demand
//! size-constrained JPEG thumbnails.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`library`] - Path resolution, directory listing, and the extension allowlist
//! - [`thumb`] - The thumbnail pipeline: decode, resample, encode, ephemeral artifact
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error taxonomies for each pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use picshelf::server::{create_router, AppState, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let state = AppState::new("/home/me/Pictures".into());
//!     let router = create_router(state, RouterConfig::new());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:10000")
//!         .await
//!         .unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod library;
pub mod server;
pub mod thumb;

// Re-export commonly used types
pub use config::Config;
pub use error::{ImageServeError, ListError, ResolveError, ThumbnailError};
pub use library::{is_allowed_image, list_directory, FileEntry, Listing, PathResolver};
pub use server::{
    create_router, health_handler, image_handler, list_handler, thumbnail_handler, AppState,
    HealthResponse, RouterConfig,
};
pub use thumb::{
    effective_size, target_dimensions, ThumbnailArtifact, ThumbnailEngine, DEFAULT_SMALLEST_SIDE,
    THUMBNAIL_JPEG_QUALITY,
};
