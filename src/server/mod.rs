//! HTTP server layer for picshelf.
//!
//! This module provides the HTTP API over the image library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                           │
//! │   GET /   GET /thumbnail   GET /image   GET /health          │
//! │                                                              │
//! │  ┌─────────────┐              ┌──────────────────────────┐   │
//! │  │  handlers   │              │         routes           │   │
//! │  │ (requests)  │              │    (router config)       │   │
//! │  └─────────────┘              └──────────────────────────┘   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    health_handler, image_handler, list_handler, thumbnail_handler, AppState, HealthResponse,
    ImageQueryParams, ListQueryParams, ThumbnailQueryParams,
};
pub use routes::{create_router, RouterConfig};
