//! LAN Share - a small HTTP server for moving files between a computer and
//! the phones on the same network.
//!
//! `GET /` lists the share directory with inline image and video previews,
//! `POST` accepts multipart uploads into the share root from any page, and
//! any other path serves a file or a sub-directory listing.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod net;
pub mod services;
pub mod types;
pub mod utils;

use axum::{extract::DefaultBodyLimit, routing::get, Router};

pub use config::Config;
pub use errors::ShareError;
pub use types::{AppState, DirEntry, MediaKind};
pub use services::{FileService, UploadService};
pub use components::{ListingComponent, TemplateComponent};

/// Build the router serving the share directory
pub fn app(state: AppState, max_upload_bytes: Option<usize>) -> Router {
    let body_limit = match max_upload_bytes {
        Some(limit) => DefaultBodyLimit::max(limit),
        None => DefaultBodyLimit::disable(),
    };

    Router::new()
        .route("/", get(handlers::handle_root).post(handlers::handle_upload))
        .route("/*path", get(handlers::handle_path).post(handlers::handle_upload))
        .layer(body_limit)
        .with_state(state)
}
