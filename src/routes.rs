//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`           - Create (or reuse) a short link
//! - `GET    /{code}`            - Redirect to the original URL
//! - `GET    /info/{code}`       - Link metadata
//! - `GET    /analytics/{code}`  - Click count and recent visitors
//! - `DELETE /delete/{code}`     - Remove a link
//! - `GET    /health`            - Liveness check

use crate::api::handlers::{
    analytics_handler, delete_handler, health_handler, info_handler, redirect_handler,
    shorten_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{delete, get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static segments win over the `/{code}` capture, so `shorten`, `health`,
/// `info`, `analytics`, and `delete` are effectively reserved codes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/info/{code}", get(info_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .route("/delete/{code}", delete(delete_handler))
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
