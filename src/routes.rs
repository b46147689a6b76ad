//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Index page
//! - `GET  /health`    - Health check
//! - `/api/*`          - Shortening API
//! - `/public/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, or restricted to one configured origin
//! - **Body limit** - Caps request body size
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Builds the CORS layer for the configured origin.
fn cors_layer(origin: &str) -> CorsLayer {
    if origin == "*" {
        return CorsLayer::permissive();
    }

    match HeaderValue::from_str(origin) {
        Ok(value) => CorsLayer::new()
            .allow_origin(AllowOrigin::exact(value))
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
        Err(e) => {
            ::tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
            CorsLayer::new()
        }
    }
}

/// Constructs the application router without path normalization.
///
/// Handlers are reachable with their exact paths only; use [`app_router`] to
/// serve real traffic.
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(&config.index_file))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&config.public_dir))
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(&config.cors_allow_origin))
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - static asset locations, CORS origin, and body limit
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, config))
}
