//! API route configuration.

use crate::api::handlers::{hello_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All routes mounted under `/api`.
///
/// # Endpoints
///
/// - `POST /shorturl`               - Shorten a URL
/// - `GET  /shorturl/{short_url}`   - Redirect to the original URL
/// - `GET  /hello`                  - Greeting
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorturl", post(shorten_handler))
        .route("/shorturl/{short_url}", get(redirect_handler))
        .route("/hello", get(hello_handler))
}
