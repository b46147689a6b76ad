//! HTTP server initialization and runtime setup.
//!
//! Wires the resolver, registry, and services together and runs the Axum server.

use crate::application::services::{LinkService, UrlValidator};
use crate::config::Config;
use crate::infrastructure::dns::SystemResolver;
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds a fresh application state with an empty registry.
pub fn build_state(config: &Config) -> AppState {
    let validator = UrlValidator::new(Arc::new(SystemResolver::new()), config.resolve_timeout());
    let link_repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repository, validator));

    AppState::new(link_service)
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("Registry initialized (in-memory)");

    let app = app_router(state, &config);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
