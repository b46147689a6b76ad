//! DTOs for health check and greeting endpoints.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of registered short URLs.
    pub entries: usize,
}

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub greeting: &'static str,
}
