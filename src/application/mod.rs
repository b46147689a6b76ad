//! Application layer services implementing business logic.
//!
//! Services consume domain traits and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Shape, scheme, and hostname checks
//! - [`services::link_service::LinkService`] - Shortening and identifier resolution

pub mod services;
