//! # shorturl
//!
//! A small URL shortening service built with Axum.
//!
//! Submitted URLs are checked for shape, scheme, and a resolvable hostname,
//! then assigned sequential numeric identifiers starting at 1. Resubmitting a
//! stored URL returns its existing identifier. All state lives in process
//! memory and is lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities and trait contracts
//! - **Application Layer** ([`application`]) - Validation and shortening services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry and system resolver
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! PORT=3000 cargo run
//!
//! curl -d 'url=https://www.freecodecamp.com' http://localhost:3000/api/shorturl
//! # {"original_url":"https://www.freecodecamp.com","short_url":1}
//!
//! curl -i http://localhost:3000/api/shorturl/1
//! # HTTP/1.1 302 Found
//! # location: https://www.freecodecamp.com
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{InvalidUrlError, LinkService, UrlValidator};
    pub use crate::domain::entities::{ShortEntry, ValidUrl};
    pub use crate::domain::repositories::{HostnameResolver, LinkRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::dns::SystemResolver;
    pub use crate::infrastructure::persistence::InMemoryLinkRepository;
    pub use crate::state::AppState;
}
