//! Business logic services for the application layer.

pub mod link_service;
pub mod url_validator;

pub use link_service::LinkService;
pub use url_validator::{InvalidUrlError, UrlValidator};
