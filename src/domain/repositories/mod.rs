//! Trait definitions for the domain layer.
//!
//! These traits abstract storage and name lookup so that services can be
//! exercised against in-memory implementations or `mockall` mocks.
//!
//! # Available Traits
//!
//! - [`LinkRepository`] - The short link registry
//! - [`HostnameResolver`] - Hostname existence checks for validation

pub mod hostname_resolver;
pub mod link_repository;

pub use hostname_resolver::HostnameResolver;
pub use link_repository::LinkRepository;

#[cfg(test)]
pub use hostname_resolver::MockHostnameResolver;
#[cfg(test)]
pub use link_repository::MockLinkRepository;
