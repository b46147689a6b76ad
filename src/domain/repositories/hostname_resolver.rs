//! Name lookup capability used by URL validation.

use async_trait::async_trait;
use std::io;
use std::net::IpAddr;

/// Resolves a hostname to the addresses it points at.
///
/// Only success or failure matters to validation; the addresses are never
/// cached or used to connect.
///
/// # Implementations
///
/// - [`crate::infrastructure::dns::SystemResolver`] - the operating system resolver
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HostnameResolver: Send + Sync {
    /// Looks up `host`.
    ///
    /// # Errors
    ///
    /// Returns an error when the name is unknown or the resolver itself fails.
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}
