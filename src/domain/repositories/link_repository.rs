//! Repository trait for the short link registry.

use crate::domain::entities::{ShortEntry, ValidUrl};
use async_trait::async_trait;

/// Append-only, deduplicating store of short entries.
///
/// Identifiers are positive, unique, and minted in submission order starting
/// at 1. There is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-memory registry
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Registers a validated URL and returns its entry.
    ///
    /// If the exact same URL string was submitted before, the existing entry
    /// is returned unchanged and no identifier is minted. Concurrent
    /// submissions of one URL always observe a single identifier.
    async fn submit(&self, url: ValidUrl) -> ShortEntry;

    /// Finds an entry by identifier.
    ///
    /// Absence is a normal outcome, reported as `None`.
    async fn resolve(&self, id: u64) -> Option<ShortEntry>;

    /// Returns the number of registered entries.
    async fn count(&self) -> usize;
}
