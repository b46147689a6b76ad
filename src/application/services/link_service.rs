//! Link creation and retrieval service.

use std::sync::Arc;

use crate::application::services::url_validator::UrlValidator;
use crate::domain::entities::ShortEntry;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Interprets a path segment as a registry identifier.
///
/// # Returns
///
/// - `Ok(Some(id))` for a canonical decimal identifier
/// - `Ok(None)` for digits that cannot name an entry (leading zero, or too
///   large for 64 bits)
///
/// # Errors
///
/// Returns [`AppError::WrongFormat`] if the segment is empty or contains any
/// character other than an ASCII digit.
pub fn parse_identifier(segment: &str) -> Result<Option<u64>, AppError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::WrongFormat);
    }

    if segment.len() > 1 && segment.starts_with('0') {
        return Ok(None);
    }

    Ok(segment.parse().ok())
}

/// Service for shortening URLs and resolving short identifiers.
///
/// Validation runs to completion before the registry is touched, so a slow
/// hostname lookup never holds the registry lock.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    validator: UrlValidator,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, validator: UrlValidator) -> Self {
        Self {
            link_repository,
            validator,
        }
    }

    /// Validates `original_url` and registers it.
    ///
    /// Resubmitting a stored URL returns its existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if any validation step fails.
    pub async fn shorten(&self, original_url: &str) -> Result<ShortEntry, AppError> {
        let valid = self.validator.validate(original_url).await?;
        Ok(self.link_repository.submit(valid).await)
    }

    /// Resolves a raw path segment to its entry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::WrongFormat`] for non-numeric segments.
    /// Returns [`AppError::NotFound`] if no entry has that identifier.
    pub async fn resolve_segment(&self, segment: &str) -> Result<ShortEntry, AppError> {
        let Some(id) = parse_identifier(segment)? else {
            return Err(AppError::NotFound);
        };

        self.link_repository
            .resolve(id)
            .await
            .ok_or(AppError::NotFound)
    }

    /// Returns the number of registered entries.
    pub async fn count(&self) -> usize {
        self.link_repository.count().await
    }
}
