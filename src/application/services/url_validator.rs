//! URL validation: shape, structure, scheme, and hostname existence.

use std::io;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

use regex::Regex;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::ValidUrl;
use crate::domain::repositories::HostnameResolver;

/// Accepted URL shape.
///
/// Labels are alphanumeric with internal hyphens only. A single-label host is
/// accepted here and left for name lookup to decide. Anything may follow the
/// host except line terminators.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*/?[^\n\r\x{2028}\x{2029}]*$",
    )
    .unwrap()
});

/// Reason a candidate URL was rejected.
///
/// The reason is kept for logs and the admin CLI only. Every variant maps to
/// the same outward `invalid url` response.
#[derive(Debug, thiserror::Error)]
pub enum InvalidUrlError {
    #[error("does not match the accepted URL pattern")]
    Pattern,

    #[error("failed to parse URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("unsupported scheme '{0}'")]
    Scheme(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("hostname lookup failed: {0}")]
    Resolution(#[source] io::Error),

    #[error("hostname lookup returned no addresses")]
    NoAddresses,

    #[error("hostname lookup timed out")]
    Timeout,
}

/// Runs the pattern, parse, and scheme checks.
///
/// Returns the hostname that still has to be resolved.
///
/// # Errors
///
/// Returns the first failing step as an [`InvalidUrlError`].
pub fn check_syntax(input: &str) -> Result<String, InvalidUrlError> {
    if !URL_PATTERN.is_match(input) {
        return Err(InvalidUrlError::Pattern);
    }

    let parsed = Url::parse(input)?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(InvalidUrlError::Scheme(other.to_string())),
    }

    parsed
        .host_str()
        .map(str::to_string)
        .ok_or(InvalidUrlError::MissingHost)
}

/// Validates candidate URLs before they reach the registry.
///
/// Holds no state besides the resolver handle, so one instance is shared by
/// every request. Each call performs a fresh lookup; results are not cached.
pub struct UrlValidator {
    resolver: Arc<dyn HostnameResolver>,
    timeout: Duration,
}

impl UrlValidator {
    /// Bound applied to a lookup when none is configured.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// Creates a new validator.
    pub fn new(resolver: Arc<dyn HostnameResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }

    /// Validates `input` and returns it unmodified on success.
    ///
    /// # Steps
    ///
    /// 1. Pattern check
    /// 2. Structural parse
    /// 3. Scheme check (`http` or `https`)
    /// 4. Hostname lookup, bounded by the configured timeout
    ///
    /// Each step short-circuits. No lock is held while the lookup is pending.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrlError`] describing the first failing step.
    pub async fn validate(&self, input: &str) -> Result<ValidUrl, InvalidUrlError> {
        let host = check_syntax(input).inspect_err(|e| {
            debug!("Rejected {:?}: {}", input, e);
        })?;

        let lookup = tokio::time::timeout(self.timeout, self.resolver.lookup(&host)).await;

        match lookup {
            Err(_) => {
                warn!("Lookup of {} timed out after {:?}", host, self.timeout);
                Err(InvalidUrlError::Timeout)
            }
            Ok(Err(e)) => {
                debug!("Lookup of {} failed: {}", host, e);
                Err(InvalidUrlError::Resolution(e))
            }
            Ok(Ok(addrs)) if addrs.is_empty() => {
                debug!("Lookup of {} returned no addresses", host);
                Err(InvalidUrlError::NoAddresses)
            }
            Ok(Ok(_)) => Ok(ValidUrl::new(input.to_string())),
        }
    }
}
