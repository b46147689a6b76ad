//! Proof type for URLs that passed validation.

use std::fmt;

/// A URL string that has passed every validation step.
///
/// Only [`crate::application::services::UrlValidator`] can construct one, so
/// holding a `ValidUrl` means the pattern, parse, scheme, and hostname checks
/// all succeeded. The wrapped string is the caller's original input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidUrl(String);

impl ValidUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for ValidUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ValidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
