//! Short entry entity representing one shortened URL mapping.

/// A registered short identifier and the URL it redirects to.
///
/// Entries are immutable once minted. `original_url` is stored exactly as
/// submitted, without normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortEntry {
    pub id: u64,
    pub original_url: String,
}

impl ShortEntry {
    /// Creates a new ShortEntry instance.
    pub fn new(id: u64, original_url: String) -> Self {
        Self { id, original_url }
    }
}
