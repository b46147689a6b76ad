//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`ShortEntry`] - A minted short identifier and its original URL
//! - [`ValidUrl`] - A URL string that passed validation and may be registered

pub mod short_entry;
pub mod valid_url;

pub use short_entry::ShortEntry;
pub use valid_url::ValidUrl;
