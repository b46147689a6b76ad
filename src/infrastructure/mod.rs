//! Infrastructure layer implementing domain traits.
//!
//! - [`persistence`] - In-memory link registry
//! - [`dns`] - Hostname resolution

pub mod dns;
pub mod persistence;
