//! Hostname resolution used by URL validation.

mod system_resolver;

pub use system_resolver::SystemResolver;
