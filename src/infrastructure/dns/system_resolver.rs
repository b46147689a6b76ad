//! Hostname lookup through the operating system resolver.

use std::io;
use std::net::IpAddr;

use async_trait::async_trait;

use crate::domain::repositories::HostnameResolver;

/// Resolver backed by the platform's `getaddrinfo`.
///
/// Honours `/etc/hosts` and local search domains the same way any other
/// process on the host would, so single-label names can resolve.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostnameResolver for SystemResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        let addrs: Vec<IpAddr> = tokio::net::lookup_host((host, 0))
            .await?
            .map(|addr| addr.ip())
            .collect();

        if addrs.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no addresses found for {host}"),
            ));
        }

        Ok(addrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_lookup_ip_literal() {
        let addrs = SystemResolver::new().lookup("127.0.0.1").await.unwrap();
        assert_eq!(addrs, vec!["127.0.0.1".parse::<IpAddr>().unwrap()]);
    }

    #[tokio::test]
    async fn test_lookup_reserved_invalid_tld_fails() {
        let result = SystemResolver::new().lookup("no-such-host.invalid").await;
        assert!(result.is_err());
    }
}
