#![allow(dead_code)]

use async_trait::async_trait;
use shorturl::application::services::{LinkService, UrlValidator};
use shorturl::domain::repositories::HostnameResolver;
use shorturl::infrastructure::persistence::InMemoryLinkRepository;
use shorturl::state::AppState;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

/// Resolver that knows a fixed set of hostnames and nothing else.
pub struct StaticResolver {
    known: Vec<String>,
}

impl StaticResolver {
    pub fn new(hosts: &[&str]) -> Self {
        Self {
            known: hosts.iter().map(|h| h.to_string()).collect(),
        }
    }
}

#[async_trait]
impl HostnameResolver for StaticResolver {
    async fn lookup(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if self.known.iter().any(|h| h == host) {
            Ok(vec![IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34))])
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("unknown host {host}"),
            ))
        }
    }
}

pub const KNOWN_HOSTS: &[&str] = &[
    "www.freecodecamp.com",
    "example.com",
    "www.example.com",
    "localhost",
];

pub fn create_test_state() -> AppState {
    create_test_state_with(StaticResolver::new(KNOWN_HOSTS))
}

pub fn create_test_state_with(resolver: impl HostnameResolver + 'static) -> AppState {
    let validator = UrlValidator::new(Arc::new(resolver), Duration::from_secs(1));
    let link_repository = Arc::new(InMemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(link_repository, validator));

    AppState::new(link_service)
}
