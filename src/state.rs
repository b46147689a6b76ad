use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::InMemoryLinkRepository;

/// Shared state injected into every handler.
///
/// Built once at startup; tests build a fresh one per case.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<InMemoryLinkRepository>>) -> Self {
        Self { link_service }
    }
}
