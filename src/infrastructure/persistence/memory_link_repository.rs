//! In-memory implementation of the link registry.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::entities::{ShortEntry, ValidUrl};
use crate::domain::repositories::LinkRepository;

#[derive(Debug)]
struct Registry {
    entries: BTreeMap<u64, ShortEntry>,
    ids_by_url: HashMap<String, u64>,
    next_id: u64,
}

/// Process-memory registry of short entries.
///
/// Submissions take the write lock for the whole lookup-then-insert, so two
/// concurrent submissions of one URL cannot mint two identifiers. Lookups take
/// the read lock and never observe a half-inserted entry.
///
/// Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Registry>,
}

impl InMemoryLinkRepository {
    /// Creates an empty registry whose first identifier is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry {
                entries: BTreeMap::new(),
                ids_by_url: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn submit(&self, url: ValidUrl) -> ShortEntry {
        let mut guard = self.inner.write().await;
        let registry = &mut *guard;

        if let Some(existing) = registry
            .ids_by_url
            .get(url.as_str())
            .and_then(|id| registry.entries.get(id))
        {
            debug!("Dedup hit for {} -> {}", url, existing.id);
            return existing.clone();
        }

        let id = registry.next_id;
        registry.next_id += 1;

        let entry = ShortEntry::new(id, url.into_inner());
        registry.ids_by_url.insert(entry.original_url.clone(), id);
        registry.entries.insert(id, entry.clone());

        info!("Registered short url {} -> {}", id, entry.original_url);
        entry
    }

    async fn resolve(&self, id: u64) -> Option<ShortEntry> {
        self.inner.read().await.entries.get(&id).cloned()
    }

    async fn count(&self) -> usize {
        self.inner.read().await.entries.len()
    }
}
