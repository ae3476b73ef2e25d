//! # In-memory listener store.
//!
//! A [`ListenerStore`] backed by a map keyed by listener id. Useful for embedding the
//! dispatcher without a database and for tests.
//!
//! ## Rules
//! - Inserting a listener with an existing id replaces it.
//! - Query results are ordered by listener id.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Listener, ListenerStore};
use crate::error::StoreError;
use crate::events::EventKind;

/// Map-backed listener store.
#[derive(Default)]
pub struct InMemoryListenerStore {
    listeners: RwLock<BTreeMap<String, Listener>>,
}

impl InMemoryListenerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `listeners`.
    pub fn with_listeners(listeners: impl IntoIterator<Item = Listener>) -> Self {
        let map = listeners
            .into_iter()
            .map(|l| (l.id().to_string(), l))
            .collect();
        Self {
            listeners: RwLock::new(map),
        }
    }

    /// Adds or replaces a listener; returns the previous record with the same id.
    pub async fn insert(&self, listener: Listener) -> Option<Listener> {
        self.listeners
            .write()
            .await
            .insert(listener.id().to_string(), listener)
    }

    /// Removes a listener by id.
    pub async fn remove(&self, id: &str) -> Option<Listener> {
        self.listeners.write().await.remove(id)
    }

    /// Looks up a listener by id.
    pub async fn get(&self, id: &str) -> Option<Listener> {
        self.listeners.read().await.get(id).cloned()
    }

    /// All listeners, ordered by id.
    pub async fn list(&self) -> Vec<Listener> {
        self.listeners.read().await.values().cloned().collect()
    }
}

#[async_trait]
impl ListenerStore for InMemoryListenerStore {
    async fn find_by_kind(&self, kind: EventKind) -> Result<Vec<Listener>, StoreError> {
        Ok(self
            .listeners
            .read()
            .await
            .values()
            .filter(|l| l.matches(kind))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listeners::NotifierConfig;

    fn listener(id: &str, kinds: &[&str]) -> Listener {
        Listener::new(id, kinds.iter().copied(), "test", NotifierConfig::new()).unwrap()
    }

    #[tokio::test]
    async fn test_insert_replaces_by_id() {
        let store = InMemoryListenerStore::new();
        assert!(store.insert(listener("a", &["repo.sync.start"])).await.is_none());
        let prev = store.insert(listener("a", &["*"])).await;
        assert_eq!(prev.map(|l| l.is_wildcard()), Some(false));
        assert_eq!(store.list().await.len(), 1);
        assert!(store.get("a").await.is_some_and(|l| l.is_wildcard()));
    }

    #[tokio::test]
    async fn test_find_by_kind_includes_wildcard() {
        let store = InMemoryListenerStore::with_listeners([
            listener("a", &["repo.sync.start"]),
            listener("b", &["repo.publish.start"]),
            listener("c", &["*"]),
        ]);

        let ids: Vec<String> = store
            .find_by_kind(EventKind::RepoSyncStarted)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id().to_string())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemoryListenerStore::with_listeners([listener("a", &["*"])]);
        assert!(store.remove("a").await.is_some());
        assert!(store.remove("a").await.is_none());
        assert!(
            store
                .find_by_kind(EventKind::RepoSyncFinished)
                .await
                .unwrap()
                .is_empty()
        );
    }
}
