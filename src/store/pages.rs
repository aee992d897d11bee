use std::collections::HashMap;

use tokio::sync::{OnceCell, RwLock};
use tracing::debug;

/// JSON-shaped data returned by the backend for a page identifier.
/// The payload shape is owned by the backend, not modeled here.
pub type PagePayload = serde_json::Value;

/// Process-wide cache of fetched page payloads plus a single site slot.
///
/// Constructed once at process start and shared by `Arc` handle. Entries are
/// only removed on forced refetch; the store otherwise retains everything
/// fetched until the process ends.
pub struct PageStore {
    initialized: OnceCell<()>,
    pages: RwLock<HashMap<String, PagePayload>>,
    site: RwLock<Option<PagePayload>>,
}

impl PageStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self {
            initialized: OnceCell::new(),
            pages: RwLock::new(HashMap::new()),
            site: RwLock::new(None),
        }
    }

    /// Initialize the store. Idempotent: side effects run at most once,
    /// repeated calls are cheap no-ops and safe on every retrieval.
    pub async fn init(&self) {
        self.initialized
            .get_or_init(|| async {
                debug!("Page store initialized");
            })
            .await;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.initialized()
    }

    /// Look up a cached page payload by id.
    pub async fn get_page(&self, id: &str) -> Option<PagePayload> {
        self.pages.read().await.get(id).cloned()
    }

    /// Insert a page payload under the given id, replacing any existing entry.
    pub async fn add_page(&self, id: &str, data: PagePayload) {
        self.pages.write().await.insert(id.to_string(), data);
    }

    /// Remove the entry for the given id, if present.
    pub async fn remove_page(&self, id: &str) {
        self.pages.write().await.remove(id);
    }

    /// Set the site-wide metadata slot.
    pub async fn add_site(&self, data: PagePayload) {
        *self.site.write().await = Some(data);
    }

    /// The site-wide metadata, if the home page has been fetched.
    pub async fn site(&self) -> Option<PagePayload> {
        self.site.read().await.clone()
    }
}

impl Default for PageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let store = PageStore::new();
        assert!(!store.is_initialized());

        store.init().await;
        store.add_page("home", json!({"title": "Home"})).await;

        // Repeated init must not clear state or re-run side effects
        store.init().await;
        store.init().await;
        assert!(store.is_initialized());
        assert_eq!(store.get_page("home").await, Some(json!({"title": "Home"})));
    }

    #[tokio::test]
    async fn test_add_and_get_page() {
        let store = PageStore::new();
        assert_eq!(store.get_page("about").await, None);

        store.add_page("about", json!({"title": "About"})).await;
        assert_eq!(
            store.get_page("about").await,
            Some(json!({"title": "About"}))
        );
    }

    #[tokio::test]
    async fn test_add_page_replaces_existing_entry() {
        let store = PageStore::new();
        store.add_page("about", json!({"title": "Old"})).await;
        store.add_page("about", json!({"title": "New"})).await;
        assert_eq!(store.get_page("about").await, Some(json!({"title": "New"})));
    }

    #[tokio::test]
    async fn test_remove_page() {
        let store = PageStore::new();
        store.add_page("about", json!({"title": "About"})).await;
        store.remove_page("about").await;
        assert_eq!(store.get_page("about").await, None);

        // Removing a missing entry is a no-op
        store.remove_page("missing").await;
    }

    #[tokio::test]
    async fn test_site_slot() {
        let store = PageStore::new();
        assert_eq!(store.site().await, None);

        store.add_site(json!({"title": "My Site"})).await;
        assert_eq!(store.site().await, Some(json!({"title": "My Site"})));
    }
}
