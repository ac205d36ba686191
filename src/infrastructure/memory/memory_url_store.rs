//! `HashMap`-backed store. Lives for the lifetime of the process.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::entities::Entry;
use crate::domain::repositories::UrlStore;

/// Process-local store with no persistence.
///
/// Contents are lost on restart. Iteration order of [`UrlStore::entries`]
/// follows the hash map and must not be relied on.
#[derive(Debug, Default)]
pub struct MemoryUrlStore {
    urls: HashMap<i64, String>,
}

impl MemoryUrlStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self::default()
    }
}

impl UrlStore for MemoryUrlStore {
    fn len(&self) -> usize {
        self.urls.len()
    }

    fn get(&self, index: i64) -> Option<String> {
        self.urls.get(&index).cloned()
    }

    fn insert(&mut self, index: i64, url: String) {
        self.urls.insert(index, url);
    }

    fn clear(&mut self) {
        self.urls = HashMap::new();
    }

    fn entries(&self) -> Vec<Entry> {
        self.urls
            .iter()
            .map(|(index, url)| Entry::new(*index, url.clone()))
            .collect()
    }
}
