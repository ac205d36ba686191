//! Sequential index assignment over a single-lock store.

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use crate::domain::entities::Entry;
use crate::domain::repositories::UrlStore;
use crate::error::AppError;

/// Owns the store and the one lock that serialises every request.
///
/// Handlers call [`Redirector::lock`] at the start of request handling and keep
/// the returned [`RedirectorSession`] alive until their response is built, so
/// all operations run one at a time and index assignment is totally ordered.
pub struct Redirector {
    store: Mutex<Box<dyn UrlStore>>,
    index_limit: i64,
}

impl Redirector {
    /// Creates a redirector whose indices may grow up to `i64::MAX`.
    pub fn new(store: impl UrlStore + 'static) -> Self {
        Self::with_index_limit(store, i64::MAX)
    }

    /// Creates a redirector with a custom index ceiling.
    ///
    /// When the next index would equal `index_limit` the whole store is wiped
    /// and numbering restarts at 1.
    pub fn with_index_limit(store: impl UrlStore + 'static, index_limit: i64) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
            index_limit,
        }
    }

    /// Acquires the store lock.
    pub async fn lock(&self) -> RedirectorSession<'_> {
        RedirectorSession {
            store: self.store.lock().await,
            index_limit: self.index_limit,
        }
    }
}

/// Exclusive access to the store for the duration of one request.
pub struct RedirectorSession<'a> {
    store: MutexGuard<'a, Box<dyn UrlStore>>,
    index_limit: i64,
}

impl RedirectorSession<'_> {
    /// Stores `url` under the next index and returns that index.
    ///
    /// The next index is `len + 1`. Reaching the index limit discards every
    /// existing entry first, so the new entry is stored under 1.
    pub fn shorten(&mut self, url: String) -> i64 {
        let count = i64::try_from(self.store.len()).unwrap_or(i64::MAX);
        let mut index = count.saturating_add(1);

        if index >= self.index_limit {
            warn!(
                discarded = count,
                index_limit = self.index_limit,
                "Index limit reached, wiping store"
            );
            self.store.clear();
            index = 1;
        }

        debug!(index, url = %url, "Storing entry");
        self.store.insert(index, url);
        info!(index, "Entry created");

        index
    }

    /// Returns the URL stored under `index`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry has that index.
    pub fn resolve(&self, index: i64) -> Result<String, AppError> {
        self.store
            .get(index)
            .ok_or_else(|| AppError::not_found(format!("no entry with index {index}")))
    }

    /// Discards every entry. Numbering restarts at 1.
    pub fn clear(&mut self) {
        let discarded = self.store.len();
        self.store.clear();
        info!(discarded, "Store cleared");
    }

    /// Snapshot of all entries in unspecified order.
    pub fn entries(&self) -> Vec<Entry> {
        self.store.entries()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if no entries are held.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlStore;
    use crate::infrastructure::memory::MemoryUrlStore;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_shorten_assigns_sequential_indices() {
        let redirector = Redirector::new(MemoryUrlStore::new());
        let mut session = redirector.lock().await;

        assert_eq!(session.shorten("https://a.example".to_string()), 1);
        assert_eq!(session.shorten("https://b.example".to_string()), 2);
        assert_eq!(session.shorten("https://c.example".to_string()), 3);
        assert_eq!(session.len(), 3);
    }

    #[tokio::test]
    async fn test_shorten_uses_len_plus_one() {
        let mut mock_store = MockUrlStore::new();

        mock_store.expect_len().times(1).returning(|| 41);
        mock_store
            .expect_insert()
            .with(eq(42), eq("https://example.com".to_string()))
            .times(1)
            .return_const(());
        mock_store.expect_clear().never();

        let redirector = Redirector::new(mock_store);
        let mut session = redirector.lock().await;

        assert_eq!(session.shorten("https://example.com".to_string()), 42);
    }

    #[tokio::test]
    async fn test_shorten_wipes_store_at_index_limit() {
        let redirector = Redirector::with_index_limit(MemoryUrlStore::new(), 3);
        let mut session = redirector.lock().await;

        assert_eq!(session.shorten("https://a.example".to_string()), 1);
        assert_eq!(session.shorten("https://b.example".to_string()), 2);

        // 2 + 1 hits the limit
        assert_eq!(session.shorten("https://c.example".to_string()), 1);
        assert_eq!(session.len(), 1);
        assert_eq!(session.resolve(1).unwrap(), "https://c.example");
        assert!(session.resolve(2).is_err());
    }

    #[tokio::test]
    async fn test_shorten_at_limit_clears_before_insert() {
        let mut mock_store = MockUrlStore::new();
        let mut seq = mockall::Sequence::new();

        mock_store
            .expect_len()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| (i64::MAX - 1) as usize);
        mock_store
            .expect_clear()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mock_store
            .expect_insert()
            .with(eq(1), eq("https://example.com".to_string()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let redirector = Redirector::new(mock_store);
        let mut session = redirector.lock().await;

        assert_eq!(session.shorten("https://example.com".to_string()), 1);
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let redirector = Redirector::new(MemoryUrlStore::new());
        let session = redirector.lock().await;

        let result = session.resolve(1);
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_returns_url_verbatim() {
        let redirector = Redirector::new(MemoryUrlStore::new());
        let mut session = redirector.lock().await;

        let index = session.shorten("HTTPS://Example.COM:443/a b#frag".to_string());

        assert_eq!(
            session.resolve(index).unwrap(),
            "HTTPS://Example.COM:443/a b#frag"
        );
    }

    #[tokio::test]
    async fn test_clear_restarts_numbering() {
        let redirector = Redirector::new(MemoryUrlStore::new());
        let mut session = redirector.lock().await;

        session.shorten("https://a.example".to_string());
        session.shorten("https://b.example".to_string());
        session.clear();

        assert!(session.is_empty());
        assert!(session.resolve(1).is_err());
        assert_eq!(session.shorten("https://c.example".to_string()), 1);
    }

    #[tokio::test]
    async fn test_lock_serialises_sessions() {
        let redirector = std::sync::Arc::new(Redirector::new(MemoryUrlStore::new()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let redirector = redirector.clone();
            handles.push(tokio::spawn(async move {
                let mut session = redirector.lock().await;
                session.shorten(format!("https://{i}.example"))
            }));
        }

        let mut indices = Vec::new();
        for handle in handles {
            indices.push(handle.await.unwrap());
        }
        indices.sort_unstable();

        assert_eq!(indices, (1..=16).collect::<Vec<i64>>());
    }
}
