//! Store trait for index to URL mappings.

use crate::domain::entities::Entry;

/// Mapping from a positive index to a submitted URL.
///
/// The store itself is not synchronised. Callers reach it only through
/// [`crate::application::services::Redirector`], which owns the single lock
/// guarding every read and write.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryUrlStore`] - `HashMap` backend
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlStore: Send {
    /// Number of entries currently held.
    fn len(&self) -> usize;

    /// Returns true if the store holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the URL stored under `index`.
    fn get(&self, index: i64) -> Option<String>;

    /// Stores `url` under `index`, replacing any previous value.
    fn insert(&mut self, index: i64, url: String);

    /// Discards every entry.
    fn clear(&mut self);

    /// Snapshot of all entries. Order is unspecified.
    fn entries(&self) -> Vec<Entry>;
}
