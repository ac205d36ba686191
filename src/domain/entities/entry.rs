//! Entry entity: one shortened URL held by the store.

/// A single `(index, url)` pair.
///
/// Entries are never mutated once created. They disappear only when the whole
/// store is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub index: i64,
    pub url: String,
}

impl Entry {
    /// Creates a new Entry instance.
    pub fn new(index: i64, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }
}
