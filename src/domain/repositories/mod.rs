//! Store trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure`. Mock implementations are
//! generated via `mockall` for unit tests.

pub mod url_store;

pub use url_store::UrlStore;

#[cfg(test)]
pub use url_store::MockUrlStore;
