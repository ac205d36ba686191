//! In-memory store backends.

mod memory_url_store;

pub use memory_url_store::MemoryUrlStore;
