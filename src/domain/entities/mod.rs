//! Core business entities.

mod entry;

pub use entry::Entry;
