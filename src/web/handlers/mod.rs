//! HTML template rendering handlers.

mod index;

pub use index::{EntryRow, IndexTemplate, index_handler};
