//! # Redirector
//!
//! A tiny URL shortener. Clients POST a long URL and get back a short alias of
//! the form `{scheme}://{host}/{index}`; requesting the alias answers with a
//! 303 redirect to the original URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entry entity and store trait
//! - **Application Layer** ([`application`]) - [`application::services::Redirector`],
//!   which owns the store behind one lock and assigns indices
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store
//! - **API Layer** ([`api`]) - Handlers, request DTO, extractors, tracing
//! - **Web Layer** ([`web`]) - HTML page for browsing and submitting URLs
//!
//! ## Behaviour
//!
//! - Indices are `count + 1`, so they restart at 1 after a clear
//! - All requests are serialised through a single lock
//! - Nothing is persisted; a restart loses every entry
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- -l :6868
//! curl -d '{"url":"https://example.com"}' localhost:6868/
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::Redirector;
    pub use crate::domain::entities::Entry;
    pub use crate::domain::repositories::UrlStore;
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::MemoryUrlStore;
    pub use crate::state::AppState;
}
