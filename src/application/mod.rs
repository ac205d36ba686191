//! Application layer orchestrating the domain store.
//!
//! # Modules
//!
//! - [`services`] - [`services::Redirector`], the single-lock owner of the store
//!
//! Services take store implementations as constructor arguments, so tests can
//! substitute `mockall` mocks for the in-memory backend.

pub mod services;
