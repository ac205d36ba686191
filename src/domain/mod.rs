//! Domain layer containing the entry model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Store trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Index assignment lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
