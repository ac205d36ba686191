//! HTTP API layer.
//!
//! Translates requests into [`crate::application::services::Redirector`]
//! operations and formats the responses.
//!
//! # Modules
//!
//! - [`dto`] - Request body decoding and validation
//! - [`extract`] - Custom extractors
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
