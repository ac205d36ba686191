//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::Redirector;

#[derive(Clone)]
pub struct AppState {
    pub redirector: Arc<Redirector>,
    /// Trust `X-Forwarded-Proto` when deciding the short URL scheme.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(redirector: Arc<Redirector>, behind_proxy: bool) -> Self {
        Self {
            redirector,
            behind_proxy,
        }
    }
}
