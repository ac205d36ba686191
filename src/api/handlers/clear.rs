//! Handler for wiping the store.

use axum::{extract::State, response::Redirect};

use crate::state::AppState;

/// Discards every entry and sends the browser back to the UI.
///
/// # Endpoint
///
/// `GET /clear`
///
/// # Response
///
/// `303 See Other` to `/`. There is no confirmation step.
pub async fn clear_handler(State(state): State<AppState>) -> Redirect {
    let mut session = state.redirector.lock().await;
    session.clear();

    Redirect::to("/")
}
