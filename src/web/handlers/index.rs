//! UI page listing every entry with a submission form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
};

use crate::api::extract::RequestOrigin;
use crate::state::AppState;

/// One table row: short URL, arrow, original URL.
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub short_url: String,
    pub url: String,
}

/// Template for the UI page.
///
/// Renders `templates/index.html`. Askama escapes every interpolated value, so
/// stored URLs cannot inject markup.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub rows: Vec<EntryRow>,
}

/// Renders the UI page.
///
/// # Endpoint
///
/// `GET /`
///
/// Row order follows the store and is unspecified. The page is rendered while
/// the store lock is held.
pub async fn index_handler(State(state): State<AppState>, origin: RequestOrigin) -> Response {
    let session = state.redirector.lock().await;

    let rows = session
        .entries()
        .into_iter()
        .map(|entry| EntryRow {
            short_url: origin.short_url(entry.index),
            url: entry.url,
        })
        .collect();

    IndexTemplate { rows }.into_response()
}
