//! Handler for URL submission.

use axum::{body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::create::CreateRequest;
use crate::api::extract::RequestOrigin;
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under the next index and returns its short URL.
///
/// # Endpoint
///
/// `POST /` (any path is accepted, the method alone selects this handler)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// `200 OK` with a plain-text body such as `http://sho.rt/1`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not JSON, `url` is missing or
/// empty, or `url` does not parse.
pub async fn create_handler(
    State(state): State<AppState>,
    origin: RequestOrigin,
    body: Bytes,
) -> Result<String, AppError> {
    let mut session = state.redirector.lock().await;

    let payload = CreateRequest::from_body(&body)?;
    payload.validate()?;

    let index = session.shorten(payload.url);

    Ok(origin.short_url(index))
}
