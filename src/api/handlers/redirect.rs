//! Handler for short URL redirect.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_syntax::encode_location;

/// Redirects an index to its stored URL.
///
/// # Endpoint
///
/// `GET /{index}`
///
/// The path is percent-decoded, leading slashes are stripped and the rest is
/// parsed as a base-10 integer, so `//7` and `/%37` resolve index 7 while
/// `/a/b` is rejected.
///
/// # Response
///
/// `303 See Other` with `Location` set to the stored URL.
///
/// # Errors
///
/// Returns 400 Bad Request if the path is not an integer.
/// Returns 404 Not Found if no entry has that index.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let session = state.redirector.lock().await;

    let path = percent_decode_str(uri.path())
        .decode_utf8()
        .map_err(|_| AppError::bad_request("path is not valid UTF-8"))?;
    let raw = path.trim_start_matches('/');
    let index: i64 = raw
        .parse()
        .map_err(|_| AppError::bad_request(format!("invalid index {raw:?}")))?;

    let url = session.resolve(index)?;
    debug!(index, url = %url, "Redirecting");

    let location = HeaderValue::from_str(&encode_location(&url))
        .map_err(|_| AppError::bad_request("stored URL is not a valid redirect target"))?;

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}
