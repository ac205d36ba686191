//! Dispatch for requests no route matched.

use axum::{
    extract::{Request, State},
    handler::Handler,
    http::Method,
    response::{IntoResponse, Response},
};

use crate::api::handlers::{create_handler, redirect_handler};
use crate::error::AppError;
use crate::state::AppState;

/// Routes unmatched requests by method alone.
///
/// - `POST` on any path creates an entry
/// - `GET`/`HEAD` on any other path is an index lookup, so non-numeric
///   paths such as `/a/b` answer 400
/// - any other method answers 405
pub async fn fallback_handler(State(state): State<AppState>, request: Request) -> Response {
    let method = request.method().clone();

    match method {
        Method::POST => create_handler.call(request, state).await,
        Method::GET | Method::HEAD => redirect_handler.call(request, state).await,
        _ => AppError::MethodNotAllowed.into_response(),
    }
}
