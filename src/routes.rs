//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - UI page
//! - `GET  /clear`     - Wipe the store, 303 to `/`
//! - `GET  /{index}`   - 303 to the stored URL
//! - `POST <any path>` - Store a URL, respond with its short URL
//!
//! Anything else goes through [`fallback_handler`]: `GET` on other paths is an
//! index lookup (and therefore 400), other methods get 405.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::{clear_handler, create_handler, fallback_handler, redirect_handler};
use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(create_handler))
        .route("/clear", get(clear_handler).post(create_handler))
        .route("/{index}", get(redirect_handler).post(create_handler))
        .fallback(fallback_handler)
        .with_state(state)
        .layer(api::middleware::tracing::layer())
}
