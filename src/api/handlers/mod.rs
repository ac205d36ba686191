//! HTTP request handlers for the JSON/plain-text endpoints.

pub mod clear;
pub mod create;
pub mod fallback;
pub mod redirect;

pub use clear::clear_handler;
pub use create::create_handler;
pub use fallback::fallback_handler;
pub use redirect::redirect_handler;
