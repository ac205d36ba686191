//! Shared helpers.

pub mod url_syntax;
