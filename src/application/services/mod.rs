//! Application services.

mod redirector;

pub use redirector::{Redirector, RedirectorSession};
