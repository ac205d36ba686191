//! Custom request extractors.

mod origin;

pub use origin::RequestOrigin;
