//! Infrastructure layer implementing the domain store traits.
//!
//! # Modules
//!
//! - [`memory`] - Process-local `HashMap` store

pub mod memory;
