//! Data Transfer Objects for request deserialization.

pub mod create;
