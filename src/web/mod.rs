//! Browser UI.
//!
//! A single server-rendered page (Askama) listing all entries, with a form that
//! submits new URLs from client-side script and a link to clear the store.

pub mod handlers;
