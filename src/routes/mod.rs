//! The HTTP route handlers for the JSON API.
//!
//! Handlers are thin wrappers: they translate extractors into
//! [service](crate::services) calls and service results into responses.

pub mod categories;
pub mod people;
pub mod reports;
pub mod transactions;
