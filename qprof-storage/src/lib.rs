//! SQLite persistence for quality profiles.
//!
//! The exchange crate never touches SQL directly: it goes through
//! `Datastore` for the unit-of-work boundary and through the query
//! functions in `queries` for reads and writes.

pub mod connection;
pub mod migrations;
pub mod queries;

pub use connection::Datastore;
