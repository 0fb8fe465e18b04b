//! SQLite persistence for the assessment engine.
//!
//! A single serialized write connection plus a small pool of read-only
//! connections, `PRAGMA user_version` migrations, one query module per
//! domain table, and keyset pagination for listing endpoints.

pub mod connection;
pub mod migrations;
pub mod pagination;
pub mod queries;

pub use connection::DatabaseManager;
