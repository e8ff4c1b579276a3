/// Database module for travel-search
///
/// A small SQLite key/value store (sqlx) standing in for browser-local
/// storage. Implements connection pooling.

pub mod connection;
pub mod models;
pub mod queries;

pub use connection::Database;
pub use models::*;
