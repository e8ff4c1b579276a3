/// travel-search library
///
/// Catalog suggestions, exact-match search and a persisted search history
/// for the agency site's search box.

pub mod catalog;
pub mod config;
pub mod core;
pub mod db;
pub mod error;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogEntry};
pub use config::Config;
pub use db::Database;
pub use error::{Result, SearchError};
