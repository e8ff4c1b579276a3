/// Error types for travel-search
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.
///
/// Matching itself never fails; these errors come from storage, catalog
/// files and configuration.

use thiserror::Error;

/// Main error type for travel-search operations
#[derive(Error, Debug)]
pub enum SearchError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be used
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for travel-search operations
pub type Result<T> = std::result::Result<T, SearchError>;

/// Convert SearchError to a user-friendly error message
impl SearchError {
    pub fn user_message(&self) -> String {
        match self {
            SearchError::Database(e) => {
                format!("Could not reach the local store. Please try again. Details: {}", e)
            }
            SearchError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            SearchError::Catalog(msg) => {
                format!("The catalog could not be loaded: {}", msg)
            }
            SearchError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = SearchError::Catalog("unknown entry type 'train'".to_string());
        assert!(err.user_message().contains("train"));

        let err = SearchError::Config("no home directory".to_string());
        assert!(err.user_message().contains("Configuration"));
    }

    #[test]
    fn test_error_display() {
        let err = SearchError::Catalog("missing field `name`".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Catalog error"));
    }
}
