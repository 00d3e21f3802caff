//! Error types for toolshelf
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in toolshelf
#[derive(Debug, Error)]
pub enum ToolshelfError {
    /// Tool id not present in the catalog
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Catalog document could not be loaded or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Language pack could not be loaded or parsed
    #[error("Language pack error: {0}")]
    Language(String),

    /// Settings file error
    #[error("Settings error: {0}")]
    Settings(String),

    /// HTTP fetch error
    #[error("Fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for toolshelf operations
pub type Result<T> = std::result::Result<T, ToolshelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_not_found_error() {
        let err = ToolshelfError::ToolNotFound("obsidian".to_string());
        assert_eq!(err.to_string(), "Tool not found: obsidian");
    }

    #[test]
    fn test_catalog_error() {
        let err = ToolshelfError::Catalog("missing tools array".to_string());
        assert!(err.to_string().contains("missing tools array"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ToolshelfError = io_err.into();
        assert!(matches!(err, ToolshelfError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ToolshelfError = json_err.into();
        assert!(matches!(err, ToolshelfError::Json(_)));
    }
}
