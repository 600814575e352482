//! Error types for the struct generator.

use thiserror::Error;

/// Main error type for generation operations.
#[derive(Error, Debug)]
pub enum GenError {
    /// Configuration error (invalid YAML, missing fields, bad DSN, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connection or metadata query error with context
    #[error("Database error: {message}\n  Context: {context}")]
    Database { message: String, context: String },

    /// Requested table is not in the source schema
    #[error("Table {0} does not exist")]
    TableNotFound(String),

    /// Raw column type could not be tokenized
    #[error("Can not determine type: {raw:?}")]
    UnparsableType { raw: String },

    /// IO error (output directory, file writes, schema files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenError {
    /// Create a Database error with context about where it occurred
    pub fn database(message: impl std::fmt::Display, context: impl Into<String>) -> Self {
        GenError::Database {
            message: message.to_string(),
            context: context.into(),
        }
    }

    /// Create an UnparsableType error
    pub fn unparsable(raw: impl Into<String>) -> Self {
        GenError::UnparsableType { raw: raw.into() }
    }

    /// Process exit code for this error.
    ///
    /// 1 for configuration problems, 2 for database and file system failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            GenError::Config(_) | GenError::Yaml(_) | GenError::UnparsableType { .. } => 1,
            GenError::Database { .. }
            | GenError::TableNotFound(_)
            | GenError::Io(_)
            | GenError::Json(_) => 2,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
