//! Error types for the field registry
//!
//! Provides error handling for:
//! - Catalog parsing (file → catalog document)
//! - Field validation (catalog document → registry)

use std::path::PathBuf;

/// Errors while reading or parsing a catalog
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No parser registered for file extension
    #[error("no catalog parser registered for extension: '{0}'")]
    NoParserForExtension(String),

    /// Syntax error in catalog source
    #[error("syntax error in {path}: {message}")]
    SyntaxError { path: PathBuf, message: String },

    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog declares a schema version this build does not understand
    #[error("unsupported catalog version {found} (supported: {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

impl ParseError {
    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::SyntaxError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Field data rejected at construction time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Field id is empty or whitespace
    #[error("field id cannot be empty")]
    EmptyId,

    /// Field label is empty or whitespace
    #[error("field '{field}' has an empty label")]
    EmptyLabel { field: String },

    /// Two fields share an id
    #[error("duplicate field id: {id}")]
    DuplicateField { id: String },

    /// Canonical definition has a blank type
    #[error("field '{field}' has a blank canonical type")]
    BlankCanonicalType { field: String },

    /// Service name is empty or whitespace
    #[error("field '{field}' has a service with an empty name (position {index})")]
    EmptyServiceName { field: String, index: usize },

    /// Service definition has a blank type
    #[error("service '{service}' of field '{field}' has a blank type")]
    BlankServiceType { field: String, service: String },

    /// Two services of the same field share a name
    #[error("field '{field}' lists service '{service}' more than once")]
    DuplicateService { field: String, service: String },
}

/// Combined registry error
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type alias for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;
