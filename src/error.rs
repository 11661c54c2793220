//! Error types for the radix converter.

use thiserror::Error;

use crate::encoding::Encoding;

/// Errors that can occur while handling a query
#[derive(Debug, Error)]
pub enum RadixError {
    /// The query argument was empty
    #[error("No input")]
    EmptyInput,

    /// The argument is not a literal of the source encoding
    #[error("Value {value} is not a {encoding} number.")]
    InvalidNumber { value: String, encoding: Encoding },

    /// The keyword matches none of the configured keywords
    #[error("Unrecognized keyword: {0}")]
    UnrecognizedKeyword(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard operation errors
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for radix operations
pub type RadixResult<T> = Result<T, RadixError>;
