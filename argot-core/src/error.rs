//! Error types for the argot system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for argot operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ArgotError {
    /// A name was declared twice across the shared option/flag namespace
    #[error("name already declared: {0}")]
    NameCollision(String),

    /// An undeclared option or flag name was queried or mutated
    #[error("no option or flag declared as: {0}")]
    NotFound(String),

    /// An option value was assigned a second time
    #[error("option already set: {0}")]
    AlreadySet(String),

    /// A recognized option token was not followed by a usable value token
    #[error("missing value for option {option}, next token was {found:?}")]
    MissingOptionValue {
        option: String,
        found: Option<String>,
    },

    /// One or more required options were never assigned during parsing
    #[error("missing required option(s): {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    /// A schema document could not be read or decoded
    #[error("schema error: {0}")]
    Schema(String),
}

/// Result type alias for argot operations
pub type Result<T> = std::result::Result<T, ArgotError>;
