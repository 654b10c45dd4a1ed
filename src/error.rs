//! Error types for Comanda
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Comanda operations
pub type ComandaResult<T> = Result<T, ComandaError>;

/// Main error type for Comanda operations
#[derive(Error, Debug)]
pub enum ComandaError {
    /// A dish with this identifier is already on the menu
    #[error("dish '{id}' already exists")]
    DuplicateId { id: String },

    /// Caller-supplied value could not be accepted
    #[error("invalid {field}: {message}")]
    InvalidInput { field: &'static str, message: String },

    /// No dish with this identifier
    #[error("dish '{id}' not found")]
    DishNotFound { id: String },

    /// No order with this number in the current session
    #[error("order #{number} not found")]
    OrderNotFound { number: u32 },

    /// Dish exists but is marked as not available
    #[error("dish '{id}' is not available")]
    DishUnavailable { id: String },

    /// Order submitted without any line items
    #[error("order has no items")]
    EmptyOrder,

    /// A report was requested but the order log is empty
    #[error("no orders registered")]
    NoOrders,

    /// Every order number has been used; the log must be cleared first
    #[error("no order numbers left")]
    OrderNumbersExhausted,

    /// Closing report save requested before one was generated
    #[error("no closing report generated yet")]
    NoClosingReport,

    /// Filesystem failure while writing, deleting or listing
    #[error("failed to access {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl ComandaError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        ComandaError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ComandaError::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Validation errors are meant to be corrected by the user and retried
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ComandaError::DuplicateId { .. }
                | ComandaError::InvalidInput { .. }
                | ComandaError::DishUnavailable { .. }
                | ComandaError::EmptyOrder
        )
    }
}
