//! Ledger error types for withdrawal admission.
//!
//! The `Display` text of every variant is the message shown to API clients.

use royalty_shared::AppError;
use royalty_shared::types::Money;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    // ========== Lookup Errors ==========
    /// Referenced author does not exist.
    #[error("Author not found")]
    AuthorNotFound,

    // ========== Input Errors ==========
    /// `author_id` or `amount` was not supplied.
    #[error("author_id and amount are required")]
    MissingFields,

    /// `amount` was supplied but is not a number.
    #[error("amount must be a number")]
    InvalidAmount,

    /// `amount` is under the minimum withdrawal.
    #[error("Minimum withdrawal amount is {minimum}")]
    BelowMinimum {
        /// The minimum accepted amount.
        minimum: Money,
    },

    // ========== Balance Errors ==========
    /// `amount` exceeds the author's current balance.
    #[error("Insufficient balance")]
    InsufficientBalance {
        /// Amount requested.
        requested: Money,
        /// Balance before the request.
        available: Money,
    },
}

impl LedgerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::BelowMinimum { .. } => "BELOW_MINIMUM",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - invalid input and balance errors
            Self::MissingFields
            | Self::InvalidAmount
            | Self::BelowMinimum { .. }
            | Self::InsufficientBalance { .. } => 400,

            // 404 Not Found
            Self::AuthorNotFound => 404,
        }
    }

    /// Returns true if the request itself was malformed.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::MissingFields | Self::InvalidAmount | Self::BelowMinimum { .. }
        )
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::AuthorNotFound => Self::NotFound(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}
