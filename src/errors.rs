//! Unified error types and result handling.
//!
//! Every failure the storefront can surface is a variant here, so callers
//! can notify the user in plain language. Remote store failures wrap the
//! underlying `sea_orm::DbErr`; there is no retry and no partial-success
//! recovery beyond what `core::sale` documents.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// No customer was selected for a sale
    #[error("no customer selected for this sale")]
    MissingIdentity,

    /// The entered PIN did not match the customer's roster PIN
    #[error("PIN mismatch for '{customer}', purchase cancelled")]
    AuthenticationFailed {
        /// Customer whose PIN check failed
        customer: String,
    },

    /// The requested quantity exceeds the product's current stock
    #[error("insufficient stock: requested {requested}, only {available} available")]
    InsufficientStock {
        /// Units requested
        requested: i64,
        /// Units actually in stock
        available: i64,
    },

    /// Quantity must be at least one; there is no partial fulfillment
    #[error("invalid quantity: {quantity}")]
    InvalidQuantity {
        /// The rejected quantity
        quantity: i64,
    },

    /// A numeric form field did not parse as a non-negative integer
    #[error("invalid numeric input for {field}: '{value}'")]
    InvalidNumber {
        /// Form field name
        field: &'static str,
        /// The rejected raw input
        value: String,
    },

    /// Product lookup by id found nothing
    #[error("product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Sale lookup by id found nothing
    #[error("sale record not found: {id}")]
    SaleNotFound {
        /// The id that was looked up
        id: i64,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Any read or write the remote table store rejected
    #[error("remote store error: {0}")]
    Store(#[from] sea_orm::DbErr),

    /// Environment variable error
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
