//! # Storefront Error Types
//!
//! Unified error type for storefront commands, plus the startup error.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Shell / event source           Rust Backend                            │
//! │  ────────────────────           ────────────                            │
//! │                                                                         │
//! │  "view 9"                                                               │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function  →  Result<T, ApiError>                        │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::ProductNotFound(9) ──────────► ApiError {            │  │
//! │  │                                              code: NOT_FOUND,    │  │
//! │  │                                              message: "..." }    │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Startup (config, catalog) ───────────────► StartupError → exit 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Out-of-range cart removal never reaches this file: the command ignores it.

use serde::Serialize;
use thiserror::Error;

use bazaar_core::CoreError;

/// Error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "CHECKOUT_IN_PROGRESS",
///   "message": "A checkout is already in progress"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id is not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// "Add to cart" with no product selected
    NothingSelected,

    /// Checkout control is hidden for an empty cart
    EmptyCart,

    /// Checkout control is disabled while processing
    CheckoutInProgress,

    /// Unexpected internal state
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            CoreError::NothingSelected => ApiError::new(ErrorCode::NothingSelected, message),
            CoreError::IndexOutOfRange { .. } => ApiError::new(ErrorCode::CartError, message),
            CoreError::EmptyCart => ApiError::new(ErrorCode::EmptyCart, message),
            CoreError::CheckoutInProgress => ApiError::new(ErrorCode::CheckoutInProgress, message),
            CoreError::CheckoutNotStarted => {
                tracing::error!("Checkout finished without being started");
                ApiError::internal(message)
            }
            CoreError::DuplicateProductId(_) | CoreError::Validation(_) => {
                ApiError::validation(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the storefront from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for `StoreConfig`.
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The product list failed validation.
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CoreError),

    /// Reading events or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for startup results.
pub type StartupResult<T> = Result<T, StartupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_codes() {
        assert_eq!(
            ApiError::from(CoreError::ProductNotFound(9)),
            ApiError::new(ErrorCode::NotFound, "Product not found: 9")
        );
        assert_eq!(
            ApiError::from(CoreError::CheckoutInProgress).code,
            ErrorCode::CheckoutInProgress
        );
        assert_eq!(ApiError::from(CoreError::EmptyCart).code, ErrorCode::EmptyCart);
        assert_eq!(
            ApiError::from(CoreError::IndexOutOfRange { index: 3, len: 1 }).code,
            ErrorCode::CartError
        );
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CoreError::CheckoutInProgress);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "CHECKOUT_IN_PROGRESS");
        assert_eq!(json["message"], "A checkout is already in progress");
    }

    #[test]
    fn test_display() {
        let err = ApiError::not_found("Product", 5);
        assert_eq!(err.to_string(), "[NotFound] Product not found: 5");
    }
}
