use thiserror::Error;

/// Input validation errors raised while constructing a builder or a width range.
///
/// These are deterministic failures: retrying with the same input always fails
/// the same way, so callers should fix the input rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Domain could not be parsed into a hostname, even with an `https://` prefix
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain { domain: String, reason: String },

    /// A single width was below zero
    #[error("Width must be greater than or equal to zero, got {0}")]
    NegativeWidth(i32),

    /// Tolerance was below one percent (or not a number)
    #[error("Tolerance must be greater than or equal to one percent (0.01), got {0}")]
    ToleranceTooSmall(f64),

    /// Maximum width was below the minimum width
    #[error("Minimum width {min} must be less than or equal to maximum width {max}")]
    InvertedRange { min: i32, max: i32 },

    /// First negative element of an explicit width list
    #[error("Width values must be positive, found negative width {value} at index {index}")]
    NegativeWidthAtIndex { index: usize, value: i32 },
}

/// Errors that can occur when verifying a signed URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The URL has no trailing `s` parameter
    #[error("Missing signature parameter")]
    MissingSignature,

    /// The `s` parameter is not 32 hex characters
    #[error("Invalid signature format")]
    InvalidSignatureFormat,

    /// The digest does not match the path and query
    #[error("Invalid signature")]
    InvalidSignature,

    /// Verification was requested without a token
    #[error("No signing token configured")]
    MissingToken,

    /// The URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
