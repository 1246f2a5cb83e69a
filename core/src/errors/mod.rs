//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{ConfigError, InvalidTokenReason, TokenError};

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;
