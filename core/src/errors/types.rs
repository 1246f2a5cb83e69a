//! Domain-specific error types for token issuance and verification
//!
//! This module provides error type definitions for token operations. Each
//! operation surfaces one normalized error; the underlying library failure is
//! logged at the failure site and never carried inside the error value.

use std::fmt;

use acq_shared::config::Environment;
use acq_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Why a token was rejected during verification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenReason {
    /// Token structure could not be decoded
    Malformed,
    /// Signature does not match the configured secret
    SignatureMismatch,
    /// Token expiry is in the past
    Expired,
}

impl fmt::Display for InvalidTokenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidTokenReason::Malformed => write!(f, "malformed"),
            InvalidTokenReason::SignatureMismatch => write!(f, "signature mismatch"),
            InvalidTokenReason::Expired => write!(f, "expired"),
        }
    }
}

/// Token-related errors
///
/// Signing failures collapse into `Issuance`; verification failures carry the
/// rejection reason so callers and audit logs can distinguish an expired token
/// from a tampered one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token issuance failed")]
    Issuance,

    #[error("Token rejected: {reason}")]
    Invalid { reason: InvalidTokenReason },
}

/// Token service configuration errors
///
/// Raised at service construction, before any token is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No JWT secret configured in {environment}")]
    MissingSecret { environment: Environment },

    #[error("Development fallback secret not allowed in {environment}")]
    DefaultSecret { environment: Environment },

    #[error("JWT secret length ({actual} bytes) is below minimum ({minimum} bytes) for production")]
    WeakSecret { actual: usize, minimum: usize },

    #[error("Token lifetime must be positive")]
    NonPositiveLifetime,
}

impl IntoErrorResponse for TokenError {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            TokenError::Issuance => {
                ErrorResponse::new(error_codes::INTERNAL_ERROR, self.to_string())
            }
            TokenError::Invalid {
                reason: InvalidTokenReason::Expired,
            } => ErrorResponse::new(error_codes::TOKEN_EXPIRED, self.to_string()),
            TokenError::Invalid { reason } => {
                ErrorResponse::new(error_codes::TOKEN_INVALID, self.to_string())
                    .add_detail("reason", reason.to_string())
            }
        }
    }
}
