//! # Acquisitions Core
//!
//! Core business logic and domain layer for the Acquisitions backend.
//! This crate contains domain entities, business services, and error types
//! that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, RESERVED_CLAIM_NAMES};
pub use errors::{ConfigError, InvalidTokenReason, TokenError, TokenResult};
pub use services::token::{
    FailureLoggerTrait, TokenService, TokenServiceConfig, TracingFailureLogger,
};
