//! Token issuance and verification
//!
//! Everything tokens, in one place:
//! - Signing caller-supplied claims payloads into JWTs (1 day expiry)
//! - Verifying token signature and expiry
//! - Failure logging through an injected logger collaborator

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
pub use traits::{FailureLoggerTrait, TracingFailureLogger};
