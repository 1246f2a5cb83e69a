//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Authentication and token configuration
//! - `environment` - Environment detection

pub mod auth;
pub mod environment;

// Re-export commonly used types
pub use auth::{JwtConfig, DEV_FALLBACK_SECRET};
pub use environment::Environment;
