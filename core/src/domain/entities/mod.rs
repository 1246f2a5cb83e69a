//! Domain entities representing core business objects.

pub mod token;

// Re-export commonly used types
pub use token::{Claims, DEFAULT_TOKEN_EXPIRY_SECONDS, RESERVED_CLAIM_NAMES};
