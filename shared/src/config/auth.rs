//! JWT configuration shared across server crates

use serde::{Deserialize, Serialize};

/// Fallback signing secret used when no secret is configured in development.
///
/// Never valid outside development; token service construction rejects it
/// in staging and production.
pub const DEV_FALLBACK_SECRET: &str = "development-secret-please-change-in-production";

/// Application-level JWT settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric signing secret
    pub secret: String,

    /// Token lifetime in seconds
    pub token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEV_FALLBACK_SECRET),
            token_expiry: 86_400, // 1 day
        }
    }
}

impl JwtConfig {
    /// Builds a configuration around an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Sets the token lifetime in days
    pub fn with_expiry_days(mut self, days: i64) -> Self {
        self.token_expiry = days * 86_400;
        self
    }

    /// Reads settings from process environment variables
    ///
    /// Reads `JWT_SECRET` and `JWT_TOKEN_EXPIRY` (seconds). A missing
    /// `JWT_SECRET` yields an empty secret; the token service decides at
    /// construction whether that is acceptable for the active environment.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        let token_expiry = std::env::var("JWT_TOKEN_EXPIRY")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(86_400);

        Self {
            secret,
            token_expiry,
        }
    }

    /// True when the secret is the built-in development fallback
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEV_FALLBACK_SECRET
    }
}
