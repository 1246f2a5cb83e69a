//! Configuration for the token service

use acq_shared::config::{Environment, JwtConfig, DEV_FALLBACK_SECRET};

use crate::domain::entities::token::DEFAULT_TOKEN_EXPIRY_SECONDS;
use crate::errors::ConfigError;

/// Minimum secret length accepted in production (full HS256 key block)
pub(crate) const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Token expiry in seconds
    pub token_expiry_seconds: i64,
    /// Environment the service runs in; drives the secret policy
    pub environment: Environment,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: DEV_FALLBACK_SECRET.to_string(),
            token_expiry_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
            environment: Environment::Development,
        }
    }
}

impl TokenServiceConfig {
    /// Builds a service configuration from app-level JWT settings
    ///
    /// # Arguments
    ///
    /// * `jwt` - Application JWT configuration
    /// * `environment` - Environment the service runs in
    pub fn from_jwt_config(jwt: &JwtConfig, environment: Environment) -> Self {
        Self {
            secret: jwt.secret.clone(),
            token_expiry_seconds: jwt.token_expiry,
            environment,
        }
    }

    /// Resolves the signing secret under the environment secret policy
    ///
    /// Development falls back to the built-in development secret when no
    /// secret is configured, with a warning. Every other environment requires
    /// an explicit, non-default secret; production additionally enforces a
    /// minimum length.
    pub(crate) fn resolve_secret(&self) -> Result<String, ConfigError> {
        if self.secret.is_empty() {
            if self.environment.is_development() {
                tracing::warn!(
                    event = "jwt_secret_fallback",
                    "No JWT secret configured; using built-in development secret"
                );
                return Ok(DEV_FALLBACK_SECRET.to_string());
            }
            return Err(ConfigError::MissingSecret {
                environment: self.environment,
            });
        }

        if self.secret == DEV_FALLBACK_SECRET && !self.environment.is_development() {
            return Err(ConfigError::DefaultSecret {
                environment: self.environment,
            });
        }

        if self.environment.is_production() && self.secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ConfigError::WeakSecret {
                actual: self.secret.len(),
                minimum: MIN_PRODUCTION_SECRET_BYTES,
            });
        }

        Ok(self.secret.clone())
    }
}
