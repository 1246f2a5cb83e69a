//! HS256 token signing and verification service

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::domain::entities::token::{Claims, RESERVED_CLAIM_NAMES};
use crate::errors::{ConfigError, InvalidTokenReason, TokenError, TokenResult};

use super::config::TokenServiceConfig;
use super::traits::{FailureLoggerTrait, TracingFailureLogger};

/// Service for issuing and verifying JWT tokens
///
/// Stateless between calls: the configuration fixed at construction is the
/// only state, so one instance can be shared across threads freely.
pub struct TokenService<L: FailureLoggerTrait = TracingFailureLogger> {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    logger: L,
}

impl TokenService<TracingFailureLogger> {
    /// Creates a new token service reporting failures via `tracing`
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance, or a `ConfigError` when the
    /// configuration fails the environment secret policy
    pub fn new(config: TokenServiceConfig) -> Result<Self, ConfigError> {
        Self::with_logger(config, TracingFailureLogger)
    }
}

impl<L: FailureLoggerTrait> TokenService<L> {
    /// Creates a new token service with an explicit failure logger
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    /// * `logger` - Failure log sink
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance or a `ConfigError`
    pub fn with_logger(config: TokenServiceConfig, logger: L) -> Result<Self, ConfigError> {
        if config.token_expiry_seconds <= 0 {
            return Err(ConfigError::NonPositiveLifetime);
        }

        let secret = config.resolve_secret()?;
        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Tokens stay valid through their expiry second, no clock skew allowance
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            logger,
        })
    }

    /// Signs a claims payload into a JWT
    ///
    /// The payload must serialize to a JSON object; its fields are embedded
    /// flat in the token next to the `iat` and `exp` stamps added here.
    ///
    /// # Arguments
    ///
    /// * `payload` - Serializable claims payload (e.g. user id, role)
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The signed compact token
    /// * `Err(TokenError::Issuance)` - Payload not serializable, not an
    ///   object, carrying reserved temporal fields, or encoding failed
    pub fn sign<T: Serialize>(&self, payload: &T) -> TokenResult<String> {
        let custom = match serde_json::to_value(payload) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                self.logger.error(
                    "Failed to sign token",
                    "claims payload did not serialize to a JSON object",
                );
                return Err(TokenError::Issuance);
            }
            Err(e) => {
                self.logger.error("Failed to sign token", &e.to_string());
                return Err(TokenError::Issuance);
            }
        };

        for name in RESERVED_CLAIM_NAMES {
            if custom.contains_key(name) {
                self.logger.error(
                    "Failed to sign token",
                    &format!("claims payload must not set reserved field \"{}\"", name),
                );
                return Err(TokenError::Issuance);
            }
        }

        let claims = Claims::new(custom, self.config.token_expiry_seconds);
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key).map_err(|e| {
            self.logger.error("Failed to sign token", &e.to_string());
            TokenError::Issuance
        })
    }

    /// Verifies a token and returns the embedded claims
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT string to verify
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The decoded claims if signature and expiry check out
    /// * `Err(TokenError::Invalid)` - Token is malformed, tampered, or expired
    pub fn verify(&self, token: &str) -> TokenResult<Claims> {
        self.decode_claims::<Claims>(token)
    }

    /// Verifies a token and deserializes its claims into a caller type
    ///
    /// The target type sees the full claim set, including `iat` and `exp`,
    /// so callers can bind tokens straight onto their own claim structs.
    ///
    /// # Arguments
    ///
    /// * `token` - The compact JWT string to verify
    ///
    /// # Returns
    ///
    /// * `Ok(T)` - The decoded claims if signature and expiry check out
    /// * `Err(TokenError::Invalid)` - Token is malformed, tampered, or expired
    pub fn verify_as<T: DeserializeOwned>(&self, token: &str) -> TokenResult<T> {
        self.decode_claims::<T>(token)
    }

    fn decode_claims<T: DeserializeOwned>(&self, token: &str) -> TokenResult<T> {
        decode::<T>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        InvalidTokenReason::Expired
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        InvalidTokenReason::SignatureMismatch
                    }
                    _ => InvalidTokenReason::Malformed,
                };
                self.logger
                    .error("Failed to authenticate token", &e.to_string());
                TokenError::Invalid { reason }
            })
    }
}
