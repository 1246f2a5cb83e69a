//! Unit tests for token service configuration

use acq_shared::config::{Environment, JwtConfig, DEV_FALLBACK_SECRET};

use crate::errors::ConfigError;
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_config(secret: &str, environment: Environment) -> TokenServiceConfig {
    TokenServiceConfig {
        secret: secret.to_string(),
        environment,
        ..Default::default()
    }
}

#[test]
fn test_default_config_builds_in_development() {
    assert!(TokenService::new(TokenServiceConfig::default()).is_ok());
}

#[test]
fn test_missing_secret_falls_back_in_development() {
    let service = TokenService::new(create_config("", Environment::Development));

    assert!(service.is_ok());
}

#[test]
fn test_missing_secret_rejected_in_staging() {
    let result = TokenService::new(create_config("", Environment::Staging));

    assert_eq!(
        result.err(),
        Some(ConfigError::MissingSecret {
            environment: Environment::Staging
        })
    );
}

#[test]
fn test_missing_secret_rejected_in_production() {
    let result = TokenService::new(create_config("", Environment::Production));

    assert_eq!(
        result.err(),
        Some(ConfigError::MissingSecret {
            environment: Environment::Production
        })
    );
}

#[test]
fn test_default_secret_rejected_outside_development() {
    let result = TokenService::new(create_config(DEV_FALLBACK_SECRET, Environment::Production));

    assert_eq!(
        result.err(),
        Some(ConfigError::DefaultSecret {
            environment: Environment::Production
        })
    );
}

#[test]
fn test_default_secret_allowed_in_development() {
    let service = TokenService::new(create_config(DEV_FALLBACK_SECRET, Environment::Development));

    assert!(service.is_ok());
}

#[test]
fn test_short_secret_rejected_in_production() {
    let result = TokenService::new(create_config("too-short", Environment::Production));

    assert_eq!(
        result.err(),
        Some(ConfigError::WeakSecret {
            actual: 9,
            minimum: 32
        })
    );
}

#[test]
fn test_short_secret_accepted_in_staging() {
    let service = TokenService::new(create_config("staging-secret", Environment::Staging));

    assert!(service.is_ok());
}

#[test]
fn test_strong_secret_accepted_in_production() {
    let service = TokenService::new(create_config(
        "an-operations-managed-secret-with-length",
        Environment::Production,
    ));

    assert!(service.is_ok());
}

#[test]
fn test_non_positive_lifetime_rejected() {
    let mut config = TokenServiceConfig::default();
    config.token_expiry_seconds = 0;
    assert_eq!(
        TokenService::new(config).err(),
        Some(ConfigError::NonPositiveLifetime)
    );

    let mut config = TokenServiceConfig::default();
    config.token_expiry_seconds = -86_400;
    assert_eq!(
        TokenService::new(config).err(),
        Some(ConfigError::NonPositiveLifetime)
    );
}

#[test]
fn test_from_jwt_config() {
    let jwt = JwtConfig::new("api-gateway-secret").with_expiry_days(2);
    let config = TokenServiceConfig::from_jwt_config(&jwt, Environment::Staging);

    assert_eq!(config.secret, "api-gateway-secret");
    assert_eq!(config.token_expiry_seconds, 172_800);
    assert_eq!(config.environment, Environment::Staging);
}
