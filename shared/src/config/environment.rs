//! Runtime environment detection
//!
//! The active environment drives the token secret policy, so the enum lives
//! in shared config where every server crate can reach it.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Process variables probed by `from_env`, in order
const ENVIRONMENT_VARS: [&str; 3] = ["ENVIRONMENT", "ENV", "RUST_ENV"];

/// Deployment environment the server runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development machines and CI
    Development,
    /// Pre-production deployments
    Staging,
    /// Live deployments
    Production,
}

impl Environment {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    /// True when running in development
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// True when running in staging
    pub fn is_staging(&self) -> bool {
        matches!(self, Environment::Staging)
    }

    /// True when running in production
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Detects the environment from process variables
    ///
    /// Probes `ENVIRONMENT`, `ENV`, then `RUST_ENV`; an unset or
    /// unrecognized value resolves to development.
    pub fn from_env() -> Self {
        ENVIRONMENT_VARS
            .into_iter()
            .find_map(|name| env::var(name).ok())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "staging" | "stage" | "test" => Ok(Environment::Staging),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}
