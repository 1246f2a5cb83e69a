//! Token claims entity and its temporal rules.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Token expiration time (1 day)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

/// Claim names owned by the service; caller payloads may not supply them
pub const RESERVED_CLAIM_NAMES: [&str; 2] = ["iat", "exp"];

/// Decoded JWT claim set
///
/// Caller-supplied payload fields are flattened into the token body, so the
/// encoded claims read as one flat JSON object alongside the temporal fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issue time, seconds since the Unix epoch
    pub iat: i64,

    /// Expiry time, seconds since the Unix epoch
    pub exp: i64,

    /// Caller-supplied payload fields
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

impl Claims {
    /// Creates new claims carrying the supplied payload fields
    ///
    /// # Arguments
    ///
    /// * `custom` - Payload fields to embed in the token
    /// * `lifetime_seconds` - Seconds from now until the token expires
    ///
    /// # Returns
    ///
    /// A new `Claims` instance stamped with the current time
    pub fn new(custom: Map<String, Value>, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);

        Self {
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            custom,
        }
    }

    /// True when the expiry second has passed
    ///
    /// Claims are valid through their expiry second; they expire strictly
    /// after `exp`.
    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp();
        now > self.exp
    }

    /// Gets the issue time as a UTC datetime
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    /// Gets the expiry time as a UTC datetime
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Gets a caller-supplied field, deserialized into the requested type
    ///
    /// # Returns
    ///
    /// `Some(T)` if the field exists and deserializes cleanly, `None` otherwise
    pub fn get_custom<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.custom
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("userId".to_string(), json!(42));
        map.insert("role".to_string(), json!("user"));
        map
    }

    #[test]
    fn test_claims_timestamps() {
        let before = Utc::now().timestamp();
        let claims = Claims::new(sample_payload(), DEFAULT_TOKEN_EXPIRY_SECONDS);
        let after = Utc::now().timestamp();

        assert!(claims.iat >= before);
        assert!(claims.iat <= after);
        assert_eq!(claims.exp, claims.iat + DEFAULT_TOKEN_EXPIRY_SECONDS);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expiry_boundary() {
        let mut claims = Claims::new(sample_payload(), DEFAULT_TOKEN_EXPIRY_SECONDS);

        // Expired one second ago
        claims.exp = Utc::now().timestamp() - 1;
        assert!(claims.is_expired());

        // Still valid at the expiry second itself
        claims.exp = Utc::now().timestamp() + 2;
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_claims_datetime_accessors() {
        let claims = Claims::new(sample_payload(), 3600);

        let issued = claims.issued_at().unwrap();
        let expires = claims.expires_at().unwrap();

        assert_eq!(issued.timestamp(), claims.iat);
        assert_eq!(expires - issued, Duration::seconds(3600));
    }

    #[test]
    fn test_claims_custom_accessor() {
        let claims = Claims::new(sample_payload(), DEFAULT_TOKEN_EXPIRY_SECONDS);

        assert_eq!(claims.get_custom::<i64>("userId"), Some(42));
        assert_eq!(claims.get_custom::<String>("role"), Some("user".to_string()));
        assert_eq!(claims.get_custom::<String>("missing"), None);

        // Type mismatch reads as absent
        assert_eq!(claims.get_custom::<String>("userId"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let claims = Claims::new(sample_payload(), DEFAULT_TOKEN_EXPIRY_SECONDS);

        let json = serde_json::to_string(&claims).unwrap();
        let deserialized: Claims = serde_json::from_str(&json).unwrap();

        assert_eq!(claims, deserialized);
    }

    #[test]
    fn test_claims_flat_wire_shape() {
        let claims = Claims::new(sample_payload(), DEFAULT_TOKEN_EXPIRY_SECONDS);

        let value = serde_json::to_value(&claims).unwrap();

        // Payload fields sit next to iat/exp, not under a nested key
        assert_eq!(value["userId"], json!(42));
        assert_eq!(value["role"], json!("user"));
        assert_eq!(value["iat"], json!(claims.iat));
        assert_eq!(value["exp"], json!(claims.exp));
        assert!(value.get("custom").is_none());
    }
}
