//! Common types for streamweld-cdc

use schemars::JsonSchema;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A credential value that is redacted everywhere except at the point of use.
///
/// - `Debug` and `Display` print `[REDACTED]` so connection parameters can be
///   logged without leaking passwords
/// - Serializes as `"***REDACTED***"` so config round-trips never expose it
/// - `expose()` returns the actual value for handing to the connector or the
///   catalog layer
#[derive(Clone)]
pub struct SecretValue(SecretString);

impl SecretValue {
    /// Create a new secret from any string-like value
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecretString::new(value.into().into_boxed_str()))
    }

    /// Expose the underlying value. Use only where the real credential is
    /// required.
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl std::fmt::Display for SecretValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for SecretValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("***REDACTED***")
    }
}

impl<'de> Deserialize<'de> for SecretValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::new(value))
    }
}

impl JsonSchema for SecretValue {
    fn schema_name() -> String {
        "SecretValue".to_string()
    }

    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        let mut schema = gen.subschema_for::<String>();
        if let schemars::schema::Schema::Object(obj) = &mut schema {
            obj.format = Some("password".to_string());
            obj.metadata().description =
                Some("Credential value; redacted in logs and serialized output.".to_string());
        }
        schema
    }
}
