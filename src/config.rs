//! CDC source configuration model
//!
//! One `CdcSourceConfig` describes one ingestion job: which dialect to use,
//! how to reach the source database, what to capture, and where in the change
//! log to start. It is a pure data holder, constructed once per job
//! definition, bound read-only to a single builder instance, never mutated.

use crate::error::{Error, Result};
use crate::types::SecretValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

/// Separator for multi-schema `database` values, e.g. `"inventory,billing"`.
pub const SCHEMA_SEPARATOR: &str = ",";

/// Connection and startup parameters for one CDC source.
///
/// Only `dialect` is validated up front: it must name a registered builder.
/// Connection fields stay optional here and are enforced by the connector
/// boundary when a runtime source is actually constructed.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate, JsonSchema)]
pub struct CdcSourceConfig {
    /// Dialect identity key, e.g. `"mysql-cdc"`. Must match a registered
    /// builder's handle.
    #[validate(length(min = 1))]
    pub dialect: String,

    /// Source database host
    #[serde(default)]
    pub hostname: Option<String>,

    /// Source database port
    #[serde(default)]
    pub port: Option<u16>,

    /// Username
    #[serde(default)]
    pub username: Option<String>,

    /// Password (redacted in logs and serialized output)
    #[serde(default)]
    pub password: Option<SecretValue>,

    /// Schemas to capture, separated by [`SCHEMA_SEPARATOR`]. Empty or absent
    /// captures every schema the connector's permissions allow.
    #[serde(default)]
    pub database: Option<String>,

    /// Table filter pattern. Empty or absent captures all tables in the
    /// selected schemas.
    #[serde(default)]
    pub table: Option<String>,

    /// Startup position as written in the job definition. Normalized
    /// case-insensitively at build time; unrecognized values fall back to
    /// the latest position.
    #[serde(default)]
    pub startup_mode: Option<String>,

    /// Dialect-specific options passed through to the underlying connector
    /// unchanged.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl CdcSourceConfig {
    /// Parse and validate a config from a raw YAML job definition.
    pub fn from_yaml(value: &serde_yaml::Value) -> Result<Self> {
        let config: Self = serde_yaml::from_value(value.clone())?;
        config
            .validate()
            .map_err(|e| Error::config(e.to_string()))?;
        Ok(config)
    }

    /// The `database` field, with absent and empty treated alike.
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref().filter(|s| !s.is_empty())
    }

    /// The `table` filter, with absent and empty treated alike.
    pub fn table(&self) -> Option<&str> {
        self.table.as_deref().filter(|s| !s.is_empty())
    }

    /// The raw startup mode, with absent and empty treated alike.
    pub fn startup_mode(&self) -> Option<&str> {
        self.startup_mode.as_deref().filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
            dialect: mysql-cdc
            hostname: db.example.com
            port: 3306
            username: repl
            password: secret
            database: inventory
        "#;
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        let config = CdcSourceConfig::from_yaml(&value).unwrap();

        assert_eq!(config.dialect, "mysql-cdc");
        assert_eq!(config.hostname.as_deref(), Some("db.example.com"));
        assert_eq!(config.port, Some(3306));
        assert_eq!(config.database(), Some("inventory"));
        assert!(config.table().is_none());
        assert!(config.startup_mode().is_none());
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_config_missing_dialect_rejected() {
        let value: serde_yaml::Value = serde_yaml::from_str("dialect: \"\"").unwrap();
        let err = CdcSourceConfig::from_yaml(&value).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_empty_and_absent_optionals_are_equivalent() {
        let mut config = CdcSourceConfig {
            dialect: "mysql-cdc".to_string(),
            ..Default::default()
        };
        assert!(config.database().is_none());

        config.database = Some(String::new());
        config.table = Some(String::new());
        config.startup_mode = Some(String::new());
        assert!(config.database().is_none());
        assert!(config.table().is_none());
        assert!(config.startup_mode().is_none());
    }

    #[test]
    fn test_properties_passthrough() {
        let yaml = r#"
            dialect: mysql-cdc
            properties:
              decimal.handling.mode: string
              snapshot.locking.mode: none
        "#;
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        let config = CdcSourceConfig::from_yaml(&value).unwrap();
        assert_eq!(
            config.properties.get("decimal.handling.mode").map(String::as_str),
            Some("string")
        );
        assert_eq!(config.properties.len(), 2);
    }

    #[test]
    fn test_password_not_serialized() {
        let config = CdcSourceConfig {
            dialect: "mysql-cdc".to_string(),
            password: Some(SecretValue::new("hunter2")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hunter2"));
    }
}
