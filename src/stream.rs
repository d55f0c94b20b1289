//! Streaming-engine boundary
//!
//! The actual streaming engine and the wire-protocol connector live outside
//! this crate. What crosses the boundary is a [`SourceStream`] description
//! (connection options, capture scope, deserialization format, startup
//! position) registered with a [`StreamEnvironment`] under a fixed operator
//! name. Registration is metadata-only; nothing here opens a connection or
//! starts execution.

use crate::error::{Error, Result};
use crate::types::SecretValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position in the source change log from which streaming begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupMode {
    /// Full snapshot of existing data, then stream
    Initial,
    /// Stream from the earliest retained log position
    Earliest,
    /// Stream from the current position (default)
    #[default]
    Latest,
}

impl StartupMode {
    /// Normalize a raw startup-mode string, case-insensitively.
    ///
    /// Total by policy: absent input and unrecognized values both resolve to
    /// [`StartupMode::Latest`] rather than failing.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => match value.to_ascii_uppercase().as_str() {
                "INITIAL" => Self::Initial,
                "EARLIEST" => Self::Earliest,
                "LATEST" => Self::Latest,
                _ => Self::Latest,
            },
            None => Self::Latest,
        }
    }
}

/// Wire representation the connector's deserializer produces for each change
/// event. Fixed per dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFormat {
    /// Structured JSON change events in the Debezium envelope shape
    #[default]
    DebeziumJson,
}

/// Event-time watermark policy attached at source registration.
///
/// CDC event ordering is left to the connector's own position tracking, so
/// the only policy is an explicit no-watermark one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WatermarkStrategy {
    #[default]
    NoWatermarks,
}

/// A fully described runtime source, ready to register with the engine.
#[derive(Debug, Clone)]
pub struct SourceStream {
    /// Dialect handle of the builder that produced this stream
    pub connector: &'static str,
    pub hostname: String,
    pub port: u16,
    pub username: String,
    pub password: SecretValue,
    /// Schemas to capture; empty captures everything the connector may see
    pub databases: Vec<String>,
    /// Table filter pattern; `None` captures all tables in scope
    pub tables: Option<String>,
    pub format: EventFormat,
    pub startup: StartupMode,
    /// Connector passthrough options
    pub properties: HashMap<String, String>,
}

impl SourceStream {
    pub fn builder(connector: &'static str) -> SourceStreamBuilder {
        SourceStreamBuilder::new(connector)
    }
}

/// Connector-side source construction.
///
/// Setters accept optional values unchanged so dialect builders can pass
/// configuration through without re-validating it; the required connection
/// fields are enforced here, at [`build`](SourceStreamBuilder::build), the
/// point where a runtime source actually comes into existence.
#[derive(Debug)]
pub struct SourceStreamBuilder {
    connector: &'static str,
    hostname: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<SecretValue>,
    databases: Vec<String>,
    tables: Option<String>,
    format: EventFormat,
    startup: StartupMode,
    properties: HashMap<String, String>,
}

impl SourceStreamBuilder {
    pub fn new(connector: &'static str) -> Self {
        Self {
            connector,
            hostname: None,
            port: None,
            username: None,
            password: None,
            databases: Vec::new(),
            tables: None,
            format: EventFormat::default(),
            startup: StartupMode::default(),
            properties: HashMap::new(),
        }
    }

    pub fn hostname(mut self, hostname: Option<String>) -> Self {
        self.hostname = hostname;
        self
    }

    pub fn port(mut self, port: Option<u16>) -> Self {
        self.port = port;
        self
    }

    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub fn password(mut self, password: Option<SecretValue>) -> Self {
        self.password = password;
        self
    }

    /// Restrict capture to the given schemas.
    pub fn database_list(mut self, databases: Vec<String>) -> Self {
        self.databases = databases;
        self
    }

    /// Restrict capture to tables matching the given filter.
    pub fn table_list(mut self, tables: impl Into<String>) -> Self {
        self.tables = Some(tables.into());
        self
    }

    pub fn format(mut self, format: EventFormat) -> Self {
        self.format = format;
        self
    }

    pub fn startup(mut self, startup: StartupMode) -> Self {
        self.startup = startup;
        self
    }

    pub fn properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    /// Finalize the source. Absent or empty required connection fields fail
    /// with [`Error::MissingRequiredField`].
    pub fn build(self) -> Result<SourceStream> {
        Ok(SourceStream {
            connector: self.connector,
            hostname: self
                .hostname
                .filter(|v| !v.is_empty())
                .ok_or(Error::MissingRequiredField("hostname"))?,
            port: self.port.ok_or(Error::MissingRequiredField("port"))?,
            username: self
                .username
                .filter(|v| !v.is_empty())
                .ok_or(Error::MissingRequiredField("username"))?,
            password: self.password.ok_or(Error::MissingRequiredField("password"))?,
            databases: self.databases,
            tables: self.tables,
            format: self.format,
            startup: self.startup,
            properties: self.properties,
        })
    }
}

/// Handle to a source operator registered with the streaming engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceHandle {
    /// Name the operator was registered under
    pub operator_name: String,
}

/// The streaming engine as seen from this crate.
///
/// Implementations register the source operator and hand back a handle; they
/// must not start execution or perform I/O against the source database.
pub trait StreamEnvironment {
    fn from_source(
        &mut self,
        stream: SourceStream,
        watermarks: WatermarkStrategy,
        name: &str,
    ) -> SourceHandle;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_mode_normalize_case_insensitive() {
        assert_eq!(StartupMode::normalize(Some("initial")), StartupMode::Initial);
        assert_eq!(StartupMode::normalize(Some("INITIAL")), StartupMode::Initial);
        assert_eq!(StartupMode::normalize(Some("Initial")), StartupMode::Initial);
        assert_eq!(
            StartupMode::normalize(Some("earliest")),
            StartupMode::Earliest
        );
        assert_eq!(StartupMode::normalize(Some("latest")), StartupMode::Latest);
    }

    #[test]
    fn test_startup_mode_unrecognized_falls_back_to_latest() {
        assert_eq!(StartupMode::normalize(Some("bogus")), StartupMode::Latest);
        assert_eq!(StartupMode::normalize(None), StartupMode::Latest);
    }

    fn valid_builder() -> SourceStreamBuilder {
        SourceStream::builder("mysql-cdc")
            .hostname(Some("db".to_string()))
            .port(Some(3306))
            .username(Some("repl".to_string()))
            .password(Some(SecretValue::new("secret")))
    }

    #[test]
    fn test_builder_defaults() {
        let stream = valid_builder().build().unwrap();
        assert_eq!(stream.connector, "mysql-cdc");
        assert_eq!(stream.format, EventFormat::DebeziumJson);
        assert_eq!(stream.startup, StartupMode::Latest);
        assert!(stream.databases.is_empty());
        assert!(stream.tables.is_none());
        assert!(stream.properties.is_empty());
    }

    #[test]
    fn test_builder_missing_required_fields() {
        let err = SourceStream::builder("mysql-cdc").build().unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField("hostname")));

        let err = SourceStream::builder("mysql-cdc")
            .hostname(Some("db".to_string()))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField("port")));

        let err = SourceStream::builder("mysql-cdc")
            .hostname(Some("db".to_string()))
            .port(Some(3306))
            .username(Some(String::new()))
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField("username")));
    }

    #[test]
    fn test_builder_scope() {
        let stream = valid_builder()
            .database_list(vec!["a".to_string(), "b".to_string()])
            .table_list("a.orders")
            .startup(StartupMode::Initial)
            .build()
            .unwrap();
        assert_eq!(stream.databases, ["a", "b"]);
        assert_eq!(stream.tables.as_deref(), Some("a.orders"));
        assert_eq!(stream.startup, StartupMode::Initial);
    }
}
