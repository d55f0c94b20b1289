//! PostgreSQL CDC builder
//!
//! WAL-backed variant of the shared construction sequence, with
//! double-quoted identifiers in generated SQL.

use super::CdcBuilder;
use crate::config::{CdcSourceConfig, SCHEMA_SEPARATOR};
use crate::error::Result;
use crate::stream::{
    EventFormat, SourceHandle, SourceStream, StartupMode, StreamEnvironment, WatermarkStrategy,
};
use tracing::info;

/// PostgreSQL dialect builder
#[derive(Debug, Default)]
pub struct PostgresCdcBuilder {
    config: CdcSourceConfig,
}

impl PostgresCdcBuilder {
    /// Registry identity key
    pub const HANDLE: &'static str = "postgres-cdc";
    const METADATA_TYPE: &'static str = "PostgreSql";
    const SOURCE_NAME: &'static str = "Postgres CDC Source";

    pub fn new(config: CdcSourceConfig) -> Self {
        Self { config }
    }
}

impl CdcBuilder for PostgresCdcBuilder {
    fn handle(&self) -> &'static str {
        Self::HANDLE
    }

    fn create(&self, config: CdcSourceConfig) -> Box<dyn CdcBuilder> {
        Box::new(Self::new(config))
    }

    fn config(&self) -> &CdcSourceConfig {
        &self.config
    }

    fn metadata_type(&self) -> &'static str {
        Self::METADATA_TYPE
    }

    fn url_scheme(&self) -> &'static str {
        "postgresql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn build(&self, env: &mut dyn StreamEnvironment) -> Result<SourceHandle> {
        let config = &self.config;

        let mut source = SourceStream::builder(Self::HANDLE)
            .hostname(config.hostname.clone())
            .port(config.port)
            .username(config.username.clone())
            .password(config.password.clone());

        if let Some(database) = config.database() {
            source = source.database_list(
                database
                    .split(SCHEMA_SEPARATOR)
                    .map(str::to_string)
                    .collect(),
            );
        }
        if let Some(table) = config.table() {
            source = source.table_list(table);
        }

        let stream = source
            .format(EventFormat::DebeziumJson)
            .startup(StartupMode::normalize(config.startup_mode()))
            .properties(config.properties.clone())
            .build()?;

        info!(operator = Self::SOURCE_NAME, "registering CDC source");
        Ok(env.from_source(stream, WatermarkStrategy::NoWatermarks, Self::SOURCE_NAME))
    }
}
