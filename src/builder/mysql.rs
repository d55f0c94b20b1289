//! MySQL CDC builder
//!
//! Constructs binlog-backed streaming sources for MySQL/MariaDB and
//! synthesizes backtick-quoted projection SQL.

use super::CdcBuilder;
use crate::config::{CdcSourceConfig, SCHEMA_SEPARATOR};
use crate::error::Result;
use crate::stream::{
    EventFormat, SourceHandle, SourceStream, StartupMode, StreamEnvironment, WatermarkStrategy,
};
use tracing::{debug, info};

/// MySQL dialect builder
#[derive(Debug, Default)]
pub struct MySqlCdcBuilder {
    config: CdcSourceConfig,
}

impl MySqlCdcBuilder {
    /// Registry identity key
    pub const HANDLE: &'static str = "mysql-cdc";
    const METADATA_TYPE: &'static str = "MySql";
    const SOURCE_NAME: &'static str = "MySQL CDC Source";

    pub fn new(config: CdcSourceConfig) -> Self {
        Self { config }
    }
}

impl CdcBuilder for MySqlCdcBuilder {
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
        "mysql"
    }

    fn quote_identifier(&self, name: &str) -> String {
        format!("`{}`", name.replace('`', "``"))
    }

    fn build(&self, env: &mut dyn StreamEnvironment) -> Result<SourceHandle> {
        let config = &self.config;
        debug!(
            hostname = config.hostname.as_deref().unwrap_or_default(),
            "constructing MySQL CDC source"
        );

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
