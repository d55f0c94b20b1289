//! CDC builder contract and dialect implementations
//!
//! One [`CdcBuilder`] implementation exists per supported source database.
//! The registry keeps a stateless prototype of each; `create` binds a fresh
//! instance to one [`CdcSourceConfig`] for exactly one build sequence. All
//! operations after that binding are deterministic reads: config in,
//! (stream handle | metadata map | SQL string) out.

pub mod mysql;
pub mod oracle;
pub mod postgres;
pub mod registry;
pub mod sqlserver;

pub use registry::{default_registry, CdcBuilderRegistry};

use crate::config::{CdcSourceConfig, SCHEMA_SEPARATOR};
use crate::error::{Error, Result};
use crate::model::{MetadataConfig, Table};
use crate::stream::{SourceHandle, StreamEnvironment};
use std::collections::HashMap;

/// Contract implemented once per source-database dialect.
///
/// Required methods carry what genuinely differs between databases; the
/// provided methods are the shared base behavior every dialect inherits.
pub trait CdcBuilder: std::fmt::Debug + Send + Sync {
    /// Fixed identity key used by the registry, e.g. `"mysql-cdc"`.
    /// Stable and unique across all registered builders.
    fn handle(&self) -> &'static str;

    /// Produce a new builder of the same dialect bound to `config`.
    ///
    /// Prototype pattern: the registry never mutates the registered
    /// prototype; instances returned here are single-use.
    fn create(&self, config: CdcSourceConfig) -> Box<dyn CdcBuilder>;

    /// The bound configuration.
    fn config(&self) -> &CdcSourceConfig;

    /// Metadata source type registered with the platform catalog,
    /// e.g. `"MySql"`.
    fn metadata_type(&self) -> &'static str;

    /// URL scheme for [`connect_url`](CdcBuilder::connect_url).
    fn url_scheme(&self) -> &'static str;

    /// Quote an identifier with the dialect's quoting convention.
    fn quote_identifier(&self, name: &str) -> String;

    /// Construct the runtime source and register it with the streaming
    /// environment under the dialect's fixed operator name.
    ///
    /// Connection parameters are passed through unchanged; required-field
    /// failures from the connector-side builder propagate unwrapped.
    /// Registration attaches no watermark strategy; CDC ordering is the
    /// connector's job, not event-time semantics.
    fn build(&self, env: &mut dyn StreamEnvironment) -> Result<SourceHandle>;

    /// Schemas named by the config's `database` field, split on
    /// [`SCHEMA_SEPARATOR`]. Order preserved, no deduplication; empty when
    /// `database` is unspecified.
    fn schema_list(&self) -> Vec<String> {
        match self.config().database() {
            Some(database) => database
                .split(SCHEMA_SEPARATOR)
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// `scheme://host:port/schema` identifier for one schema.
    ///
    /// Shared by every dialect whose connection strings take that shape;
    /// override for dialects with a different URL layout.
    fn connect_url(&self, schema: &str) -> String {
        let config = self.config();
        format!(
            "{}://{}:{}/{}",
            self.url_scheme(),
            config.hostname.as_deref().unwrap_or_default(),
            config.port.map(|p| p.to_string()).unwrap_or_default(),
            schema
        )
    }

    /// One catalog descriptor per schema in [`schema_list`](CdcBuilder::schema_list),
    /// keyed by schema name. Pure derivation from the bound config.
    fn metadata_configs(&self) -> HashMap<String, MetadataConfig> {
        let config = self.config();
        let mut all = HashMap::new();
        for schema in self.schema_list() {
            let url = self.connect_url(&schema);
            all.insert(
                schema,
                MetadataConfig {
                    metadata_type: self.metadata_type().to_string(),
                    name: url.clone(),
                    url,
                    username: config.username.clone(),
                    password: config.password.as_ref().map(|p| p.expose().to_string()),
                },
            );
        }
        all
    }

    /// Synthesize the statement that projects captured columns into the
    /// target table shape:
    ///
    /// ```text
    /// INSERT INTO <table> SELECT
    ///     <col0>
    ///     ,<col1>
    ///  FROM <source_name>
    /// ```
    ///
    /// Columns render in descriptor order with dialect identifier quoting.
    /// No `WHERE database_name = .. AND table_name = ..` filter is emitted:
    /// captured rows are expected to already be scoped to one table by the
    /// source construction. Re-enabling that filter is a known extension
    /// point.
    ///
    /// A table with zero columns fails with [`Error::EmptyProjection`]
    /// rather than emitting a statement with no projection list.
    fn insert_sql(&self, table: &Table, source_name: &str) -> Result<String> {
        if table.columns.is_empty() {
            return Err(Error::EmptyProjection(table.name.clone()));
        }
        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&table.name);
        sql.push_str(" SELECT\n");
        for (i, column) in table.columns.iter().enumerate() {
            sql.push_str("    ");
            if i > 0 {
                sql.push(',');
            }
            sql.push_str(&self.quote_identifier(&column.name));
            sql.push_str(" \n");
        }
        sql.push_str(" FROM ");
        sql.push_str(source_name);
        Ok(sql)
    }
}
