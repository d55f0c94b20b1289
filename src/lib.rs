//! # streamweld-cdc
//!
//! Dialect-keyed construction of change-data-capture streaming sources.
//!
//! A data-integration job names a source database dialect in its
//! configuration; this crate resolves that key to a [`CdcBuilder`]
//! implementation that knows how to
//!
//! - construct and register a streaming source from connection and startup
//!   parameters,
//! - derive one catalog [`MetadataConfig`] per captured schema, and
//! - synthesize the `INSERT INTO .. SELECT` projection statement with the
//!   dialect's identifier quoting.
//!
//! ## Architecture
//!
//! ```text
//!  raw YAML job definition
//!          │
//!          ▼
//!  CdcSourceConfig ──► CdcBuilderRegistry::instantiate ──► Box<dyn CdcBuilder>
//!                          (dialect key lookup)                  │
//!                                          ┌─────────────────────┼────────────┐
//!                                          ▼                     ▼            ▼
//!                                  build(env)          metadata_configs()  insert_sql()
//!                                  SourceStream via    catalog descriptors projection SQL
//!                                  StreamEnvironment   per schema
//! ```
//!
//! Builders registered in the [`CdcBuilderRegistry`] are stateless
//! prototypes; [`CdcBuilder::create`] binds a fresh single-use instance to
//! one [`CdcSourceConfig`]. Everything after that binding is deterministic
//! derivation from the bound config, with no I/O against the source database.
//!
//! ## Example
//!
//! ```
//! use streamweld_cdc::{CdcBuilderRegistry, CdcSourceConfig};
//!
//! let config = CdcSourceConfig {
//!     dialect: "mysql-cdc".to_string(),
//!     hostname: Some("db.example.com".to_string()),
//!     port: Some(3306),
//!     username: Some("repl".to_string()),
//!     password: Some("secret".into()),
//!     database: Some("inventory".to_string()),
//!     ..Default::default()
//! };
//!
//! let builder = CdcBuilderRegistry::global().instantiate(config)?;
//! let metadata = builder.metadata_configs();
//! assert_eq!(metadata["inventory"].url, "mysql://db.example.com:3306/inventory");
//! # Ok::<(), streamweld_cdc::Error>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod model;
pub mod stream;
pub mod testing;
pub mod types;

pub use builder::{
    default_registry, mysql::MySqlCdcBuilder, oracle::OracleCdcBuilder,
    postgres::PostgresCdcBuilder, sqlserver::SqlServerCdcBuilder, CdcBuilder, CdcBuilderRegistry,
};
pub use config::{CdcSourceConfig, SCHEMA_SEPARATOR};
pub use error::{Error, Result};
pub use model::{Column, MetadataConfig, Table};
pub use stream::{
    EventFormat, SourceHandle, SourceStream, StartupMode, StreamEnvironment, WatermarkStrategy,
};
pub use types::SecretValue;
