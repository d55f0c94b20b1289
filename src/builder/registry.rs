//! Builder registry for dialect lookup
//!
//! Maps a dialect identity key to a stateless prototype builder. The global
//! registry is populated once at first use and read-only afterwards, so
//! concurrent resolution needs no locking.

use super::{mysql, oracle, postgres, sqlserver, CdcBuilder};
use crate::config::CdcSourceConfig;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

static REGISTRY: LazyLock<CdcBuilderRegistry> = LazyLock::new(default_registry);

/// Registry of available CDC dialect builders.
///
/// Callers can assemble their own registry with only the dialects they ship,
/// or use [`CdcBuilderRegistry::global`] with everything built in.
pub struct CdcBuilderRegistry {
    builders: HashMap<&'static str, Arc<dyn CdcBuilder>>,
}

impl CdcBuilderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// The process-wide registry with all built-in dialects registered.
    pub fn global() -> &'static CdcBuilderRegistry {
        &REGISTRY
    }

    /// Register a prototype under its own handle
    pub fn register(&mut self, prototype: Arc<dyn CdcBuilder>) {
        self.builders.insert(prototype.handle(), prototype);
    }

    /// Resolve the prototype registered under `dialect`.
    pub fn resolve(&self, dialect: &str) -> Result<&Arc<dyn CdcBuilder>> {
        self.builders
            .get(dialect)
            .ok_or_else(|| Error::unsupported_dialect(dialect))
    }

    /// Resolve the prototype for `config.dialect` and bind a fresh builder
    /// instance to `config`.
    pub fn instantiate(&self, config: CdcSourceConfig) -> Result<Box<dyn CdcBuilder>> {
        let prototype = self.resolve(&config.dialect)?;
        debug!(dialect = %config.dialect, "resolved CDC builder");
        Ok(prototype.create(config))
    }

    /// Parse a raw YAML job definition, validate it, and instantiate the
    /// matching builder.
    pub fn instantiate_raw(&self, value: &serde_yaml::Value) -> Result<Box<dyn CdcBuilder>> {
        let config = CdcSourceConfig::from_yaml(value)?;
        self.instantiate(config)
    }

    /// Registered dialect handles
    pub fn handles(&self) -> Vec<&'static str> {
        self.builders.keys().copied().collect()
    }

    /// Check if a dialect is registered
    pub fn contains(&self, dialect: &str) -> bool {
        self.builders.contains_key(dialect)
    }

    /// Number of registered dialects
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for CdcBuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a registry with every built-in dialect builder registered.
pub fn default_registry() -> CdcBuilderRegistry {
    let mut registry = CdcBuilderRegistry::new();
    registry.register(Arc::new(mysql::MySqlCdcBuilder::default()));
    registry.register(Arc::new(oracle::OracleCdcBuilder::default()));
    registry.register(Arc::new(postgres::PostgresCdcBuilder::default()));
    registry.register(Arc::new(sqlserver::SqlServerCdcBuilder::default()));
    registry
}
