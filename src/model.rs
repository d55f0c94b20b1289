//! Captured-table descriptors and catalog metadata
//!
//! These value objects arrive from the platform's metadata-discovery layer at
//! SQL-synthesis time, and leave toward its catalog-registration layer. The
//! builder only reads them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A column of a captured logical table.
///
/// Ordinal position is implicit: it is the column's index in
/// [`Table::columns`], and generated SQL preserves that order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Column {
    /// Column name
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A captured logical table: name, owning schema, ordered columns.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Table {
    /// Table name
    pub name: String,
    /// Owning schema
    pub schema: String,
    /// Columns in ordinal order
    #[serde(default)]
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column, preserving ordinal order.
    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(Column::new(name));
        self
    }
}

/// Flat descriptor handed to the platform catalog so one CDC-sourced schema
/// can be registered as a queryable metadata source.
///
/// `name` and `url` carry the same `scheme://host:port/schema` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct MetadataConfig {
    /// Metadata source type, e.g. `"MySql"`
    #[serde(rename = "type")]
    pub metadata_type: String,
    /// Display name (same shape as `url`)
    pub name: String,
    /// `scheme://host:port/schema` identifier
    pub url: String,
    /// Username copied from the source config
    pub username: Option<String>,
    /// Password copied from the source config
    pub password: Option<String>,
}
