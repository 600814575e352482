//! Schema source implementations.
//!
//! This module provides implementations of [`SchemaInspector`]:
//!
//! - [`mysql`]: live MySQL/MariaDB database
//! - [`memory`]: tables captured in a YAML schema file
//!
//! [`InspectorImpl`] wraps both so the generator can be driven by whichever
//! source the configuration names without boxing.

pub mod memory;
pub mod mysql;

pub use memory::{MemoryInspector, TableSchema};
pub use mysql::MysqlInspector;

use async_trait::async_trait;

use crate::config::Config;
use crate::core::schema::RawColumn;
use crate::core::traits::SchemaInspector;
use crate::error::{GenError, Result};

/// Enum-based static dispatch over the available inspectors.
pub enum InspectorImpl {
    Mysql(MysqlInspector),
    Memory(MemoryInspector),
}

impl InspectorImpl {
    /// Open the source named by the configuration.
    ///
    /// A schema file takes precedence over a DSN.
    pub async fn from_config(config: &Config) -> Result<Self> {
        if let Some(path) = &config.schema_file {
            return Ok(InspectorImpl::Memory(MemoryInspector::load(path)?));
        }

        match &config.dsn {
            Some(dsn) => Ok(InspectorImpl::Mysql(MysqlInspector::connect(dsn).await?)),
            None => Err(GenError::Config(
                "no schema source configured (dsn or schema_file)".into(),
            )),
        }
    }
}

#[async_trait]
impl SchemaInspector for InspectorImpl {
    async fn list_tables(&self) -> Result<Vec<String>> {
        match self {
            InspectorImpl::Mysql(i) => i.list_tables().await,
            InspectorImpl::Memory(i) => i.list_tables().await,
        }
    }

    async fn describe_table(&self, table: &str) -> Result<Vec<RawColumn>> {
        match self {
            InspectorImpl::Mysql(i) => i.describe_table(table).await,
            InspectorImpl::Memory(i) => i.describe_table(table).await,
        }
    }

    fn source_type(&self) -> &str {
        match self {
            InspectorImpl::Mysql(i) => i.source_type(),
            InspectorImpl::Memory(i) => i.source_type(),
        }
    }

    async fn close(&self) {
        match self {
            InspectorImpl::Mysql(i) => i.close().await,
            InspectorImpl::Memory(i) => i.close().await,
        }
    }
}
