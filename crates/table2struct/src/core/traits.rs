//! Core traits for schema inspection and type mapping.
//!
//! - [`SchemaInspector`]: reads table names and column descriptions from a source
//! - [`TypeMapper`]: maps a parsed column to a target-language type
//!
//! # Design Patterns
//!
//! - **Strategy**: `TypeMapper` lets the lookup tables be swapped without
//!   touching the struct builder
//! - **Template Method**: `SchemaInspector::selected_tables` is built on the
//!   two required query methods

use async_trait::async_trait;

use crate::error::Result;

use super::schema::{Column, RawColumn};

/// Source of table metadata.
///
/// Implementations return tables and columns in a stable order: tables as
/// the source lists them, columns by ordinal position.
#[async_trait]
pub trait SchemaInspector: Send + Sync {
    /// List all table names.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Describe the columns of one table.
    async fn describe_table(&self, table: &str) -> Result<Vec<RawColumn>>;

    /// Resolve the tables to generate.
    ///
    /// An empty filter selects every table from [`list_tables`](Self::list_tables);
    /// otherwise the filter is returned as given, in its own order.
    async fn selected_tables(&self, filter: &[String]) -> Result<Vec<String>> {
        if filter.is_empty() {
            self.list_tables().await
        } else {
            Ok(filter.to_vec())
        }
    }

    /// Short identifier for logging (e.g. "mysql", "memory").
    fn source_type(&self) -> &str;

    /// Release any held connections.
    async fn close(&self) {}
}

/// Maps a column to a target-language type name.
///
/// Mapping never fails: a column whose type has no entry yields a
/// deliberately invalid type string so the gap shows up in the generated
/// source instead of aborting generation.
pub trait TypeMapper: Send + Sync {
    /// Target language name (e.g. "go").
    fn target_language(&self) -> &str;

    /// Map a column to its type name.
    fn map_column(&self, col: &Column) -> String;
}
