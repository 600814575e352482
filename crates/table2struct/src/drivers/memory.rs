//! In-memory schema inspector.
//!
//! Serves table descriptions captured ahead of time, so structs can be
//! generated without a database connection. The YAML form is:
//!
//! ```yaml
//! tables:
//!   - name: users
//!     columns:
//!       - { field: id, type: "int(11) unsigned", nullable: "NO", key: PRI }
//!       - { field: email, type: "varchar(255)", nullable: "YES" }
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::schema::RawColumn;
use crate::core::traits::SchemaInspector;
use crate::error::{GenError, Result};

/// One table of a captured schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name.
    pub name: String,

    /// Columns in ordinal order.
    #[serde(default)]
    pub columns: Vec<RawColumn>,
}

/// Schema inspector backed by a list of tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryInspector {
    tables: Vec<TableSchema>,
}

impl MemoryInspector {
    /// Create an inspector over the given tables, kept in the given order.
    pub fn new(tables: Vec<TableSchema>) -> Self {
        Self { tables }
    }

    /// Add a table.
    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<RawColumn>) -> Self {
        self.tables.push(TableSchema {
            name: name.into(),
            columns,
        });
        self
    }

    /// Parse a schema from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a schema from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let inspector = Self::from_yaml(&content)?;
        info!(
            "Loaded {} tables from schema file {:?}",
            inspector.tables.len(),
            path
        );
        Ok(inspector)
    }
}

#[async_trait]
impl SchemaInspector for MemoryInspector {
    async fn list_tables(&self) -> Result<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn describe_table(&self, table: &str) -> Result<Vec<RawColumn>> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .map(|t| t.columns.clone())
            .ok_or_else(|| GenError::TableNotFound(table.to_string()))
    }

    fn source_type(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
tables:
  - name: users
    columns:
      - { field: id, type: "int(11) unsigned", nullable: "NO", key: PRI, extra: auto_increment }
      - { field: email, type: "varchar(255)", nullable: "YES" }
  - name: audit_log
    columns:
      - { field: at, type: datetime, nullable: "NO", default: CURRENT_TIMESTAMP }
"#;

    #[tokio::test]
    async fn test_from_yaml_preserves_order() {
        let inspector = MemoryInspector::from_yaml(SCHEMA).unwrap();
        assert_eq!(inspector.list_tables().await.unwrap(), vec!["users", "audit_log"]);

        let users = inspector.describe_table("users").await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].field, "id");
        assert_eq!(users[0].type_text, "int(11) unsigned");
        assert_eq!(users[0].key, "PRI");
        assert_eq!(users[1].null, "YES");

        let audit = inspector.describe_table("audit_log").await.unwrap();
        assert_eq!(audit[0].default.as_deref(), Some("CURRENT_TIMESTAMP"));
    }

    #[tokio::test]
    async fn test_describe_missing_table() {
        let inspector = MemoryInspector::default();
        let err = inspector.describe_table("nope").await.unwrap_err();
        assert!(matches!(err, GenError::TableNotFound(ref t) if t == "nope"));
    }

    #[tokio::test]
    async fn test_selected_tables() {
        let inspector = MemoryInspector::default()
            .with_table("a", vec![])
            .with_table("b", vec![]);

        assert_eq!(inspector.selected_tables(&[]).await.unwrap(), vec!["a", "b"]);
        assert_eq!(
            inspector.selected_tables(&["b".to_string()]).await.unwrap(),
            vec!["b"]
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schema.yaml");
        std::fs::write(&path, SCHEMA).unwrap();

        let inspector = MemoryInspector::load(&path).unwrap();
        assert_eq!(inspector.source_type(), "memory");
    }

    #[test]
    fn test_load_missing_file() {
        let err = MemoryInspector::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, GenError::Io(_)));
    }
}
