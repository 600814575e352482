//! Generation orchestrator - main workflow coordinator.
//!
//! For every selected table the [`Generator`] asks the inspector for the
//! column descriptions, builds the struct, and writes the Go file. Tables
//! are processed one after another; any inspector or file system error
//! aborts the run.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::builder::StructBuilder;
use crate::config::Config;
use crate::core::traits::{SchemaInspector, TypeMapper};
use crate::error::Result;
use crate::render::FileWriter;
use crate::typemap::GoTypeMapper;

/// Outcome of generating one table.
#[derive(Debug, Clone, Serialize)]
pub struct TableReport {
    /// Raw table name.
    pub table: String,

    /// Generated type name.
    pub type_name: String,

    /// Written file.
    pub path: PathBuf,

    /// Number of fields written.
    pub fields: usize,

    /// Columns left out because their type could not be parsed.
    pub dropped_columns: usize,

    /// Columns written with the error marker instead of a type.
    pub unmapped_columns: Vec<String>,
}

/// Result of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// Source the schema came from ("mysql", "memory").
    pub source: String,

    /// Output directory.
    pub output_dir: PathBuf,

    /// Per-table reports in generation order.
    pub tables: Vec<TableReport>,

    /// Total duration in seconds.
    pub duration_seconds: f64,
}

impl GenerateResult {
    /// Number of files written.
    pub fn files_written(&self) -> usize {
        self.tables.len()
    }

    /// Whether any table has dropped or unmapped columns.
    pub fn has_warnings(&self) -> bool {
        self.tables
            .iter()
            .any(|t| t.dropped_columns > 0 || !t.unmapped_columns.is_empty())
    }

    /// Serialize the result as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Drives schema inspection, struct building and file writing.
pub struct Generator<I: SchemaInspector, M: TypeMapper = GoTypeMapper<'static>> {
    inspector: I,
    builder: StructBuilder<M>,
    package: String,
    output_dir: PathBuf,
    tables: Vec<String>,
}

impl<I: SchemaInspector> Generator<I> {
    /// Create a generator for the configured package, filter and output
    /// directory, mapping types to Go.
    pub fn new(inspector: I, config: &Config) -> Self {
        Self::with_mapper(inspector, GoTypeMapper::new(), config)
    }
}

impl<I: SchemaInspector, M: TypeMapper> Generator<I, M> {
    /// Create a generator with a custom type mapper.
    pub fn with_mapper(inspector: I, mapper: M, config: &Config) -> Self {
        Self {
            inspector,
            builder: StructBuilder::new(mapper),
            package: config.package.clone(),
            output_dir: config.output_dir.clone(),
            tables: config.tables.clone(),
        }
    }

    /// The underlying inspector.
    pub fn inspector(&self) -> &I {
        &self.inspector
    }

    /// Generate one file per selected table.
    pub async fn run(&self) -> Result<GenerateResult> {
        let start = Instant::now();
        let writer = FileWriter::create(&self.package, &self.output_dir)?;
        let tables = self.inspector.selected_tables(&self.tables).await?;

        info!(
            "Generating {} {} structs from {} into {:?}",
            tables.len(),
            self.builder.mapper().target_language(),
            self.inspector.source_type(),
            writer.output_dir()
        );

        let mut reports = Vec::with_capacity(tables.len());
        for table in &tables {
            let raw = self.inspector.describe_table(table).await?;
            let (table_struct, dropped_columns) = self.builder.build_raw(table, raw);
            let path = writer.write(&table_struct)?;

            let unmapped_columns: Vec<String> = table_struct
                .unmapped_fields()
                .map(|f| f.column.clone())
                .collect();
            if !unmapped_columns.is_empty() {
                warn!(
                    "{}: {} column(s) have no type mapping: {}",
                    table,
                    unmapped_columns.len(),
                    unmapped_columns.join(", ")
                );
            }

            info!("{} -> {:?}", table, path);
            reports.push(TableReport {
                table: table.clone(),
                type_name: table_struct.type_name.clone(),
                path,
                fields: table_struct.fields.len(),
                dropped_columns,
                unmapped_columns,
            });
        }

        let result = GenerateResult {
            source: self.inspector.source_type().to_string(),
            output_dir: self.output_dir.clone(),
            tables: reports,
            duration_seconds: start.elapsed().as_secs_f64(),
        };

        info!(
            "Generated {} files in {:.2}s",
            result.files_written(),
            result.duration_seconds
        );
        Ok(result)
    }

    /// Close the inspector's connections.
    pub async fn close(&self) {
        self.inspector.close().await;
    }
}
