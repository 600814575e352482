//! Assembly of per-table struct declarations.
//!
//! [`StructBuilder`] turns a table's columns into a [`TableStruct`]: one
//! field per column in column order, plus the set of imports the mapped
//! types need. Builds are independent of each other and share nothing but
//! the read-only type tables behind the mapper.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::core::identifier::to_identifier;
use crate::core::schema::{Column, Dependency, RawColumn, StructField, TableStruct};
use crate::core::traits::TypeMapper;

/// Builds [`TableStruct`]s with a given type mapper.
pub struct StructBuilder<M: TypeMapper> {
    mapper: M,
}

impl<M: TypeMapper> StructBuilder<M> {
    /// Create a builder around a type mapper.
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    /// The mapper used for column types.
    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Build the struct for a table from already parsed columns.
    pub fn build(&self, table_name: &str, columns: &[Column]) -> TableStruct {
        let mut fields = Vec::with_capacity(columns.len());
        let mut dependencies = BTreeSet::new();

        for col in columns {
            let go_type = self.mapper.map_column(col);
            let ident = to_identifier(&col.name);
            debug!("{}.{} -> {} {}", table_name, col.name, ident, go_type);

            fields.push(StructField {
                ident,
                go_type,
                column: col.name.clone(),
            });

            if let Some(dep) = dependency_for(col) {
                dependencies.insert(dep);
            }
        }

        TableStruct {
            table_name: table_name.to_string(),
            type_name: to_identifier(table_name),
            fields,
            dependencies,
        }
    }

    /// Parse raw column descriptions and build the struct.
    ///
    /// Columns whose type cannot be parsed are logged and left out; the
    /// returned count tells how many were dropped.
    pub fn build_raw(&self, table_name: &str, raw: Vec<RawColumn>) -> (TableStruct, usize) {
        let (columns, dropped) = parse_columns(table_name, raw);
        (self.build(table_name, &columns), dropped)
    }
}

/// Parse raw columns, dropping the ones with unparsable types.
pub fn parse_columns(table_name: &str, raw: Vec<RawColumn>) -> (Vec<Column>, usize) {
    let mut columns = Vec::with_capacity(raw.len());
    let mut dropped = 0;

    for raw_col in raw {
        let field = raw_col.field.clone();
        match Column::try_from(raw_col) {
            Ok(col) => columns.push(col),
            Err(e) => {
                warn!("{}: skipping column '{}': {}", table_name, field, e);
                dropped += 1;
            }
        }
    }

    (columns, dropped)
}

/// Import needed by a column's mapped type, if any.
fn dependency_for(col: &Column) -> Option<Dependency> {
    match (col.data_type.is_date(), col.is_nullable()) {
        (true, true) => Some(Dependency::MysqlDriver),
        (true, false) => Some(Dependency::Time),
        (false, true) => Some(Dependency::DatabaseSql),
        (false, false) => None,
    }
}
