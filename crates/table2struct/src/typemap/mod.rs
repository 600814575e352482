//! Type mapping from MySQL column types to Go.
//!
//! Two static tables drive the mapping: one for `NOT NULL` columns and one
//! for nullable columns. Both are keyed by [`TypeDescriptor::lookup_key`],
//! i.e. the type name with a `.unsigned` suffix for unsigned integers.
//!
//! [`TypeDescriptor::lookup_key`]: crate::core::TypeDescriptor::lookup_key

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::warn;

use crate::core::schema::{Column, Nullability};
use crate::core::traits::TypeMapper;

/// Prefix of the type text emitted for unmapped column types.
pub const UNMAPPED_MARKER: &str = "/* <error> */";

const NOT_NULL_TYPES: &[(&str, &str)] = &[
    ("int", "int64"),
    ("tinyint", "int"),
    ("smallint", "int"),
    ("mediumint", "int"),
    ("bigint", "int64"),
    ("int.unsigned", "uint64"),
    ("tinyint.unsigned", "uint"),
    ("smallint.unsigned", "uint"),
    ("mediumint.unsigned", "uint"),
    ("bigint.unsigned", "int64"),
    ("float", "float64"),
    ("decimal", "float64"),
    ("double", "float64"),
    ("timestamp", "int64"),
    ("varchar", "string"),
    ("text", "string"),
    ("longtext", "string"),
    ("mediumtext", "string"),
    ("datetime", "time.Time"),
    ("date", "time.Time"),
    ("bit", "bool"),
    ("enum", "string"),
    ("blob", "string"),
];

// decimal and double have no nullable entry
const NULLABLE_TYPES: &[(&str, &str)] = &[
    ("int", "sql.NullInt64"),
    ("tinyint", "sql.NullInt64"),
    ("smallint", "sql.NullInt64"),
    ("mediumint", "sql.NullInt64"),
    ("bigint", "sql.NullInt64"),
    ("int.unsigned", "sql.NullInt64"),
    ("tinyint.unsigned", "sql.NullInt64"),
    ("smallint.unsigned", "sql.NullInt64"),
    ("mediumint.unsigned", "sql.NullInt64"),
    ("bigint.unsigned", "sql.NullInt64"),
    ("timestamp", "sql.NullInt64"),
    ("varchar", "sql.NullString"),
    ("text", "sql.NullString"),
    ("longtext", "sql.NullString"),
    ("mediumtext", "sql.NullString"),
    ("float", "sql.NullFloat64"),
    ("datetime", "mysql.NullTime"),
    ("date", "mysql.NullTime"),
    ("bit", "bool"),
    ("enum", "sql.NullString"),
    ("blob", "sql.NullString"),
];

/// Read-only lookup tables for one target language.
#[derive(Debug, Clone)]
pub struct TypeTables {
    not_null: HashMap<&'static str, &'static str>,
    nullable: HashMap<&'static str, &'static str>,
}

impl TypeTables {
    /// Build tables from `(key, type)` pairs.
    pub fn from_pairs(
        not_null: &[(&'static str, &'static str)],
        nullable: &[(&'static str, &'static str)],
    ) -> Self {
        Self {
            not_null: not_null.iter().copied().collect(),
            nullable: nullable.iter().copied().collect(),
        }
    }

    /// Look up a key in the table for the given nullability.
    pub fn lookup(&self, key: &str, nullability: Nullability) -> Option<&'static str> {
        let table = match nullability {
            Nullability::NotNull => &self.not_null,
            Nullability::Nullable => &self.nullable,
        };
        table.get(key).copied()
    }
}

/// Go tables, built once on first use.
pub static GO_TYPES: Lazy<TypeTables> =
    Lazy::new(|| TypeTables::from_pairs(NOT_NULL_TYPES, NULLABLE_TYPES));

/// MySQL → Go type mapper.
#[derive(Debug, Clone, Copy)]
pub struct GoTypeMapper<'a> {
    tables: &'a TypeTables,
}

impl GoTypeMapper<'static> {
    /// Create a mapper over the built-in Go tables.
    pub fn new() -> Self {
        Self { tables: &GO_TYPES }
    }
}

impl Default for GoTypeMapper<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> GoTypeMapper<'a> {
    /// Create a mapper over caller-supplied tables.
    pub fn with_tables(tables: &'a TypeTables) -> Self {
        Self { tables }
    }
}

impl TypeMapper for GoTypeMapper<'_> {
    fn target_language(&self) -> &str {
        "go"
    }

    fn map_column(&self, col: &Column) -> String {
        let key = col.data_type.lookup_key();
        match self.tables.lookup(&key, col.nullable) {
            Some(go_type) => go_type.to_string(),
            None => {
                warn!(
                    "No Go type for column '{}' ({} {}), emitting error marker",
                    col.name,
                    key,
                    col.nullable.as_flag()
                );
                format!("{}{}", UNMAPPED_MARKER, col.data_type.name)
            }
        }
    }
}
