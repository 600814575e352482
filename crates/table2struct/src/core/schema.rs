//! Schema metadata types and the generated struct model.
//!
//! [`RawColumn`] is what a schema inspector hands back for one row of a
//! table description. Parsing its type string yields a [`Column`], which the
//! struct builder turns into a [`TableStruct`].

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

use super::parser::parse_type;

/// Parsed column type.
///
/// For `enum` columns `size` is always 0 and `extra` carries the
/// comma-joined literal values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Lowercase type keyword (e.g. "int", "varchar", "enum").
    pub name: String,

    /// Numeric qualifier from the parentheses, 0 if absent.
    pub size: i64,

    /// Modifier keyword (e.g. "unsigned") or enum values.
    pub extra: String,
}

impl TypeDescriptor {
    /// Create a descriptor with no size or modifier.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            extra: String::new(),
        }
    }

    /// Whether the type carries the `unsigned` modifier.
    pub fn is_unsigned(&self) -> bool {
        self.extra == "unsigned"
    }

    /// Whether the type is `datetime` or `date`.
    pub fn is_date(&self) -> bool {
        matches!(self.name.as_str(), "datetime" | "date")
    }

    /// Key into the type lookup tables.
    pub fn lookup_key(&self) -> String {
        if self.is_unsigned() {
            format!("{}.unsigned", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Column nullability as reported by the database.
///
/// Only the exact flag `"NO"` means not-null; every other value is treated
/// as nullable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nullability {
    NotNull,
    Nullable,
}

impl Nullability {
    /// Interpret a `Null` flag from a table description.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "NO" {
            Nullability::NotNull
        } else {
            Nullability::Nullable
        }
    }

    /// The database flag this value corresponds to.
    pub fn as_flag(&self) -> &'static str {
        match self {
            Nullability::NotNull => "NO",
            Nullability::Nullable => "YES",
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Nullability::Nullable)
    }
}

/// One row of a table description, before the type string is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawColumn {
    /// Column name.
    pub field: String,

    /// Raw type text, e.g. "int(11) unsigned".
    #[serde(rename = "type")]
    pub type_text: String,

    /// Nullability flag ("YES"/"NO").
    #[serde(rename = "nullable", default = "default_null_flag")]
    pub null: String,

    /// Key flag ("PRI", "UNI", "MUL" or empty).
    #[serde(default)]
    pub key: String,

    /// Column default, if any.
    #[serde(default)]
    pub default: Option<String>,

    /// Extra flags (e.g. "auto_increment").
    #[serde(default)]
    pub extra: String,
}

fn default_null_flag() -> String {
    "YES".to_string()
}

impl RawColumn {
    /// Shorthand for a column with only name, type and nullability set.
    pub fn new(field: impl Into<String>, type_text: impl Into<String>, null: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            type_text: type_text.into(),
            null: null.into(),
            key: String::new(),
            default: None,
            extra: String::new(),
        }
    }
}

/// Column metadata with a parsed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, used verbatim in the struct tag.
    pub name: String,

    /// Parsed type.
    pub data_type: TypeDescriptor,

    /// Whether the column accepts NULL.
    pub nullable: Nullability,

    /// Key flag.
    pub key: String,

    /// Column default.
    pub default: Option<String>,

    /// Extra flags.
    pub extra: String,
}

impl Column {
    /// Create a column from a name, an already parsed type and a null flag.
    pub fn new(name: impl Into<String>, data_type: TypeDescriptor, null_flag: &str) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: Nullability::from_flag(null_flag),
            key: String::new(),
            default: None,
            extra: String::new(),
        }
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable.is_nullable()
    }
}

impl TryFrom<RawColumn> for Column {
    type Error = GenError;

    fn try_from(raw: RawColumn) -> Result<Self> {
        let data_type = parse_type(&raw.type_text)?;
        Ok(Self {
            nullable: Nullability::from_flag(&raw.null),
            name: raw.field,
            data_type,
            key: raw.key,
            default: raw.default,
            extra: raw.extra,
        })
    }
}

/// An import a generated file needs.
///
/// Variants are declared in the alphabetical order of their import paths so
/// that a `BTreeSet<Dependency>` iterates the way gofmt sorts imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Dependency {
    /// `database/sql`, for the `sql.Null*` wrappers.
    DatabaseSql,
    /// `github.com/go-sql-driver/mysql`, for `mysql.NullTime`.
    MysqlDriver,
    /// `time`, for `time.Time`.
    Time,
}

impl Dependency {
    /// Go import path.
    pub fn import_path(&self) -> &'static str {
        match self {
            Dependency::DatabaseSql => "database/sql",
            Dependency::MysqlDriver => "github.com/go-sql-driver/mysql",
            Dependency::Time => "time",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.import_path())
    }
}

/// One field of a generated struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructField {
    /// Exported Go identifier.
    pub ident: String,

    /// Go type, or the error sentinel for unmapped types.
    pub go_type: String,

    /// Raw column name for the `db` tag.
    pub column: String,
}

/// Everything needed to render one table's Go file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStruct {
    /// Raw table name (used for the file name).
    pub table_name: String,

    /// Exported Go type name.
    pub type_name: String,

    /// Fields in column order.
    pub fields: Vec<StructField>,

    /// Required imports.
    pub dependencies: BTreeSet<Dependency>,
}

impl TableStruct {
    /// Fields whose type could not be mapped.
    pub fn unmapped_fields(&self) -> impl Iterator<Item = &StructField> {
        self.fields
            .iter()
            .filter(|f| f.go_type.starts_with(crate::typemap::UNMAPPED_MARKER))
    }
}
