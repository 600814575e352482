//! Rendering of generated structs into Go source files.
//!
//! Each table becomes one file, `<output_dir>/<table>.go`:
//!
//! ```text
//!
//! package models
//!
//! import (
//!     "database/sql"
//! )
//!
//! // Users -
//! type Users struct {
//!     ID int64 `db:"id"`
//!     Email sql.NullString `db:"email"`
//! }
//! ```
//!
//! The import block is left out when the struct needs no imports.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::schema::TableStruct;
use crate::error::Result;

/// Extension of generated files.
pub const FILE_EXTENSION: &str = "go";

/// Render the field lines, one per column.
pub fn render_fields(table: &TableStruct) -> String {
    table
        .fields
        .iter()
        .map(|f| format!("    {} {} `db:\"{}\"`\n", f.ident, f.go_type, f.column))
        .collect()
}

/// Render the import block, or an empty string when nothing is imported.
pub fn render_imports(table: &TableStruct) -> String {
    if table.dependencies.is_empty() {
        return String::new();
    }

    let lines: Vec<String> = table
        .dependencies
        .iter()
        .map(|dep| format!("    {}", dep))
        .collect();
    format!("import (\n{}\n)\n\n", lines.join("\n"))
}

/// Render a complete Go source file for a table.
pub fn render_file(package: &str, table: &TableStruct) -> String {
    format!(
        "\npackage {package}\n\n{imports}// {name} -\ntype {name} struct {{\n{fields}}}\n",
        package = package,
        imports = render_imports(table),
        name = table.type_name,
        fields = render_fields(table),
    )
}

/// Path of the generated file for a table.
pub fn output_path(output_dir: &Path, table: &TableStruct) -> PathBuf {
    output_dir.join(format!("{}.{}", table.table_name, FILE_EXTENSION))
}

/// Writes rendered files into an output directory.
#[derive(Debug, Clone)]
pub struct FileWriter {
    package: String,
    output_dir: PathBuf,
}

impl FileWriter {
    /// Create a writer, creating the output directory if it does not exist.
    pub fn create(package: impl Into<String>, output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        if !output_dir.exists() {
            fs::create_dir_all(&output_dir)?;
            info!("Created output directory {:?}", output_dir);
        }

        Ok(Self {
            package: package.into(),
            output_dir,
        })
    }

    /// Output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Render and write one table, returning the written path.
    pub fn write(&self, table: &TableStruct) -> Result<PathBuf> {
        let path = output_path(&self.output_dir, table);
        let content = render_file(&self.package, table);
        fs::write(&path, content)?;
        debug!("Wrote {:?} ({} fields)", path, table.fields.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::StructBuilder;
    use crate::core::schema::{Column, TypeDescriptor};
    use crate::typemap::GoTypeMapper;

    fn col(name: &str, type_text: &str, null: &str) -> Column {
        Column::new(name, type_text.parse::<TypeDescriptor>().unwrap(), null)
    }

    fn build(table: &str, columns: &[Column]) -> TableStruct {
        StructBuilder::new(GoTypeMapper::new()).build(table, columns)
    }

    #[test]
    fn test_render_file_with_imports() {
        let table = build(
            "user_accounts",
            &[
                col("id", "bigint(20) unsigned", "NO"),
                col("nick", "varchar(32)", "YES"),
                col("born_on", "date", "YES"),
                col("created_at", "datetime", "NO"),
            ],
        );

        let expected = "
package models

import (
    \"database/sql\"
    \"github.com/go-sql-driver/mysql\"
    \"time\"
)

// UserAccounts -
type UserAccounts struct {
    ID int64 `db:\"id\"`
    Nick sql.NullString `db:\"nick\"`
    BornOn mysql.NullTime `db:\"born_on\"`
    CreatedAt time.Time `db:\"created_at\"`
}
";
        assert_eq!(render_file("models", &table), expected);
    }

    #[test]
    fn test_render_file_without_imports() {
        let table = build("tags", &[col("id", "int(11)", "NO"), col("label", "text", "NO")]);

        let expected = "
package store

// Tags -
type Tags struct {
    ID int64 `db:\"id\"`
    Label string `db:\"label\"`
}
";
        assert_eq!(render_file("store", &table), expected);
    }

    #[test]
    fn test_render_imports_stable() {
        let columns = vec![
            col("a", "datetime", "NO"),
            col("b", "varchar(1)", "YES"),
            col("c", "datetime", "YES"),
        ];
        let first = render_imports(&build("t", &columns));
        for _ in 0..10 {
            assert_eq!(render_imports(&build("t", &columns)), first);
        }
    }

    #[test]
    fn test_render_unmapped_sentinel() {
        let table = build("docs", &[col("body", "json", "NO")]);
        assert!(render_fields(&table).contains("Body /* <error> */json `db:\"body\"`"));
    }

    #[test]
    fn test_output_path_uses_raw_table_name() {
        let table = build("order_items", &[]);
        assert_eq!(
            output_path(Path::new("/tmp/out"), &table),
            PathBuf::from("/tmp/out/order_items.go")
        );
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("gen").join("models");
        let writer = FileWriter::create("models", &nested).unwrap();
        assert!(nested.is_dir());

        let table = build("users", &[col("id", "int(11)", "NO")]);
        let path = writer.write(&table).unwrap();
        assert_eq!(path, nested.join("users.go"));

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("package models"));
        assert!(content.contains("type Users struct {"));
    }

    #[test]
    fn test_file_writer_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = FileWriter::create("models", dir.path()).unwrap();

        writer.write(&build("users", &[col("id", "int(11)", "NO")])).unwrap();
        let path = writer
            .write(&build("users", &[col("name", "varchar(5)", "NO")]))
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Name string"));
        assert!(!content.contains("ID int64"));
    }
}
