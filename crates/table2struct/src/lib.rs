//! # table2struct
//!
//! Generate Go struct declarations from MySQL table metadata.
//!
//! For each table the library emits one Go file declaring a struct with:
//!
//! - **Exported field names** derived from column names (`user_id` -> `UserID`)
//! - **Mapped field types**, nullable columns using `sql.Null*` wrappers
//! - **`db` struct tags** carrying the raw column name
//! - **Minimal imports**, deduplicated and in gofmt order
//!
//! Unparsable column types are skipped with a warning; types without a
//! mapping are written as `/* <error> */<type>` so the generated file fails
//! to compile at exactly that field.
//!
//! ## Example
//!
//! ```rust,no_run
//! use table2struct::{Config, Generator, InspectorImpl};
//!
//! #[tokio::main]
//! async fn main() -> table2struct::Result<()> {
//!     let config = Config::load("table2struct.yaml")?;
//!     config.validate()?;
//!     let inspector = InspectorImpl::from_config(&config).await?;
//!     let generator = Generator::new(inspector, &config);
//!     let result = generator.run().await?;
//!     println!("Wrote {} files", result.files_written());
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod drivers;
pub mod error;
pub mod orchestrator;
pub mod render;
pub mod typemap;

// Re-exports for convenient access
pub use builder::StructBuilder;
pub use config::{Config, Dsn};
pub use crate::core::{
    parse_type, to_identifier, Column, Dependency, Nullability, RawColumn, SchemaInspector,
    StructField, TableStruct, TypeDescriptor, TypeMapper,
};
pub use drivers::{InspectorImpl, MemoryInspector, MysqlInspector};
pub use error::{GenError, Result};
pub use orchestrator::{GenerateResult, Generator, TableReport};
pub use render::FileWriter;
pub use typemap::GoTypeMapper;
