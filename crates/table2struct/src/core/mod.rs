//! Core abstractions for struct generation.
//!
//! - [`schema`]: column, type and generated struct model
//! - [`parser`]: raw column type tokenizer
//! - [`identifier`]: exported identifier casing
//! - [`traits`]: schema inspector and type mapper seams

pub mod identifier;
pub mod parser;
pub mod schema;
pub mod traits;

pub use identifier::to_identifier;
pub use parser::parse_type;
pub use schema::{
    Column, Dependency, Nullability, RawColumn, StructField, TableStruct, TypeDescriptor,
};
pub use traits::{SchemaInspector, TypeMapper};
