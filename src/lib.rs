//! Projects a linked-data vocabulary into TypeScript sources.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`vocabulary::parse`] reads a JSON-LD document and resolves it into an
//!    immutable [`ResolvedModel`] plus [`Diagnostics`].
//! 2. [`SchemaGenerator::generate`] renders one contract and one concrete type
//!    per class, one enum per populated enumeration and an index manifest.
//!
//! [`structured_data`] covers the other direction: serializing populated
//! instances of the generated types back into JSON-LD documents.
//!
//! ```no_run
//! use std::{path::Path, sync::Arc};
//!
//! use schema_codegen::{fs::LocalFileSystem, Config, SchemaGenerator};
//!
//! # async fn run() -> schema_codegen::Result<()> {
//! let config = Config::default();
//! let parsed = schema_codegen::parse(&LocalFileSystem, Path::new("schema.jsonld"), &config).await?;
//! let generator = SchemaGenerator::new(config, Arc::new(LocalFileSystem));
//! let report = generator.generate(Arc::new(parsed.model), Path::new("out")).await?;
//! println!("{} classes", report.class_count);
//! # Ok(())
//! # }
//! ```

pub mod codegen;
pub mod config;
pub mod diagnostics;
mod errors;
pub mod fs;
pub mod structured_data;
pub mod vocabulary;

pub use codegen::{GenerateReport, SchemaGenerator};
pub use config::Config;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use errors::{ClassFailure, Error, Result};
pub use vocabulary::{parse, parse_str, Parsed, ResolvedModel};
