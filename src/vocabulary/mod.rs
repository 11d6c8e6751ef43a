//! Vocabulary ingestion and the resolved class model.
//!
//! A JSON-LD document is normalized into graph nodes ([`graph`]), resolved into
//! an immutable [`ResolvedModel`] ([`resolver`]) and then queried through pure
//! functions: transitive closure over parent edges ([`hierarchy`]) and the
//! property sets each class exposes ([`properties`]). Nothing in this module
//! knows about the target language.

pub mod entities;
pub mod graph;
pub mod hierarchy;
pub mod parser;
pub mod properties;
pub mod resolver;
pub mod value_objects;

pub use entities::{ClassModel, EnumMember, PropertyModel, ResolvedModel, TypeSpec};
pub use parser::{parse, parse_str, Parsed};
pub use value_objects::{Iri, IriError};
