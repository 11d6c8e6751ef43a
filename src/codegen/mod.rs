//! Projection of the resolved model into TypeScript sources.
//!
//! Rendering is pure and deterministic: the same model and configuration always
//! produce byte-identical artifacts. Only [`generator`] touches the file system.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub mod format;
pub mod generator;
pub mod projection;
pub mod typescript;

pub use generator::{GenerateReport, SchemaGenerator};
pub use projection::Projector;
pub use typescript::TypeScriptEmitter;

/// Kind of a generated source file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArtifactKind {
    /// Interface exposing the fields a class declares on top of its parents.
    Contract,
    /// Data-holder class implementing the contract and carrying metadata.
    Concrete,
    Enumeration,
    /// Index re-exporting every other artifact.
    Manifest,
}

/// A rendered source file: import lines plus body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub imports: Vec<String>,
    pub body: String,
}

impl Artifact {
    /// Full file contents: sorted imports, a blank line, then the body.
    #[must_use]
    pub fn render(&self) -> String {
        if self.imports.is_empty() {
            return self.body.clone();
        }
        format!("{}\n\n{}", self.imports.join("\n"), self.body)
    }

    /// Location of the artifact below the output root.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        match self.kind {
            ArtifactKind::Contract | ArtifactKind::Enumeration => {
                Path::new("interfaces").join(format!("{}.ts", self.name))
            }
            ArtifactKind::Concrete => Path::new("classes").join(format!("{}.schema.ts", self.name)),
            ArtifactKind::Manifest => PathBuf::from("index.ts"),
        }
    }
}

/// Type-only imports collected while rendering one artifact.
///
/// One line per identifier, sorted by identifier; the artifact's own name is
/// never imported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Imports {
    owner: String,
    sibling_prefix: String,
    entries: BTreeMap<String, String>,
}

impl Imports {
    /// `sibling_prefix` is the relative path contracts and enumerations are
    /// imported from, e.g. `./` or `../interfaces/`.
    #[must_use]
    pub fn new(owner: impl Into<String>, sibling_prefix: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            sibling_prefix: sibling_prefix.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Registers `name` as imported from `from`.
    pub fn add(&mut self, name: &str, from: &str) {
        if name == self.owner {
            return;
        }
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| from.to_string());
    }

    /// Registers a generated contract or enumeration.
    pub fn add_sibling(&mut self, name: &str) {
        let from = format!("{}{name}", self.sibling_prefix);
        self.add(name, &from);
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, from)| format!("import type {{ {name} }} from '{from}';"))
            .collect()
    }
}
