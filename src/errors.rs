//! Crate-wide error type.
//!
//! Fatal conditions only. Non-fatal findings (unresolved references, empty type
//! unions, skipped enumerations) travel through [`crate::diagnostics`] instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::{diagnostics::Diagnostics, vocabulary::value_objects::IriError};

/// A single class whose artifacts could not be produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassFailure {
    /// Display name of the class.
    pub class: String,
    /// Rendered cause.
    pub message: String,
}

impl std::fmt::Display for ClassFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.class, self.message)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// The vocabulary document does not exist.
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The vocabulary document could not be decoded.
    #[error("malformed input document: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// A class, property or member name cannot be used as an identifier.
    #[error("invalid identifier `{name}` in class `{class}`")]
    InvalidIdentifier { class: String, name: String },

    #[error(transparent)]
    Iri(#[from] IriError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// One or more per-class emission tasks failed. `diagnostics` holds every
    /// finding of the run, including those of the failed classes.
    #[error(
        "generation failed for {} class(es): {}",
        failures.len(),
        failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
    )]
    Generation {
        failures: Vec<ClassFailure>,
        diagnostics: Diagnostics,
    },
}

impl Error {
    pub(crate) fn invalid_identifier(class: &str, name: &str) -> Self {
        Self::InvalidIdentifier {
            class: class.to_string(),
            name: name.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{ClassFailure, Error};
    use crate::diagnostics::Diagnostics;

    #[test]
    fn generation_error_lists_every_failed_class() {
        let err = Error::Generation {
            failures: vec![
                ClassFailure {
                    class: "Broken".into(),
                    message: "disk full".into(),
                },
                ClassFailure {
                    class: "Other".into(),
                    message: "denied".into(),
                },
            ],
            diagnostics: Diagnostics::new(),
        };
        assert_eq!(
            err.to_string(),
            "generation failed for 2 class(es): Broken: disk full; Other: denied"
        );
    }
}
