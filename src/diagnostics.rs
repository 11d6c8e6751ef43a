//! Non-fatal findings collected while parsing and generating.
//!
//! A run never stops on these. Each one is logged when recorded and handed back
//! to the caller so it can be asserted on or reported.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// A warning raised during resolution or emission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A parent identifier is neither a known class nor a primitive tag.
    UnresolvedParent { class: String, parent: String },
    /// A range target is neither a known class nor a primitive tag.
    UnresolvedType {
        class: String,
        property: String,
        target: String,
    },
    /// Nothing usable remained in a property's range.
    EmptyTypeUnion { class: String, property: String },
    /// An enumeration without members produced no artifact.
    EmptyEnumerationSkipped { class: String },
    /// A class shares its display name with a class of lower identifier and
    /// produced no artifact.
    DuplicateClassName {
        class: String,
        id: String,
        kept: String,
    },
    /// Two distinct properties share a name on the same class.
    PropertyNameCollision {
        class: String,
        name: String,
        kept: String,
        dropped: String,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnresolvedParent { class, parent } => {
                write!(f, "parent class `{parent}` not found for class `{class}`")
            }
            Self::UnresolvedType {
                class,
                property,
                target,
            } => write!(
                f,
                "type `{target}` not found for property `{property}` of class `{class}`"
            ),
            Self::EmptyTypeUnion { class, property } => write!(
                f,
                "type empty for property `{property}` of class `{class}`, falling back to unconstrained"
            ),
            Self::EmptyEnumerationSkipped { class } => {
                write!(f, "enumeration `{class}` has no members and was not emitted")
            }
            Self::DuplicateClassName { class, id, kept } => write!(
                f,
                "class name `{class}` of `{id}` is already used by `{kept}`; `{id}` was not emitted"
            ),
            Self::PropertyNameCollision {
                class,
                name,
                kept,
                dropped,
            } => write!(
                f,
                "property name `{name}` on class `{class}` is declared by `{kept}` and `{dropped}`; keeping `{kept}`"
            ),
        }
    }
}

/// Ordered collector of [`Diagnostic`] values.
///
/// Identical findings are recorded once, so a property inherited by many
/// classes does not flood the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finding and logs it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.entries.contains(&diagnostic) {
            return;
        }
        tracing::warn!(diagnostic = %diagnostic, "schema_diagnostic");
        self.entries.push(diagnostic);
    }

    /// Appends every finding of `other`, keeping first-seen order.
    pub fn extend(&mut self, other: Diagnostics) {
        for diagnostic in other.entries {
            if !self.entries.contains(&diagnostic) {
                self.entries.push(diagnostic);
            }
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
