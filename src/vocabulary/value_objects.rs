use std::{fmt, str::FromStr};

use oxrdf::NamedNode;
use thiserror::Error;

/// Absolute IRI checked by `oxrdf` on construction.
///
/// Backs the vocabulary addresses in the configuration and the values of
/// generated enumeration members.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(NamedNode);

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IriError {
    #[error("invalid IRI: {value}")]
    Invalid { value: String },
}

impl Iri {
    pub fn new(value: impl Into<String>) -> Result<Self, IriError> {
        let value = value.into();
        match NamedNode::new(value.as_str()) {
            Ok(node) => Ok(Self(node)),
            Err(_) => Err(IriError::Invalid { value }),
        }
    }

    /// Member address: `base` followed by `local`, e.g. `https://schema.org/`
    /// and `EventScheduled`.
    pub fn join(base: &str, local: &str) -> Result<Self, IriError> {
        Self::new(format!("{base}{local}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Iri {
    type Err = IriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.into_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{Iri, IriError};

    #[test]
    fn joins_member_label_onto_base() {
        let iri = Iri::join("https://schema.org/", "EventScheduled").expect("valid IRI");
        assert_eq!(iri.as_str(), "https://schema.org/EventScheduled");
        assert_eq!(String::from(iri), "https://schema.org/EventScheduled");
    }

    #[test]
    fn rejects_label_that_breaks_the_iri() {
        let err = Iri::join("https://schema.org/", "Event Scheduled").expect_err("space in IRI");
        assert_eq!(
            err,
            IriError::Invalid {
                value: "https://schema.org/Event Scheduled".into()
            }
        );
    }

    #[test]
    fn relative_references_are_not_absolute_iris() {
        assert!("schema:Event".parse::<Iri>().is_ok());
        assert!("Event".parse::<Iri>().is_err());
    }
}
