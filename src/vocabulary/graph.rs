//! Ingestion of raw JSON-LD graph nodes.
//!
//! The vocabulary document is loosely typed: `@type` and relation fields may be
//! a scalar or a list, labels may be plain strings or language-tagged values.
//! Everything is normalized here into [`GraphNode`]; nothing downstream looks at
//! the raw shapes again.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::entities::{EnumMember, PropertyModel};
use crate::config::VocabularySettings;

/// A field that holds either one value or a list of values.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

/// A label or comment value.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LangString {
    Plain(String),
    Tagged {
        #[serde(rename = "@value")]
        value: String,
        #[serde(rename = "@language", default)]
        language: Option<String>,
    },
}

impl LangString {
    fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Tagged { value, .. } => value,
        }
    }

    fn language(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Tagged { language, .. } => language.as_deref(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Reference {
    #[serde(rename = "@id")]
    pub id: String,
}

/// Top-level vocabulary document.
#[derive(Debug, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "@graph")]
    pub graph: Vec<RawNode>,
}

/// A graph node exactly as it appears in the document.
#[derive(Clone, Debug, Deserialize)]
pub struct RawNode {
    #[serde(rename = "@id")]
    pub id: String,
    #[serde(rename = "@type", default)]
    pub types: OneOrMany<String>,
    #[serde(rename = "rdfs:label", default)]
    pub label: Option<OneOrMany<LangString>>,
    #[serde(rename = "rdfs:comment", default)]
    pub comment: Option<OneOrMany<LangString>>,
    #[serde(rename = "rdfs:subClassOf", default)]
    pub sub_class_of: Option<OneOrMany<Reference>>,
    #[serde(rename = "schema:domainIncludes", default)]
    pub domain_includes: Option<OneOrMany<Reference>>,
    #[serde(rename = "schema:rangeIncludes", default)]
    pub range_includes: Option<OneOrMany<Reference>>,
}

/// A normalized graph node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
    pub id: String,
    pub types: Vec<String>,
    pub label: Option<String>,
    pub comment: Option<String>,
    pub parents: Vec<String>,
    pub domains: Vec<String>,
    /// `None` when the node declares no range at all.
    pub ranges: Option<Vec<String>>,
}

impl GraphNode {
    /// Normalizes a raw node, picking `language` among tagged label values.
    #[must_use]
    pub fn from_raw(raw: RawNode, language: &str) -> Self {
        let references = |field: Option<OneOrMany<Reference>>| {
            field
                .map(OneOrMany::into_vec)
                .unwrap_or_default()
                .into_iter()
                .map(|reference| reference.id)
                .collect::<Vec<_>>()
        };

        Self {
            id: raw.id,
            types: raw.types.into_vec(),
            label: pick_language(raw.label, language),
            comment: pick_language(raw.comment, language),
            parents: references(raw.sub_class_of),
            domains: references(raw.domain_includes),
            ranges: raw
                .range_includes
                .map(|range| range.into_vec().into_iter().map(|r| r.id).collect()),
        }
    }

    /// Sanitized display name, from the label or else the identifier's local part.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self
            .label
            .as_deref()
            .unwrap_or_else(|| local_name(&self.id));
        sanitize_name(name)
    }
}

fn pick_language(field: Option<OneOrMany<LangString>>, language: &str) -> Option<String> {
    let values = field?.into_vec();
    values
        .iter()
        .find(|value| value.language() == Some(language))
        .or_else(|| values.first())
        .map(|value| value.value().to_string())
}

/// Part of an identifier after its last `:`, `/` or `#`.
#[must_use]
pub fn local_name(id: &str) -> &str {
    id.rsplit(|c| matches!(c, ':' | '/' | '#'))
        .next()
        .unwrap_or(id)
}

/// Prefixes names that start with a digit so they form valid identifiers.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// Role of a node in the vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Class,
    Property,
    /// A constant whose single type tag names its declaring class.
    EnumMember { declaring_class: String },
    Other,
}

/// Classifies a node by its type tags.
#[must_use]
pub fn classify(node: &GraphNode, settings: &VocabularySettings) -> NodeKind {
    if node.types.iter().any(|tag| *tag == settings.class_tag) {
        return NodeKind::Class;
    }
    if node.types.iter().any(|tag| *tag == settings.property_tag) {
        return NodeKind::Property;
    }
    match node.types.as_slice() {
        [tag] if tag.starts_with(&settings.prefix) => NodeKind::EnumMember {
            declaring_class: tag.clone(),
        },
        _ => NodeKind::Other,
    }
}

/// Output of ingestion: nodes grouped by role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ingested {
    /// Class nodes by identifier.
    pub classes: BTreeMap<String, GraphNode>,
    /// Properties by the identifier of each domain class they apply to.
    pub properties: BTreeMap<String, Vec<PropertyModel>>,
    /// Enumeration members by declaring class identifier, in document order.
    pub members: BTreeMap<String, Vec<EnumMember>>,
}

/// Splits a document's nodes into classes, domain-keyed properties and
/// enumeration members.
#[must_use]
pub fn ingest(document: RawDocument, settings: &VocabularySettings) -> Ingested {
    let mut ingested = Ingested::default();

    for raw in document.graph {
        let node = GraphNode::from_raw(raw, &settings.preferred_language);
        match classify(&node, settings) {
            NodeKind::Class => {
                ingested.classes.insert(node.id.clone(), node);
            }
            NodeKind::Property => {
                let mut property = PropertyModel::new(node.id.as_str(), node.display_name());
                if let Some(comment) = &node.comment {
                    property = property.with_comment(comment.as_str());
                }
                if let Some(ranges) = &node.ranges {
                    property = property.with_range(ranges.iter().cloned());
                }
                for domain in &node.domains {
                    ingested
                        .properties
                        .entry(domain.clone())
                        .or_default()
                        .push(property.clone());
                }
            }
            NodeKind::EnumMember { declaring_class } => {
                let mut member =
                    EnumMember::new(node.id.as_str(), declaring_class.as_str(), node.display_name());
                if let Some(comment) = &node.comment {
                    member = member.with_comment(comment.as_str());
                }
                ingested
                    .members
                    .entry(declaring_class)
                    .or_default()
                    .push(member);
            }
            NodeKind::Other => {}
        }
    }

    tracing::info!(
        classes = ingested.classes.len(),
        domains = ingested.properties.len(),
        enumerations = ingested.members.len(),
        "ingested vocabulary graph"
    );
    ingested
}
