//! Generator configuration.
//!
//! Every setting has a default matching the public schema.org vocabulary and the
//! TypeScript layout consumers import from, so `Config::default()` is enough for
//! the common case. Partial YAML documents override only the keys they name.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{vocabulary::value_objects::Iri, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: VocabularySettings,
    pub emit: EmitSettings,
}

impl Config {
    /// Parses a YAML document, filling unspecified keys with defaults.
    pub fn from_yaml(raw: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the vocabulary addresses are absolute IRIs.
    pub fn validate(&self) -> Result<()> {
        Iri::new(self.vocabulary.base_address.as_str())?;
        Iri::new(self.vocabulary.context.as_str())?;
        Ok(())
    }
}

/// Terms of the ingested vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VocabularySettings {
    /// Canonical address enumeration member values are appended to.
    pub base_address: String,
    /// Value injected as `@context` into structured data documents.
    pub context: String,
    /// Compact prefix of vocabulary-specific identifiers.
    pub prefix: String,
    pub class_tag: String,
    pub property_tag: String,
    /// Class every enumeration ultimately descends from.
    pub enumeration_root: String,
    /// Language picked when a label or comment carries several tagged values.
    pub preferred_language: String,
    /// Type tags mapped straight to target-language primitives.
    pub primitives: BTreeMap<String, String>,
}

impl Default for VocabularySettings {
    fn default() -> Self {
        let primitives = [
            ("schema:Text", "string"),
            ("schema:Number", "number"),
            ("schema:Integer", "number"),
            ("schema:Float", "number"),
            ("schema:Boolean", "boolean"),
            ("schema:Date", "Date"),
            ("schema:DateTime", "Date"),
            ("schema:Time", "string"),
            ("schema:URL", "string"),
            ("schema:CssSelectorType", "string"),
            ("schema:XPathType", "string"),
            ("schema:PronounceableText", "string"),
            ("schema:DataTypeSchema", "string"),
        ]
        .into_iter()
        .map(|(tag, primitive)| (tag.to_string(), primitive.to_string()))
        .collect();

        Self {
            base_address: "https://schema.org/".to_string(),
            context: "https://schema.org".to_string(),
            prefix: "schema:".to_string(),
            class_tag: "rdfs:Class".to_string(),
            property_tag: "rdf:Property".to_string(),
            enumeration_root: "schema:Enumeration".to_string(),
            preferred_language: "en".to_string(),
            primitives,
        }
    }
}

impl VocabularySettings {
    /// Returns the primitive type a tag maps to, if any.
    #[must_use]
    pub fn primitive(&self, tag: &str) -> Option<&str> {
        self.primitives.get(tag).map(String::as_str)
    }
}

/// Layout and formatting of the generated sources.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmitSettings {
    pub indent: String,
    /// Soft width documentation comments are wrapped at.
    pub comment_width: usize,
    /// Declarations longer than this are split one union member per line.
    pub max_line_width: usize,
    pub unconstrained_type: String,
    pub fallback_comment: String,
    /// Appended to the class name to form the concrete type name.
    pub concrete_suffix: String,
    pub interface_import: String,
    pub metadata_import: String,
}

impl Default for EmitSettings {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            comment_width: 80,
            max_line_width: 200,
            unconstrained_type: "any".to_string(),
            fallback_comment: "No description available".to_string(),
            concrete_suffix: "Schema".to_string(),
            interface_import: "../../classes/schema.interface".to_string(),
            metadata_import: "../../classes/schema-metadata".to_string(),
        }
    }
}
