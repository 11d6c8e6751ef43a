//! Runtime instances of generated types and their JSON-LD rendering.
//!
//! A [`SchemaObject`] mirrors a populated concrete type: metadata plus an
//! ordered list of set fields. [`StructuredDataService`] turns it into a
//! linked-data document.

use chrono::{DateTime, Utc};

mod service;

pub use service::StructuredDataService;

use crate::vocabulary::value_objects::Iri;

/// Class identity carried by every concrete instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaMetadata {
    id: String,
    label: String,
    sub_class_of: Vec<String>,
}

impl SchemaMetadata {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sub_class_of: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.sub_class_of.push(parent.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Rendered as the `@type` of the instance.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn sub_class_of(&self) -> &[String] {
        &self.sub_class_of
    }
}

/// Value of a field on a [`SchemaObject`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// Rendered as ISO-8601 UTC with millisecond precision.
    Date(DateTime<Utc>),
    /// Enumeration member or any other address.
    Iri(Iri),
    /// Nested instance, flattened recursively.
    Object(Box<SchemaObject>),
    /// Ordered collection; nested instances inside are flattened.
    List(Vec<Value>),
    /// Passed through untouched.
    Json(serde_json::Value),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<Iri> for Value {
    fn from(value: Iri) -> Self {
        Self::Iri(value)
    }
}

impl From<SchemaObject> for Value {
    fn from(value: SchemaObject) -> Self {
        Self::Object(Box::new(value))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// Populated instance of a concrete type.
///
/// Fields keep the order they were first set in; setting a field again
/// replaces its value in place.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaObject {
    metadata: SchemaMetadata,
    fields: Vec<(String, Value)>,
}

impl SchemaObject {
    #[must_use]
    pub fn new(metadata: SchemaMetadata) -> Self {
        Self {
            metadata,
            fields: Vec::new(),
        }
    }

    /// Sets `name`, keeping its original position when already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Builder form of [`SchemaObject::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Clears a field, returning its previous value.
    pub fn unset(&mut self, name: &str) -> Option<Value> {
        let position = self.fields.iter().position(|(field, _)| field == name)?;
        Some(self.fields.remove(position).1)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn metadata(&self) -> &SchemaMetadata {
        &self.metadata
    }

    /// Set fields in assignment order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}
