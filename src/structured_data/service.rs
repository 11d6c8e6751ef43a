use chrono::SecondsFormat;
use serde_json::{Map, Number, Value as Json};

use super::{SchemaObject, Value};
use crate::config::VocabularySettings;

/// Renders [`SchemaObject`] instances as JSON-LD documents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructuredDataService {
    context: String,
}

impl Default for StructuredDataService {
    fn default() -> Self {
        Self::from(&VocabularySettings::default())
    }
}

impl From<&VocabularySettings> for StructuredDataService {
    fn from(settings: &VocabularySettings) -> Self {
        Self::new(settings.context.as_str())
    }
}

impl StructuredDataService {
    /// `context` is injected as `@context` into every top-level document.
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Fields of `object` in assignment order followed by its `@type`.
    ///
    /// Nested instances, including those inside lists, are flattened the same
    /// way.
    #[must_use]
    pub fn flatten(&self, object: &SchemaObject) -> Map<String, Json> {
        let mut document = Map::new();
        for (name, value) in object.fields() {
            document.insert(name.to_string(), self.render(value));
        }
        document.insert(
            "@type".to_string(),
            Json::String(object.metadata().label().to_string()),
        );
        document
    }

    /// Flattened document with `@context` added and top-level keys sorted.
    #[must_use]
    pub fn structured_data(&self, object: &SchemaObject) -> Map<String, Json> {
        let mut document = self.flatten(object);
        document.insert("@context".to_string(), Json::String(self.context.clone()));

        let mut entries: Vec<(String, Json)> = document.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().collect()
    }

    /// Compact JSON text of [`StructuredDataService::structured_data`].
    #[must_use]
    pub fn structured_data_json_string(&self, object: &SchemaObject) -> String {
        Json::Object(self.structured_data(object)).to_string()
    }

    fn render(&self, value: &Value) -> Json {
        match value {
            Value::Text(text) => Json::String(text.clone()),
            Value::Integer(number) => Json::from(*number),
            Value::Float(number) => float(*number),
            Value::Boolean(flag) => Json::Bool(*flag),
            Value::Date(date) => Json::String(date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::Iri(iri) => Json::String(iri.to_string()),
            Value::Object(object) => Json::Object(self.flatten(object)),
            Value::List(values) => Json::Array(values.iter().map(|v| self.render(v)).collect()),
            Value::Json(json) => json.clone(),
        }
    }
}

// Whole floats render without a fractional part; non-finite ones become null.
#[allow(clippy::cast_possible_truncation)]
fn float(number: f64) -> Json {
    if number.fract() == 0.0 && number.abs() < 9_007_199_254_740_992.0 {
        return Json::from(number as i64);
    }
    Number::from_f64(number).map_or(Json::Null, Json::Number)
}
