use chrono::{DateTime, Utc};
use rstest::{fixture, rstest};
use schema_codegen::{
    config::VocabularySettings,
    structured_data::{SchemaMetadata, SchemaObject, StructuredDataService, Value},
    vocabulary::Iri,
};
use serde_json::json;

fn metadata(label: &str) -> SchemaMetadata {
    SchemaMetadata::new(format!("schema:{label}"), label)
}

fn member(label: &str) -> Iri {
    Iri::join("https://schema.org/", label).expect("valid member address")
}

fn date(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("valid date")
}

#[fixture]
fn service() -> StructuredDataService {
    StructuredDataService::from(&VocabularySettings::default())
}

fn basic_event(start: &str) -> SchemaObject {
    let performer = SchemaObject::new(metadata("Person")).with("name", "Performer Name");
    SchemaObject::new(metadata("Event").with_parent("schema:Thing"))
        .with("name", "Event Name")
        .with("performer", performer)
        .with("description", "Event Description")
        .with("image", "https://example.com/image.jpg")
        .with("eventStatus", member("EventScheduled"))
        .with("startDate", date(start))
}

#[rstest]
fn basic_event_document(service: StructuredDataService) {
    let event = basic_event("2025-12-01T11:00:00.000Z");

    let json_string = service.structured_data_json_string(&event);
    assert_eq!(
        json_string,
        r#"{"@context":"https://schema.org","@type":"Event","description":"Event Description","eventStatus":"https://schema.org/EventScheduled","image":"https://example.com/image.jpg","name":"Event Name","performer":{"name":"Performer Name","@type":"Person"},"startDate":"2025-12-01T11:00:00.000Z"}"#
    );
    assert_eq!(
        serde_json::Value::Object(service.structured_data(&event)).to_string(),
        json_string
    );
}

#[rstest]
fn full_event_document(service: StructuredDataService) {
    let offer = SchemaObject::new(metadata("Offer"))
        .with("price", 100_i64)
        .with("priceCurrency", "EUR")
        .with("validFrom", date("2025-12-01T11:50:00.000Z"))
        .with("url", "http://google.fr")
        .with("availability", member("InStock"));

    let address = SchemaObject::new(metadata("PostalAddress"))
        .with("streetAddress", "123 Main St")
        .with("addressLocality", "Springfield")
        .with("addressRegion", "IL")
        .with("postalCode", "62701")
        .with("addressCountry", "US");
    let location = SchemaObject::new(metadata("Place"))
        .with("name", "Offline Event")
        .with("address", address);

    let event = basic_event("2025-12-01T20:00:00.000Z")
        .with("offers", vec![offer])
        .with("location", location)
        .with("eventAttendanceMode", member("OfflineEventAttendanceMode"));

    assert_eq!(
        service.structured_data_json_string(&event),
        r#"{"@context":"https://schema.org","@type":"Event","description":"Event Description","eventAttendanceMode":"https://schema.org/OfflineEventAttendanceMode","eventStatus":"https://schema.org/EventScheduled","image":"https://example.com/image.jpg","location":{"name":"Offline Event","address":{"streetAddress":"123 Main St","addressLocality":"Springfield","addressRegion":"IL","postalCode":"62701","addressCountry":"US","@type":"PostalAddress"},"@type":"Place"},"name":"Event Name","offers":[{"price":100,"priceCurrency":"EUR","validFrom":"2025-12-01T11:50:00.000Z","url":"http://google.fr","availability":"https://schema.org/InStock","@type":"Offer"}],"performer":{"name":"Performer Name","@type":"Person"},"startDate":"2025-12-01T20:00:00.000Z"}"#
    );
}

#[rstest]
fn aggregate_rating_document(service: StructuredDataService) {
    let rating = SchemaObject::new(metadata("AggregateRating"))
        .with("ratingValue", 4.5)
        .with("reviewCount", 10_i64)
        .with("bestRating", 5.0)
        .with("worstRating", 1_i64);
    let offer = SchemaObject::new(metadata("AggregateOffer"))
        .with("priceCurrency", "EUR")
        .with("highPrice", 50.1)
        .with("lowPrice", 10.1);
    let application = SchemaObject::new(metadata("WebApplication"))
        .with("name", "Application name")
        .with("url", "https://example.com")
        .with("description", "Application description")
        .with("image", "https://example.com/image.jpg")
        .with("applicationCategory", "BusinessApplication")
        .with("aggregateRating", rating)
        .with("offers", offer);

    assert_eq!(
        serde_json::Value::Object(service.structured_data(&application)),
        json!({
            "@context": "https://schema.org",
            "@type": "WebApplication",
            "aggregateRating": {
                "@type": "AggregateRating",
                "ratingValue": 4.5,
                "reviewCount": 10,
                "bestRating": 5,
                "worstRating": 1,
            },
            "applicationCategory": "BusinessApplication",
            "description": "Application description",
            "image": "https://example.com/image.jpg",
            "name": "Application name",
            "offers": {
                "@type": "AggregateOffer",
                "priceCurrency": "EUR",
                "highPrice": 50.1,
                "lowPrice": 10.1,
            },
            "url": "https://example.com",
        })
    );
}

#[rstest]
fn assignment_order_does_not_change_the_document(service: StructuredDataService) {
    let first = SchemaObject::new(metadata("Event"))
        .with("name", "Gala")
        .with("description", "Yearly")
        .with("eventStatus", member("EventScheduled"));
    let second = SchemaObject::new(metadata("Event"))
        .with("eventStatus", member("EventScheduled"))
        .with("description", "Yearly")
        .with("name", "Gala");

    assert_eq!(
        service.structured_data_json_string(&first),
        service.structured_data_json_string(&second)
    );
}

#[rstest]
fn lists_flatten_instances_and_pass_other_values_through(service: StructuredDataService) {
    let event = SchemaObject::new(metadata("Event")).with(
        "performer",
        Value::List(vec![
            SchemaObject::new(metadata("Person"))
                .with("name", "Ada")
                .into(),
            "Grace".into(),
            Value::Json(json!({"name": "raw"})),
        ]),
    );

    let flat = service.flatten(&event);
    assert_eq!(
        flat.get("performer"),
        Some(&json!([{"name": "Ada", "@type": "Person"}, "Grace", {"name": "raw"}]))
    );
    assert_eq!(flat.get("@type"), Some(&json!("Event")));
    assert!(flat.get("@context").is_none());
}
