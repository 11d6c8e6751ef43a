use std::path::Path;

use rstest::rstest;
use schema_codegen::{
    fs::{FileSystem, LocalFileSystem, MemoryFileSystem},
    parse, parse_str,
    vocabulary::{hierarchy, properties, TypeSpec},
    Config, Diagnostic, Error,
};

const FIXTURE: &str = include_str!("fixtures/schema.jsonld");

fn model() -> schema_codegen::ResolvedModel {
    parse_str(FIXTURE, &Config::default())
        .expect("fixture parses")
        .model
}

#[test]
fn every_class_node_becomes_a_class() {
    let model = model();
    assert_eq!(model.len(), 15);
    assert!(!model.contains("https://schema.org/"));
    assert!(!model.contains("schema:name"));
    assert!(!model.contains("schema:EventScheduled"));
}

#[test]
fn unresolved_parents_are_diagnosed_at_parse_time() {
    let parsed = parse_str(FIXTURE, &Config::default()).expect("fixture parses");
    assert_eq!(
        parsed.diagnostics.into_vec(),
        vec![Diagnostic::UnresolvedParent {
            class: "PostalAddress".into(),
            parent: "schema:ContactPoint".into(),
        }]
    );
}

#[rstest]
#[case("schema:EventStatusType", true, 2)]
#[case("schema:ActionStatusType", true, 2)]
#[case("schema:StatusEnumeration", true, 0)]
#[case("schema:ItemAvailability", true, 2)]
#[case("schema:Enumeration", false, 0)]
#[case("schema:Event", false, 0)]
fn enumerations_and_their_members(
    #[case] id: &str,
    #[case] is_enumeration: bool,
    #[case] members: usize,
) {
    let model = model();
    let class = model.class(id).expect("class exists");
    assert_eq!(class.is_enumeration(), is_enumeration);
    assert_eq!(class.members().len(), members);
}

#[test]
fn members_keep_document_order() {
    let model = model();
    let status = model.class("schema:EventStatusType").expect("status");
    let labels: Vec<&str> = status.members().iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["EventScheduled", "EventCancelled"]);
    assert_eq!(status.members()[0].id(), "schema:EventScheduled");
    assert_eq!(
        status.members()[0].declaring_class(),
        "schema:EventStatusType"
    );
}

#[test]
fn labels_prefer_the_configured_language_and_names_are_sanitized() {
    let model = model();
    assert_eq!(
        model.class("schema:Person").and_then(|c| c.comment()),
        Some("A person (alive, dead, undead, or fictional).")
    );
    assert_eq!(
        model.class("schema:Thing").map(|c| c.name()),
        Some("Thing")
    );
    assert_eq!(
        model.class("schema:3DModel").map(|c| c.name()),
        Some("_3DModel")
    );
    assert!(model.class_named("_3DModel").is_some());
}

#[test]
fn properties_attach_to_every_domain() {
    let model = model();
    for id in ["schema:Person", "schema:Place"] {
        let class = model.class(id).expect("class exists");
        let address = class
            .properties()
            .iter()
            .find(|p| p.name() == "address")
            .expect("address property");
        assert_eq!(
            address.type_spec(),
            &TypeSpec::Targets(vec!["schema:PostalAddress".into(), "schema:Text".into()])
        );
    }

    let thing = model.class("schema:Thing").expect("thing");
    let additional = thing
        .properties()
        .iter()
        .find(|p| p.name() == "additionalType")
        .expect("additionalType");
    assert_eq!(additional.type_spec(), &TypeSpec::Unconstrained);
}

#[test]
fn hierarchy_queries_over_the_fixture() {
    let model = model();
    let status = model.class("schema:EventStatusType").expect("status");
    assert_eq!(
        hierarchy::ancestors(status, &model),
        vec![
            "schema:Enumeration",
            "schema:Intangible",
            "schema:StatusEnumeration",
            "schema:Thing"
        ]
    );

    let enumeration = model.class("schema:StatusEnumeration").expect("status");
    assert_eq!(
        hierarchy::descendants(enumeration, &model),
        vec!["schema:ActionStatusType", "schema:EventStatusType"]
    );

    let offer = model.class("schema:Offer").expect("offer");
    let names: Vec<&str> = properties::all_properties(offer, &model)
        .into_iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(
        names,
        vec![
            "name",
            "description",
            "image",
            "url",
            "additionalType",
            "price",
            "priceCurrency",
            "availability",
            "validFrom"
        ]
    );
}

#[test]
fn parsing_is_deterministic() {
    assert_eq!(model(), model());
}

#[tokio::test]
async fn parse_reads_through_the_file_system() {
    let fs = MemoryFileSystem::new().with_file("vocab/schema.jsonld", FIXTURE);
    let parsed = parse(&fs, Path::new("vocab/schema.jsonld"), &Config::default())
        .await
        .expect("parse");
    assert_eq!(parsed.model, model());
}

#[tokio::test]
async fn parse_reads_from_disk() {
    let tree = tree_fs::TreeBuilder::default()
        .drop(true)
        .add_file("schema.jsonld", FIXTURE)
        .create()
        .expect("create tree");
    let path = tree.root.join("schema.jsonld");
    assert_eq!(
        LocalFileSystem
            .read_to_string(&path)
            .await
            .expect("read")
            .len(),
        FIXTURE.len()
    );

    let parsed = parse(&LocalFileSystem, &path, &Config::default())
        .await
        .expect("parse");
    assert_eq!(parsed.model.len(), 15);

    let err = parse(
        &LocalFileSystem,
        &tree.root.join("missing.jsonld"),
        &Config::default(),
    )
    .await
    .expect_err("missing file");
    assert!(matches!(err, Error::InputNotFound { .. }));
}

#[test]
fn custom_vocabulary_terms_come_from_configuration() {
    let config = Config::from_yaml(
        r"
vocabulary:
  base_address: https://example.org/vocab/
  context: https://example.org/vocab
  prefix: 'ex:'
  enumeration_root: 'ex:Enumeration'
  primitives:
    'ex:Text': string
",
    )
    .expect("config");
    let raw = r#"{
        "@graph": [
            { "@id": "ex:Enumeration", "@type": "rdfs:Class" },
            { "@id": "ex:Color", "@type": "rdfs:Class", "rdfs:subClassOf": { "@id": "ex:Enumeration" } },
            { "@id": "ex:Red", "@type": "ex:Color", "rdfs:label": "Red" },
            { "@id": "ex:Shape", "@type": "rdfs:Class" },
            {
                "@id": "ex:label",
                "@type": "rdf:Property",
                "schema:domainIncludes": { "@id": "ex:Shape" },
                "schema:rangeIncludes": { "@id": "ex:Text" }
            }
        ]
    }"#;
    let parsed = parse_str(raw, &config).expect("parse");
    let color = parsed.model.class("ex:Color").expect("color");
    assert!(color.is_populated_enumeration());
    assert_eq!(color.name(), "Color");
    let shape = parsed.model.class("ex:Shape").expect("shape");
    assert_eq!(shape.properties()[0].name(), "label");
    assert!(parsed.diagnostics.is_empty());
}
