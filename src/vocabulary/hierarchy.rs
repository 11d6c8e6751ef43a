//! Transitive closure over parent edges.
//!
//! Both directions return identifiers deduplicated and in lexical order, and
//! both tolerate cycles in malformed vocabularies.

use std::collections::{BTreeSet, VecDeque};

use super::entities::{ClassModel, ResolvedModel};

/// Every strict ancestor of `class`.
///
/// Parents missing from the model (primitives, vocabulary roots, typos) are
/// included but not followed any further.
#[must_use]
pub fn ancestors<'a>(class: &'a ClassModel, model: &'a ResolvedModel) -> Vec<&'a str> {
    let mut visited = BTreeSet::new();
    let mut to_visit: VecDeque<&str> = class.parents().iter().map(String::as_str).collect();

    while let Some(current) = to_visit.pop_front() {
        if current == class.id() || !visited.insert(current) {
            continue;
        }
        if let Some(parent) = model.class(current) {
            to_visit.extend(parent.parents().iter().map(String::as_str));
        }
    }

    visited.into_iter().collect()
}

/// Every strict descendant of `class`, found through the reverse parent edge.
#[must_use]
pub fn descendants<'a>(class: &'a ClassModel, model: &'a ResolvedModel) -> Vec<&'a str> {
    let mut found = BTreeSet::new();
    let mut to_visit = VecDeque::from([class.id()]);

    while let Some(current) = to_visit.pop_front() {
        for candidate in model.classes() {
            if candidate.id() != class.id()
                && candidate.parents().iter().any(|parent| parent == current)
                && found.insert(candidate.id())
            {
                to_visit.push_back(candidate.id());
            }
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::{ancestors, descendants};
    use crate::vocabulary::entities::{ClassModel, ResolvedModel};

    fn model() -> ResolvedModel {
        [
            ClassModel::new("schema:Thing", "Thing"),
            ClassModel::new("schema:Place", "Place").with_parent("schema:Thing"),
            ClassModel::new("schema:Organization", "Organization").with_parent("schema:Thing"),
            ClassModel::new("schema:LocalBusiness", "LocalBusiness")
                .with_parent("schema:Place")
                .with_parent("schema:Organization"),
            ClassModel::new("schema:Store", "Store").with_parent("schema:LocalBusiness"),
            ClassModel::new("schema:Text", "Text").with_parent("schema:DataType"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn ancestors_follow_every_parent_once() {
        let model = model();
        let store = model.class("schema:Store").expect("store");
        assert_eq!(
            ancestors(store, &model),
            vec![
                "schema:LocalBusiness",
                "schema:Organization",
                "schema:Place",
                "schema:Thing"
            ]
        );
    }

    #[test]
    fn ancestors_stop_at_unknown_parents() {
        let model = model();
        let text = model.class("schema:Text").expect("text");
        assert_eq!(ancestors(text, &model), vec!["schema:DataType"]);
    }

    #[test]
    fn descendants_are_transitive_and_deduplicated() {
        let model = model();
        let thing = model.class("schema:Thing").expect("thing");
        assert_eq!(
            descendants(thing, &model),
            vec![
                "schema:LocalBusiness",
                "schema:Organization",
                "schema:Place",
                "schema:Store"
            ]
        );
        let store = model.class("schema:Store").expect("store");
        assert!(descendants(store, &model).is_empty());
    }

    #[test]
    fn cycles_terminate_and_exclude_self() {
        let model: ResolvedModel = [
            ClassModel::new("schema:A", "A").with_parent("schema:B"),
            ClassModel::new("schema:B", "B").with_parent("schema:A"),
        ]
        .into_iter()
        .collect();
        let a = model.class("schema:A").expect("a");
        assert_eq!(ancestors(a, &model), vec!["schema:B"]);
        assert_eq!(descendants(a, &model), vec!["schema:B"]);
    }
}
