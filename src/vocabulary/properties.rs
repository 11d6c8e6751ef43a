//! Inherited and own properties per class.
//!
//! Properties are keyed by name: a generated type cannot declare two members
//! with the same name. When distinct properties share a name the first one
//! seen wins (own declarations before inherited ones, ancestors in identifier
//! order) and [`name_collisions`] reports the loser.

use std::collections::BTreeSet;

use super::{
    entities::{ClassModel, PropertyModel, ResolvedModel},
    hierarchy::ancestors,
};
use crate::diagnostics::Diagnostic;

/// Own properties of every ancestor, deduplicated by name.
#[must_use]
pub fn inherited_properties<'a>(
    class: &'a ClassModel,
    model: &'a ResolvedModel,
) -> Vec<&'a PropertyModel> {
    let mut names = BTreeSet::new();
    ancestors(class, model)
        .into_iter()
        .filter_map(|id| model.class(id))
        .flat_map(ClassModel::properties)
        .filter(|property| names.insert(property.name()))
        .collect()
}

/// Inherited properties with same-named own declarations taking their place,
/// followed by the remaining own properties.
#[must_use]
pub fn all_properties<'a>(
    class: &'a ClassModel,
    model: &'a ResolvedModel,
) -> Vec<&'a PropertyModel> {
    let mut properties = inherited_properties(class, model);
    for own in own_properties(class) {
        match properties
            .iter_mut()
            .find(|existing| existing.name() == own.name())
        {
            Some(slot) => *slot = own,
            None => properties.push(own),
        }
    }
    properties
}

/// Members declared on the contract: own properties not already declared by an
/// ancestor, since the contract extends its parents.
#[must_use]
pub fn contract_properties<'a>(
    class: &'a ClassModel,
    model: &'a ResolvedModel,
) -> Vec<&'a PropertyModel> {
    let inherited: BTreeSet<&str> = inherited_properties(class, model)
        .into_iter()
        .map(PropertyModel::name)
        .collect();
    own_properties(class)
        .into_iter()
        .filter(|property| !inherited.contains(property.name()))
        .collect()
}

/// Members of the concrete type: the whole inherited and own set.
#[must_use]
pub fn concrete_properties<'a>(
    class: &'a ClassModel,
    model: &'a ResolvedModel,
) -> Vec<&'a PropertyModel> {
    all_properties(class, model)
}

/// Distinct properties hidden because another one on `class` has the same name.
#[must_use]
pub fn name_collisions(class: &ClassModel, model: &ResolvedModel) -> Vec<Diagnostic> {
    let kept = all_properties(class, model);
    let candidates = class.properties().iter().chain(
        ancestors(class, model)
            .into_iter()
            .filter_map(|id| model.class(id))
            .flat_map(ClassModel::properties),
    );

    let mut reported = BTreeSet::new();
    let mut collisions = Vec::new();
    for candidate in candidates {
        let Some(winner) = kept.iter().find(|p| p.name() == candidate.name()) else {
            continue;
        };
        if winner.id() != candidate.id() && reported.insert(candidate.id()) {
            collisions.push(Diagnostic::PropertyNameCollision {
                class: class.name().to_string(),
                name: candidate.name().to_string(),
                kept: winner.id().to_string(),
                dropped: candidate.id().to_string(),
            });
        }
    }
    collisions
}

fn own_properties(class: &ClassModel) -> Vec<&PropertyModel> {
    let mut names = BTreeSet::new();
    class
        .properties()
        .iter()
        .filter(|property| names.insert(property.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{all_properties, concrete_properties, contract_properties, name_collisions};
    use crate::{
        diagnostics::Diagnostic,
        vocabulary::entities::{ClassModel, PropertyModel, ResolvedModel},
    };

    fn names(properties: &[&PropertyModel]) -> Vec<String> {
        properties
            .iter()
            .map(|p| format!("{}={}", p.name(), p.id()))
            .collect()
    }

    fn chain() -> ResolvedModel {
        [
            ClassModel::new("ex:A", "A")
                .with_property(PropertyModel::new("ex:a/x", "x"))
                .with_property(PropertyModel::new("ex:name", "name")),
            ClassModel::new("ex:B", "B")
                .with_parent("ex:A")
                .with_property(PropertyModel::new("ex:b", "b")),
            ClassModel::new("ex:C", "C")
                .with_parent("ex:B")
                .with_property(PropertyModel::new("ex:c/x", "x"))
                .with_property(PropertyModel::new("ex:c", "c")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn own_declaration_wins_over_inherited_one() {
        let model = chain();
        let c = model.class("ex:C").expect("c");
        assert_eq!(
            names(&all_properties(c, &model)),
            vec!["x=ex:c/x", "name=ex:name", "b=ex:b", "c=ex:c"]
        );
        assert_eq!(
            names(&concrete_properties(c, &model)),
            names(&all_properties(c, &model))
        );
    }

    #[test]
    fn contract_skips_names_declared_up_the_chain() {
        let model = chain();
        let c = model.class("ex:C").expect("c");
        assert_eq!(names(&contract_properties(c, &model)), vec!["c=ex:c"]);
        let a = model.class("ex:A").expect("a");
        assert_eq!(
            names(&contract_properties(a, &model)),
            vec!["x=ex:a/x", "name=ex:name"]
        );
    }

    #[test]
    fn same_property_on_several_domains_is_not_a_collision() {
        let model: ResolvedModel = [
            ClassModel::new("ex:A", "A").with_property(PropertyModel::new("ex:name", "name")),
            ClassModel::new("ex:B", "B")
                .with_parent("ex:A")
                .with_property(PropertyModel::new("ex:name", "name")),
        ]
        .into_iter()
        .collect();
        let b = model.class("ex:B").expect("b");
        assert!(name_collisions(b, &model).is_empty());
        assert!(contract_properties(b, &model).is_empty());
    }

    #[test]
    fn distinct_properties_sharing_a_name_are_reported() {
        let model = chain();
        let c = model.class("ex:C").expect("c");
        assert_eq!(
            name_collisions(c, &model),
            vec![Diagnostic::PropertyNameCollision {
                class: "C".into(),
                name: "x".into(),
                kept: "ex:c/x".into(),
                dropped: "ex:a/x".into(),
            }]
        );
    }
}
