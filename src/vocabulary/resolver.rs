//! Builds the immutable class model from ingested nodes.

use std::collections::{BTreeMap, BTreeSet};

use super::{
    entities::{ClassModel, EnumMember, PropertyModel, ResolvedModel},
    graph::GraphNode,
};
use crate::{
    config::VocabularySettings,
    diagnostics::{Diagnostic, Diagnostics},
};

/// Resolves every class node into a [`ClassModel`].
///
/// Parents that are neither class nodes nor primitive tags are reported but
/// kept on the model; emission simply leaves them out of the extends-list.
pub fn build_classes(
    class_nodes: &BTreeMap<String, GraphNode>,
    properties: &BTreeMap<String, Vec<PropertyModel>>,
    members: &BTreeMap<String, Vec<EnumMember>>,
    settings: &VocabularySettings,
    diagnostics: &mut Diagnostics,
) -> ResolvedModel {
    let mut classes = BTreeMap::new();

    for (id, node) in class_nodes {
        let name = node.display_name();
        let mut class = ClassModel::new(id.as_str(), name.as_str());
        if let Some(comment) = &node.comment {
            class = class.with_comment(comment.as_str());
        }

        for parent in &node.parents {
            if !class_nodes.contains_key(parent) && settings.primitive(parent).is_none() {
                diagnostics.push(Diagnostic::UnresolvedParent {
                    class: name.clone(),
                    parent: parent.clone(),
                });
            }
            class = class.with_parent(parent.as_str());
        }

        for property in properties.get(id).into_iter().flatten() {
            class = class.with_property(property.clone());
        }

        let mut visited = BTreeSet::new();
        class = class.with_enumeration(is_enumeration(
            id,
            class_nodes,
            &settings.enumeration_root,
            &mut visited,
        ));

        for member in members.get(id).into_iter().flatten() {
            class = class.with_member(member.clone());
        }

        classes.insert(id.clone(), class);
    }

    let model = ResolvedModel::new(classes);
    tracing::info!(
        classes = model.len(),
        enumerations = model.classes().filter(|c| c.is_enumeration()).count(),
        "resolved class model"
    );
    model
}

/// Whether the class `id` is an enumeration: a class node that either names
/// `root` as a direct parent or has a class-node parent that is itself an
/// enumeration.
///
/// Runs against the raw class nodes, so resolution order does not matter.
/// Cycle-break policy: a node already present in `visited` counts as a
/// non-enumeration, so malformed cyclic parent graphs still terminate.
pub fn is_enumeration(
    id: &str,
    class_nodes: &BTreeMap<String, GraphNode>,
    root: &str,
    visited: &mut BTreeSet<String>,
) -> bool {
    let Some(node) = class_nodes.get(id) else {
        return false;
    };
    if !visited.insert(id.to_string()) {
        return false;
    }
    if node.parents.iter().any(|parent| parent == root) {
        return true;
    }
    node.parents
        .iter()
        .filter(|parent| class_nodes.contains_key(parent.as_str()))
        .any(|parent| is_enumeration(parent, class_nodes, root, visited))
}
