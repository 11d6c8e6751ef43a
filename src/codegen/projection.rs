//! Maps property ranges to TypeScript type unions.

use super::Imports;
use crate::{
    config::Config,
    diagnostics::{Diagnostic, Diagnostics},
    vocabulary::{
        entities::{ClassModel, PropertyModel, ResolvedModel, TypeSpec},
        hierarchy::{ancestors, descendants},
    },
};

/// Computes type unions against one model and configuration.
#[derive(Clone, Copy, Debug)]
pub struct Projector<'a> {
    model: &'a ResolvedModel,
    config: &'a Config,
}

impl<'a> Projector<'a> {
    #[must_use]
    pub fn new(model: &'a ResolvedModel, config: &'a Config) -> Self {
        Self { model, config }
    }

    /// Ordered, duplicate-free union of type tokens for `property` as declared
    /// on the class named `owner`.
    ///
    /// Every referenced class or enumeration is registered in `imports`.
    /// Targets that resolve to nothing are reported and skipped; a union left
    /// empty falls back to the unconstrained type.
    pub fn union(
        &self,
        property: &PropertyModel,
        owner: &str,
        imports: &mut Imports,
        diagnostics: &mut Diagnostics,
    ) -> Vec<String> {
        let unconstrained = &self.config.emit.unconstrained_type;
        let targets = match property.type_spec() {
            TypeSpec::Unconstrained => return vec![unconstrained.clone()],
            TypeSpec::Targets(targets) => targets,
        };

        let mut tokens: Vec<String> = Vec::new();
        for target in targets {
            if let Some(primitive) = self.config.vocabulary.primitive(target) {
                tokens.push(primitive.to_string());
                tokens.push(format!("{primitive}[]"));
                continue;
            }
            let Some(class) = self.model.class(target) else {
                diagnostics.push(Diagnostic::UnresolvedType {
                    class: owner.to_string(),
                    property: property.name().to_string(),
                    target: target.clone(),
                });
                continue;
            };
            if class.is_enumeration() {
                for enumeration in self.related_enumerations(class) {
                    imports.add_sibling(enumeration.name());
                    tokens.push(enumeration.name().to_string());
                }
            } else {
                imports.add_sibling(class.name());
                tokens.push(class.name().to_string());
                tokens.push(format!("{}[]", class.name()));
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        tokens.retain(|token| seen.insert(token.clone()));

        if tokens.is_empty() {
            diagnostics.push(Diagnostic::EmptyTypeUnion {
                class: owner.to_string(),
                property: property.name().to_string(),
            });
            return vec![unconstrained.clone()];
        }
        tokens
    }

    // Populated enumerations a value of `class` may take: its ancestors, its
    // descendants, then itself.
    fn related_enumerations(&self, class: &'a ClassModel) -> Vec<&'a ClassModel> {
        let populated = |ids: Vec<&'a str>| {
            ids.into_iter()
                .filter_map(|id| self.model.class(id))
                .filter(|related| related.is_populated_enumeration())
                .collect::<Vec<_>>()
        };

        let mut related = populated(ancestors(class, self.model));
        related.extend(populated(descendants(class, self.model)));
        if class.is_populated_enumeration() {
            related.push(class);
        }
        related
    }
}
