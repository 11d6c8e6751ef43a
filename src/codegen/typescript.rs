//! TypeScript rendering of contracts, concrete types, enumerations and the
//! manifest.
//!
//! A display name belongs to the class with the lowest identifier carrying
//! it. Other classes with that name are reported and emit nothing, so every
//! artifact path has a single writer.

use super::{
    format::{comment_lines, doc_block, is_identifier, list_entry, optional_member, quote},
    Artifact, ArtifactKind, Imports, Projector,
};
use crate::{
    config::Config,
    diagnostics::{Diagnostic, Diagnostics},
    vocabulary::{
        entities::{ClassModel, PropertyModel, ResolvedModel},
        properties::{concrete_properties, contract_properties, name_collisions},
        value_objects::Iri,
    },
    Error, Result,
};

const MANIFEST_HEADER: &str = "/**\n * Auto-generated index file for vocabulary classes\n * This file exports all generated TypeScript contracts, classes and enums\n */\n";

/// Renders artifacts for one resolved model.
#[derive(Clone, Copy, Debug)]
pub struct TypeScriptEmitter<'a> {
    model: &'a ResolvedModel,
    config: &'a Config,
}

impl<'a> TypeScriptEmitter<'a> {
    #[must_use]
    pub fn new(model: &'a ResolvedModel, config: &'a Config) -> Self {
        Self { model, config }
    }

    /// Every artifact owned by `class`.
    ///
    /// Enumerations yield a single enum artifact, or nothing when they carry no
    /// members. Other classes yield a contract and a concrete type.
    pub fn class_artifacts(
        &self,
        class: &ClassModel,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<Artifact>> {
        if let Some(owner) = self.name_owner(class) {
            diagnostics.push(Diagnostic::DuplicateClassName {
                class: class.name().to_string(),
                id: class.id().to_string(),
                kept: owner.id().to_string(),
            });
            return Ok(Vec::new());
        }
        if class.is_enumeration() {
            if !class.is_populated_enumeration() {
                diagnostics.push(Diagnostic::EmptyEnumerationSkipped {
                    class: class.name().to_string(),
                });
                return Ok(Vec::new());
            }
            return Ok(vec![self.enumeration(class)?]);
        }

        for collision in name_collisions(class, self.model) {
            diagnostics.push(collision);
        }
        Ok(vec![
            self.contract(class, diagnostics)?,
            self.concrete(class, diagnostics)?,
        ])
    }

    /// Interface extending the parent contracts and declaring the properties
    /// no ancestor already declares.
    pub fn contract(&self, class: &ClassModel, diagnostics: &mut Diagnostics) -> Result<Artifact> {
        ensure_identifier(class, class.name())?;
        let mut imports = Imports::new(class.name(), "./");

        let mut extends = Vec::new();
        for parent in class.parents() {
            let Some(parent) = self.model.class(parent) else {
                continue;
            };
            if parent.id() == class.id() || parent.id() == self.config.vocabulary.enumeration_root
            {
                continue;
            }
            imports.add_sibling(parent.name());
            extends.push(parent.name());
        }

        let mut body = self.class_doc(class);
        body.push_str(&format!("export interface {}", class.name()));
        if !extends.is_empty() {
            body.push_str(&format!(" extends {}", extends.join(", ")));
        }
        body.push_str(" {");

        let members = self.members(
            class,
            &contract_properties(class, self.model),
            "",
            &mut imports,
            diagnostics,
        )?;
        if !members.is_empty() {
            body.push_str(&format!("\n{}\n", members.join("\n\n")));
        }
        body.push_str("}\n");

        Ok(Artifact {
            name: class.name().to_string(),
            kind: ArtifactKind::Contract,
            imports: imports.lines(),
            body,
        })
    }

    /// Class implementing the contract, carrying the metadata block and every
    /// inherited and own property.
    pub fn concrete(&self, class: &ClassModel, diagnostics: &mut Diagnostics) -> Result<Artifact> {
        ensure_identifier(class, class.name())?;
        let emit = &self.config.emit;
        let indent = emit.indent.as_str();
        let concrete_name = format!("{}{}", class.name(), emit.concrete_suffix);

        let mut imports = Imports::new(concrete_name.as_str(), "../interfaces/");
        imports.add("SchemaInterface", &emit.interface_import);
        imports.add("SchemaMetadata", &emit.metadata_import);
        imports.add_sibling(class.name());

        let mut body = self.class_doc(class);
        body.push_str(&format!(
            "export class {concrete_name} implements SchemaInterface, {} {{\n",
            class.name()
        ));
        body.push_str(&format!(
            "{indent}public schema_metadata: SchemaMetadata = {{\n"
        ));
        body.push_str(&format!("{indent}{indent}id: {},\n", quote(class.id())));
        body.push_str(&format!("{indent}{indent}label: {},\n", quote(class.name())));
        body.push_str(&list_entry(
            "subClassOf",
            class.parents(),
            indent,
            2,
            emit.max_line_width,
        ));
        body.push_str(&format!("{indent}}};"));

        let members = self.members(
            class,
            &concrete_properties(class, self.model),
            "public ",
            &mut imports,
            diagnostics,
        )?;
        if !members.is_empty() {
            body.push('\n');
            body.push_str(&members.join("\n\n"));
        }
        body.push_str("\n}\n");

        Ok(Artifact {
            name: class.name().to_string(),
            kind: ArtifactKind::Concrete,
            imports: imports.lines(),
            body,
        })
    }

    /// String enum whose member values are the vocabulary addresses of the
    /// members.
    pub fn enumeration(&self, class: &ClassModel) -> Result<Artifact> {
        ensure_identifier(class, class.name())?;
        let indent = self.config.emit.indent.as_str();

        let mut body = self.class_doc(class);
        body.push_str(&format!("/** @enumeration */\nexport enum {} {{", class.name()));
        if !class.members().is_empty() {
            body.push('\n');
        }
        for member in class.members() {
            ensure_identifier(class, member.label())?;
            let value = Iri::join(&self.config.vocabulary.base_address, member.label())?;
            body.push_str(&format!(
                "{indent}{} = {},\n",
                member.label(),
                quote(value.as_str())
            ));
        }
        body.push_str("}\n");

        Ok(Artifact {
            name: class.name().to_string(),
            kind: ArtifactKind::Enumeration,
            imports: Vec::new(),
            body,
        })
    }

    /// Index re-exporting every contract, concrete type and populated
    /// enumeration of the model, each section sorted by name.
    ///
    /// Classes the model cannot emit are left out: names owned by another
    /// class, and class, property or member names that are not identifiers.
    #[must_use]
    pub fn manifest(&self) -> Artifact {
        let exported = |class: &&ClassModel| self.is_emittable(class);
        let mut plain: Vec<&ClassModel> = self
            .model
            .classes()
            .filter(|class| !class.is_enumeration())
            .filter(exported)
            .collect();
        plain.sort_by(|a, b| a.name().cmp(b.name()));
        let mut enumerations: Vec<&ClassModel> = self
            .model
            .classes()
            .filter(|class| class.is_populated_enumeration())
            .filter(exported)
            .collect();
        enumerations.sort_by(|a, b| a.name().cmp(b.name()));

        let suffix = &self.config.emit.concrete_suffix;
        let mut body = MANIFEST_HEADER.to_string();

        body.push_str("/**\n * Interfaces\n */\n");
        for class in &plain {
            let name = class.name();
            body.push_str(&format!("export type {{ {name} }} from './interfaces/{name}';\n"));
        }

        body.push_str("/**\n * Schema classes\n */\n");
        for class in &plain {
            let name = class.name();
            body.push_str(&format!(
                "export {{ {name}{suffix} }} from './classes/{name}.schema';\n"
            ));
        }

        body.push_str("/**\n * Enums\n */\n");
        for class in &enumerations {
            let name = class.name();
            body.push_str(&format!("export {{ {name} }} from './interfaces/{name}';\n"));
        }

        Artifact {
            name: "index".to_string(),
            kind: ArtifactKind::Manifest,
            imports: Vec::new(),
            body,
        }
    }

    // The class owning `class`'s display name, when it is another class.
    fn name_owner(&self, class: &ClassModel) -> Option<&'a ClassModel> {
        self.model
            .class_named(class.name())
            .filter(|owner| owner.id() != class.id())
    }

    fn is_emittable(&self, class: &ClassModel) -> bool {
        if self.name_owner(class).is_some() || !is_identifier(class.name()) {
            return false;
        }
        if class.is_enumeration() {
            return class
                .members()
                .iter()
                .all(|member| is_identifier(member.label()));
        }
        concrete_properties(class, self.model)
            .iter()
            .all(|property| is_identifier(property.name()))
    }

    fn class_doc(&self, class: &ClassModel) -> String {
        doc_block(&self.comment(class.comment()), "")
    }

    fn comment(&self, comment: Option<&str>) -> Vec<String> {
        let emit = &self.config.emit;
        let lines = comment_lines(comment.unwrap_or_default(), emit.comment_width);
        if lines.is_empty() {
            return vec![emit.fallback_comment.clone()];
        }
        lines
    }

    fn members(
        &self,
        class: &ClassModel,
        properties: &[&PropertyModel],
        visibility: &str,
        imports: &mut Imports,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<String>> {
        let emit = &self.config.emit;
        let indent = emit.indent.as_str();
        let projector = Projector::new(self.model, self.config);

        properties
            .iter()
            .map(|property| -> Result<String> {
                ensure_identifier(class, property.name())?;
                let tokens = projector.union(property, class.name(), imports, diagnostics);
                Ok(format!(
                    "{}{}",
                    doc_block(&self.comment(property.comment()), indent),
                    optional_member(
                        &format!("{visibility}{}", property.name()),
                        &tokens,
                        indent,
                        emit.max_line_width,
                    )
                ))
            })
            .collect()
    }
}

fn ensure_identifier(class: &ClassModel, name: &str) -> Result<()> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(Error::invalid_identifier(class.name(), name))
    }
}
