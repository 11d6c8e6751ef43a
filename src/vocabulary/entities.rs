use std::collections::BTreeMap;

/// Value types a property accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeSpec {
    /// The vocabulary declares no range; anything goes.
    Unconstrained,
    /// Ordered range references, each a primitive tag or a class identifier.
    Targets(Vec<String>),
}

/// Vocabulary property attached to every class named in its domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyModel {
    id: String,
    name: String,
    comment: Option<String>,
    type_spec: TypeSpec,
}

impl PropertyModel {
    /// Creates an unconstrained property.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            comment: None,
            type_spec: TypeSpec::Unconstrained,
        }
    }

    /// Sets the description rendered above the member declaration.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Constrains the property to the supplied range references.
    #[must_use]
    pub fn with_range<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_spec = TypeSpec::Targets(targets.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the property identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the member name used in generated code.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional description.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the accepted value types.
    #[must_use]
    pub fn type_spec(&self) -> &TypeSpec {
        &self.type_spec
    }
}

/// Named constant of an enumeration class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMember {
    id: String,
    declaring_class: String,
    label: String,
    comment: Option<String>,
}

impl EnumMember {
    /// Creates a member of the enumeration `declaring_class`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        declaring_class: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            declaring_class: declaring_class.into(),
            label: label.into(),
            comment: None,
        }
    }

    /// Sets a textual description for the member.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the member identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identifier of the enumeration class the member belongs to.
    #[must_use]
    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    /// Sanitized label, used both as the member name and as its value suffix.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the optional description.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Resolved vocabulary class.
///
/// Parents are kept as raw identifiers in declaration order: they may point at
/// primitives or at nothing at all, and the traversal helpers in
/// [`super::hierarchy`] decide what to follow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassModel {
    id: String,
    name: String,
    comment: Option<String>,
    parents: Vec<String>,
    properties: Vec<PropertyModel>,
    is_enumeration: bool,
    members: Vec<EnumMember>,
}

impl ClassModel {
    /// Creates a class with no parents, properties or members.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            comment: None,
            parents: Vec::new(),
            properties: Vec::new(),
            is_enumeration: false,
            members: Vec::new(),
        }
    }

    /// Sets a textual description for the class.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Adds a parent reference after the existing ones.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// Attaches a property whose domain names this class.
    #[must_use]
    pub fn with_property(mut self, property: PropertyModel) -> Self {
        self.properties.push(property);
        self
    }

    /// Marks the class as descending from the enumeration root.
    #[must_use]
    pub fn with_enumeration(mut self, is_enumeration: bool) -> Self {
        self.is_enumeration = is_enumeration;
        self
    }

    /// Appends a member in document order.
    #[must_use]
    pub fn with_member(mut self, member: EnumMember) -> Self {
        self.members.push(member);
        self
    }

    /// Returns the unique identifier of the class.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Sanitized display name, also the name of every generated artifact.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the optional comment.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns the parent references in declaration order.
    #[must_use]
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Properties whose domain names this class directly.
    #[must_use]
    pub fn properties(&self) -> &[PropertyModel] {
        &self.properties
    }

    /// Returns whether the class descends from the enumeration root.
    #[must_use]
    pub fn is_enumeration(&self) -> bool {
        self.is_enumeration
    }

    /// Returns the enumeration members in document order.
    #[must_use]
    pub fn members(&self) -> &[EnumMember] {
        &self.members
    }

    /// `true` for enumerations that carry at least one member. Only those are
    /// emitted or referenced from type unions.
    #[must_use]
    pub fn is_populated_enumeration(&self) -> bool {
        self.is_enumeration && !self.members.is_empty()
    }
}

/// Immutable class model keyed by identifier; the sole input of emission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedModel {
    classes: BTreeMap<String, ClassModel>,
}

impl ResolvedModel {
    /// Wraps classes already keyed by identifier.
    #[must_use]
    pub fn new(classes: BTreeMap<String, ClassModel>) -> Self {
        Self { classes }
    }

    /// Retrieves a class by identifier.
    #[must_use]
    pub fn class(&self, id: &str) -> Option<&ClassModel> {
        self.classes.get(id)
    }

    /// Retrieves the class with the lowest identifier carrying a display name.
    #[must_use]
    pub fn class_named(&self, name: &str) -> Option<&ClassModel> {
        self.classes.values().find(|class| class.name() == name)
    }

    /// Returns whether a class with the identifier exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.classes.contains_key(id)
    }

    /// Iterates classes in identifier order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassModel> {
        self.classes.values()
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl FromIterator<ClassModel> for ResolvedModel {
    fn from_iter<T: IntoIterator<Item = ClassModel>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|class| (class.id().to_string(), class))
                .collect(),
        )
    }
}
