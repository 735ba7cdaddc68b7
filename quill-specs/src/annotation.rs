//! Annotation specs.

use std::fmt;

use quill_dsl::{EntityFactory, Scope};

/// An annotation attached to a declaration, e.g. `@Component(lazy = true)`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationSpec {
    /// Annotation name.
    pub name: String,
    /// Ordered `(key, value)` members.
    pub members: Vec<(String, String)>,
}

impl AnnotationSpec {
    /// The annotation's inline source text.
    pub fn text(&self) -> String {
        if self.members.is_empty() {
            return format!("@{}", self.name);
        }
        let members = self
            .members
            .iter()
            .map(|(key, value)| format!("{key} = {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("@{}({})", self.name, members)
    }
}

impl fmt::Display for AnnotationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Builder scope for one [`AnnotationSpec`].
#[derive(Debug)]
pub struct AnnotationScope {
    name: String,
    members: Vec<(String, String)>,
}

impl AnnotationScope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            members: Vec::new(),
        }
    }

    /// Add a `key = value` member.
    pub fn member(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.members.push((key.into(), value.into()));
        self
    }
}

impl Scope for AnnotationScope {
    type Entity = AnnotationSpec;

    fn finish(self) -> AnnotationSpec {
        AnnotationSpec {
            name: self.name,
            members: self.members,
        }
    }
}

/// Factory for annotation children.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationFactory;

impl EntityFactory for AnnotationFactory {
    type Scope = AnnotationScope;

    fn scope(&self, name: &str) -> AnnotationScope {
        AnnotationScope::new(name)
    }
}
