//! Property specs.

use std::fmt;

use quill_dsl::{Container, EntityFactory, Scope};

use crate::{
    annotation::{AnnotationFactory, AnnotationScope, AnnotationSpec},
    writer::SourceWriter,
};

/// A property declaration, e.g. `val port: Int = 8080`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySpec {
    /// Property name.
    pub name: String,
    /// Property type.
    pub ty: String,
    /// Whether the property is mutable (`var` rather than `val`).
    pub mutable: bool,
    /// Initializer expression, if any.
    pub initializer: Option<String>,
    /// Annotations, in add order.
    pub annotations: Vec<AnnotationSpec>,
}

impl PropertySpec {
    pub(crate) fn write(&self, out: &mut SourceWriter) {
        for annotation in &self.annotations {
            out.line(&annotation.text());
        }
        let keyword = if self.mutable { "var" } else { "val" };
        let mut decl = format!("{keyword} {}: {}", self.name, self.ty);
        if let Some(initializer) = &self.initializer {
            decl.push_str(" = ");
            decl.push_str(initializer);
        }
        out.line(&decl);
    }
}

impl fmt::Display for PropertySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SourceWriter::new();
        self.write(&mut out);
        f.write_str(&out.finish())
    }
}

/// Builder scope for one [`PropertySpec`].
///
/// Immutable (`val`) with type `Any` until configured otherwise.
#[derive(Debug)]
pub struct PropertyScope {
    name: String,
    ty: String,
    mutable: bool,
    initializer: Option<String>,
    /// Annotation children.
    pub annotations: Container<AnnotationFactory>,
}

impl PropertyScope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ty: "Any".to_owned(),
            mutable: false,
            initializer: None,
            annotations: Container::new(AnnotationFactory),
        }
    }

    /// Set the property type.
    pub fn ty(&mut self, ty: impl Into<String>) -> &mut Self {
        self.ty = ty.into();
        self
    }

    /// Make the property mutable.
    pub fn mutable(&mut self) -> &mut Self {
        self.mutable = true;
        self
    }

    /// Set the initializer expression.
    pub fn initializer(&mut self, expr: impl Into<String>) -> &mut Self {
        self.initializer = Some(expr.into());
        self
    }

    /// Add one annotation called `name`.
    pub fn annotation(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut AnnotationScope),
    ) -> &AnnotationSpec {
        self.annotations.add(name, configure)
    }

    /// Configure the annotations container as a block.
    pub fn annotations(
        &mut self,
        configure: impl FnOnce(&mut Container<AnnotationFactory>),
    ) -> &mut Self {
        configure(&mut self.annotations);
        self
    }
}

impl Scope for PropertyScope {
    type Entity = PropertySpec;

    fn finish(self) -> PropertySpec {
        PropertySpec {
            name: self.name,
            ty: self.ty,
            mutable: self.mutable,
            initializer: self.initializer,
            annotations: self.annotations.into_vec(),
        }
    }
}

/// Factory for property children.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFactory;

impl EntityFactory for PropertyFactory {
    type Scope = PropertyScope;

    fn scope(&self, name: &str) -> PropertyScope {
        PropertyScope::new(name)
    }
}
