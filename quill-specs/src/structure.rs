//! Type declaration specs.

use std::fmt;

use quill_dsl::{AppendOnly, Container, EntityFactory, Scope};

use crate::{
    annotation::{AnnotationFactory, AnnotationScope, AnnotationSpec},
    function::{FunctionFactory, FunctionScope, FunctionSpec},
    property::{PropertyFactory, PropertyScope, PropertySpec},
    writer::SourceWriter,
};

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeKind {
    /// A class declaration.
    #[default]
    Class,
    /// An interface declaration.
    Interface,
    /// A singleton object declaration.
    Object,
}

impl TypeKind {
    /// Keyword used in rendered source.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Object => "object",
        }
    }
}

/// A type declaration with properties, functions, and nested types.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSpec {
    /// Type name.
    pub name: String,
    /// Declaration kind.
    pub kind: TypeKind,
    /// Supertype names, in add order.
    pub supertypes: Vec<String>,
    /// Annotations, in add order.
    pub annotations: Vec<AnnotationSpec>,
    /// Properties, in add order.
    pub properties: Vec<PropertySpec>,
    /// Functions, in add order.
    pub functions: Vec<FunctionSpec>,
    /// Nested types, in add order.
    pub types: Vec<TypeSpec>,
}

impl TypeSpec {
    pub(crate) fn write(&self, out: &mut SourceWriter) {
        for annotation in &self.annotations {
            out.line(&annotation.text());
        }
        let mut header = format!("{} {}", self.kind.keyword(), self.name);
        if !self.supertypes.is_empty() {
            header.push_str(" : ");
            header.push_str(&self.supertypes.join(", "));
        }
        header.push_str(" {");
        out.line(&header);
        out.indent();

        let mut wrote_member = false;
        for property in &self.properties {
            if wrote_member {
                out.blank();
            }
            property.write(out);
            wrote_member = true;
        }
        for function in &self.functions {
            if wrote_member {
                out.blank();
            }
            function.write(out);
            wrote_member = true;
        }
        for nested in &self.types {
            if wrote_member {
                out.blank();
            }
            nested.write(out);
            wrote_member = true;
        }

        out.dedent();
        out.line("}");
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SourceWriter::new();
        self.write(&mut out);
        f.write_str(&out.finish())
    }
}

/// Builder scope for one [`TypeSpec`].
///
/// The functions container is backed by an append-only store: once a
/// function has been added to a type it can be read but never removed
/// through the container.
#[derive(Debug)]
pub struct TypeScope {
    name: String,
    kind: TypeKind,
    supertypes: Vec<String>,
    /// Annotation children.
    pub annotations: Container<AnnotationFactory>,
    /// Property children.
    pub properties: Container<PropertyFactory>,
    /// Function children (append-only).
    pub functions: Container<FunctionFactory, AppendOnly<FunctionSpec>>,
    /// Nested type children.
    pub types: Container<TypeFactory>,
}

impl TypeScope {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            kind: TypeKind::Class,
            supertypes: Vec::new(),
            annotations: Container::new(AnnotationFactory),
            properties: Container::new(PropertyFactory),
            functions: Container::with_store(FunctionFactory, AppendOnly::new()),
            types: Container::new(TypeFactory),
        }
    }

    /// Set the declaration kind.
    pub fn kind(&mut self, kind: TypeKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Add a supertype name.
    pub fn supertype(&mut self, name: impl Into<String>) -> &mut Self {
        self.supertypes.push(name.into());
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

    /// Add one property called `name`.
    pub fn property(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut PropertyScope),
    ) -> &PropertySpec {
        self.properties.add(name, configure)
    }

    /// Add one function called `name`.
    pub fn function(
        &mut self,
        name: &str,
        configure: impl FnOnce(&mut FunctionScope),
    ) -> &FunctionSpec {
        self.functions.add(name, configure)
    }

    /// Add one nested type called `name`.
    pub fn nested(&mut self, name: &str, configure: impl FnOnce(&mut TypeScope)) -> &TypeSpec {
        self.types.add(name, configure)
    }

    /// Configure the annotations container as a block.
    pub fn annotations(
        &mut self,
        configure: impl FnOnce(&mut Container<AnnotationFactory>),
    ) -> &mut Self {
        configure(&mut self.annotations);
        self
    }

    /// Configure the properties container as a block.
    pub fn properties(
        &mut self,
        configure: impl FnOnce(&mut Container<PropertyFactory>),
    ) -> &mut Self {
        configure(&mut self.properties);
        self
    }

    /// Configure the functions container as a block.
    pub fn functions(
        &mut self,
        configure: impl FnOnce(&mut Container<FunctionFactory, AppendOnly<FunctionSpec>>),
    ) -> &mut Self {
        configure(&mut self.functions);
        self
    }

    /// Configure the nested-types container as a block.
    pub fn types(&mut self, configure: impl FnOnce(&mut Container<TypeFactory>)) -> &mut Self {
        configure(&mut self.types);
        self
    }
}

impl Scope for TypeScope {
    type Entity = TypeSpec;

    fn finish(self) -> TypeSpec {
        TypeSpec {
            name: self.name,
            kind: self.kind,
            supertypes: self.supertypes,
            annotations: self.annotations.into_vec(),
            properties: self.properties.into_vec(),
            functions: self.functions.into_vec(),
            types: self.types.into_vec(),
        }
    }
}

/// Factory for type children.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeFactory;

impl EntityFactory for TypeFactory {
    type Scope = TypeScope;

    fn scope(&self, name: &str) -> TypeScope {
        TypeScope::new(name)
    }
}
