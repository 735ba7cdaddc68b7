//! Function specs.

use std::fmt;

use quill_dsl::{Container, EntityFactory, Scope};

use crate::{
    annotation::{AnnotationFactory, AnnotationScope, AnnotationSpec},
    parameter::{ParamFactory, ParamScope, ParamSpec},
    writer::SourceWriter,
};

/// A function declaration with parameters, return type, and body lines.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSpec {
    /// Function name.
    pub name: String,
    /// Parameters, in add order.
    pub params: Vec<ParamSpec>,
    /// Return type (`None` for no declared return).
    pub returns: Option<String>,
    /// Body statements, one per line.
    pub body: Vec<String>,
    /// Annotations, in add order.
    pub annotations: Vec<AnnotationSpec>,
}

impl FunctionSpec {
    pub(crate) fn write(&self, out: &mut SourceWriter) {
        for annotation in &self.annotations {
            out.line(&annotation.text());
        }
        let params = self
            .params
            .iter()
            .map(ParamSpec::text)
            .collect::<Vec<_>>()
            .join(", ");
        let mut signature = format!("fun {}({})", self.name, params);
        if let Some(returns) = &self.returns {
            signature.push_str(": ");
            signature.push_str(returns);
        }
        signature.push_str(" {");
        out.line(&signature);
        out.indent();
        for line in &self.body {
            out.line(line);
        }
        out.dedent();
        out.line("}");
    }
}

impl fmt::Display for FunctionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = SourceWriter::new();
        self.write(&mut out);
        f.write_str(&out.finish())
    }
}

/// Builder scope for one [`FunctionSpec`].
#[derive(Debug)]
pub struct FunctionScope {
    name: String,
    returns: Option<String>,
    body: Vec<String>,
    /// Parameter children.
    pub params: Container<ParamFactory>,
    /// Annotation children.
    pub annotations: Container<AnnotationFactory>,
}

impl FunctionScope {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            returns: None,
            body: Vec::new(),
            params: Container::new(ParamFactory),
            annotations: Container::new(AnnotationFactory),
        }
    }

    /// Declare the return type.
    pub fn returns(&mut self, ty: impl Into<String>) -> &mut Self {
        self.returns = Some(ty.into());
        self
    }

    /// Append one statement to the body.
    pub fn line(&mut self, stmt: impl Into<String>) -> &mut Self {
        self.body.push(stmt.into());
        self
    }

    /// Append raw body content, split into lines.
    pub fn body(&mut self, content: impl AsRef<str>) -> &mut Self {
        for line in content.as_ref().lines() {
            self.body.push(line.to_owned());
        }
        self
    }

    /// Add one parameter called `name`.
    pub fn param(&mut self, name: &str, configure: impl FnOnce(&mut ParamScope)) -> &ParamSpec {
        self.params.add(name, configure)
    }

    /// Configure the parameters container as a block.
    pub fn params(&mut self, configure: impl FnOnce(&mut Container<ParamFactory>)) -> &mut Self {
        configure(&mut self.params);
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

impl Scope for FunctionScope {
    type Entity = FunctionSpec;

    fn finish(self) -> FunctionSpec {
        FunctionSpec {
            name: self.name,
            params: self.params.into_vec(),
            returns: self.returns,
            body: self.body,
            annotations: self.annotations.into_vec(),
        }
    }
}

/// Factory for function children.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunctionFactory;

impl EntityFactory for FunctionFactory {
    type Scope = FunctionScope;

    fn scope(&self, name: &str) -> FunctionScope {
        FunctionScope::new(name)
    }
}
