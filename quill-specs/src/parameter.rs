//! Function parameter specs.

use std::fmt;

use quill_dsl::{Container, EntityFactory, Scope};

use crate::annotation::{AnnotationFactory, AnnotationScope, AnnotationSpec};

/// A parameter of a function, e.g. `limit: Int = 10`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    /// Parameter name.
    pub name: String,
    /// Parameter type.
    pub ty: String,
    /// Default value expression, if any.
    pub default: Option<String>,
    /// Annotations, in add order.
    pub annotations: Vec<AnnotationSpec>,
}

impl ParamSpec {
    /// The parameter's inline source text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for annotation in &self.annotations {
            out.push_str(&annotation.text());
            out.push(' ');
        }
        out.push_str(&self.name);
        out.push_str(": ");
        out.push_str(&self.ty);
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Builder scope for one [`ParamSpec`].
///
/// The type defaults to `Any` until [`ty`](ParamScope::ty) is called.
#[derive(Debug)]
pub struct ParamScope {
    name: String,
    ty: String,
    default: Option<String>,
    /// Annotation children.
    pub annotations: Container<AnnotationFactory>,
}

impl ParamScope {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ty: "Any".to_owned(),
            default: None,
            annotations: Container::new(AnnotationFactory),
        }
    }

    /// Set the parameter type.
    pub fn ty(&mut self, ty: impl Into<String>) -> &mut Self {
        self.ty = ty.into();
        self
    }

    /// Set the default value expression.
    pub fn default(&mut self, expr: impl Into<String>) -> &mut Self {
        self.default = Some(expr.into());
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

impl Scope for ParamScope {
    type Entity = ParamSpec;

    fn finish(self) -> ParamSpec {
        ParamSpec {
            name: self.name,
            ty: self.ty,
            default: self.default,
            annotations: self.annotations.into_vec(),
        }
    }
}

/// Factory for parameter children.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamFactory;

impl EntityFactory for ParamFactory {
    type Scope = ParamScope;

    fn scope(&self, name: &str) -> ParamScope {
        ParamScope::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_any() {
        let spec = ParamFactory.scope("value").finish();
        assert_eq!(spec.text(), "value: Any");
    }

    #[test]
    fn test_typed_with_default() {
        let mut scope = ParamFactory.scope("limit");
        scope.ty("Int").default("10");
        assert_eq!(scope.finish().text(), "limit: Int = 10");
    }

    #[test]
    fn test_annotated_parameter() {
        let mut scope = ParamFactory.scope("body");
        scope.ty("String");
        scope.annotation("Valid", |_| {});
        assert_eq!(scope.finish().text(), "@Valid body: String");
    }
}
