//! Construction strategies for named entities.

use crate::Scope;

/// Strategy for starting a named child builder.
///
/// A factory owns the "how do I begin building an entity called `name`"
/// half of child construction; finalization always goes through
/// [`Scope::finish`]. Containers are generic over the factory, so the
/// same accumulation machinery works for any entity kind.
pub trait EntityFactory {
    /// The scope the factory hands back for configuration.
    type Scope: Scope;

    /// Start a fresh scope for an entity called `name`.
    fn scope(&self, name: &str) -> Self::Scope;
}

/// The entity type a factory ultimately produces.
pub type EntityOf<F> = <<F as EntityFactory>::Scope as Scope>::Entity;

/// Adapter turning any `Fn(&str) -> S` closure into an [`EntityFactory`].
///
/// Lets callers supply a construction strategy without declaring a named
/// factory type:
///
/// ```
/// use quill_dsl::{Container, FnFactory, Scope};
///
/// struct Label(String);
/// struct LabelScope(String);
///
/// impl Scope for LabelScope {
///     type Entity = Label;
///     fn finish(self) -> Label {
///         Label(self.0)
///     }
/// }
///
/// let mut labels = Container::new(FnFactory::new(|name: &str| LabelScope(name.to_owned())));
/// labels.add("first", |_| {});
/// assert_eq!(labels.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnFactory<F>(F);

impl<F> FnFactory<F> {
    /// Wrap a closure as a factory.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<S, F> EntityFactory for FnFactory<F>
where
    S: Scope,
    F: Fn(&str) -> S,
{
    type Scope = S;

    fn scope(&self, name: &str) -> S {
        (self.0)(name)
    }
}
