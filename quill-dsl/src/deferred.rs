//! Deferred, binding-named child construction.

use crate::{
    Container, ContainerId, EntityFactory, EntityOf,
    store::Store,
};

enum State<C> {
    Pending(C),
    Resolved(usize),
}

/// A child entity whose construction is deferred to first use.
///
/// Created by [`Container::adding`], which captures a configuration
/// closure and a name but builds nothing. The first
/// [`force`](Deferred::force) runs the container's factory, appends the
/// entity (taking its position in add order at that moment), and caches
/// the index; later forces just return the cached entity. The factory
/// never runs twice and the container is never appended to twice for
/// the same handle.
///
/// The usual way to create one is the [`named!`](crate::named) macro,
/// which derives the entity's name from the binding identifier:
///
/// ```
/// use quill_dsl::{Container, FnFactory, Scope, named};
///
/// struct Item(String);
/// struct ItemScope(String);
///
/// impl Scope for ItemScope {
///     type Entity = Item;
///     fn finish(self) -> Item {
///         Item(self.0)
///     }
/// }
///
/// let mut items = Container::new(FnFactory::new(|name: &str| ItemScope(name.to_owned())));
/// named! {
///     let header = items.adding(|_| {});
/// }
/// assert_eq!(header.force(&mut items).0, "header");
/// ```
pub struct Deferred<C> {
    container: ContainerId,
    name: String,
    state: State<C>,
}

impl<C> Deferred<C> {
    pub(crate) fn new(container: ContainerId, name: String, configure: C) -> Self {
        Self {
            container,
            name,
            state: State::Pending(configure),
        }
    }

    /// The name the entity will carry (or carries, once resolved).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the entity has been built and appended.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, State::Resolved(_))
    }

    /// Resolve the entity, building and appending it on first use.
    ///
    /// `container` must be the container this handle was created from;
    /// forcing against any other container is a programmer error and
    /// panics.
    pub fn force<'c, F, S>(&mut self, container: &'c mut Container<F, S>) -> &'c EntityOf<F>
    where
        F: EntityFactory,
        C: FnOnce(&mut F::Scope),
        S: Store<EntityOf<F>>,
    {
        assert!(
            self.container == container.id(),
            "deferred child '{}' was forced against a container it does not belong to",
            self.name,
        );

        if let State::Resolved(index) = self.state {
            return container
                .get(index)
                .expect("resolved entity must remain in its container");
        }

        let index = container.len();
        let State::Pending(configure) = std::mem::replace(&mut self.state, State::Resolved(index))
        else {
            unreachable!("state was pending");
        };
        container.add(&self.name, configure)
    }
}

/// Derive deferred children's names from the identifiers they are bound
/// to.
///
/// Each `let` inside the macro expands to a [`Container::adding`] call
/// whose name argument is the stringified binding identifier, so the
/// call site states the name exactly once:
///
/// ```ignore
/// named! {
///     let run = file.functions.adding(|f| { f.returns("Int"); });
/// }
/// // later: run.force(&mut file.functions) builds a function named "run"
/// ```
#[macro_export]
macro_rules! named {
    () => {};
    (let $ident:ident = $container:ident.adding($configure:expr); $($rest:tt)*) => {
        let mut $ident = $container.adding(stringify!($ident), $configure);
        $crate::named! { $($rest)* }
    };
    (let $ident:ident = $scope:ident.$container:ident.adding($configure:expr); $($rest:tt)*) => {
        let mut $ident = $scope.$container.adding(stringify!($ident), $configure);
        $crate::named! { $($rest)* }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FnFactory, Scope};
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Gadget {
        name: String,
        weight: u32,
    }

    struct GadgetScope {
        name: String,
        weight: u32,
    }

    impl Scope for GadgetScope {
        type Entity = Gadget;

        fn finish(self) -> Gadget {
            Gadget {
                name: self.name,
                weight: self.weight,
            }
        }
    }

    fn gadgets() -> Container<FnFactory<impl Fn(&str) -> GadgetScope>> {
        Container::new(FnFactory::new(|name: &str| GadgetScope {
            name: name.to_owned(),
            weight: 0,
        }))
    }

    #[test]
    fn test_nothing_is_built_before_first_force() {
        let mut container = gadgets();
        let deferred = container.adding("late", |scope: &mut GadgetScope| {
            scope.weight = 5;
        });

        assert!(!deferred.is_resolved());
        assert!(container.is_empty());
    }

    #[test]
    fn test_force_builds_and_appends_exactly_once() {
        let runs = Cell::new(0u32);
        let mut container = gadgets();
        let mut deferred = container.adding("once", |scope: &mut GadgetScope| {
            runs.set(runs.get() + 1);
            scope.weight = 3;
        });

        for _ in 0..3 {
            let gadget = deferred.force(&mut container);
            assert_eq!(gadget.name, "once");
            assert_eq!(gadget.weight, 3);
        }

        assert_eq!(runs.get(), 1);
        assert_eq!(container.len(), 1);
        assert!(deferred.is_resolved());
    }

    #[test]
    fn test_position_reflects_first_force_not_declaration() {
        let mut container = gadgets();
        let mut first_declared = container.adding("deferred", |_: &mut GadgetScope| {});

        container.add("immediate", |_| {});
        first_declared.force(&mut container);

        let names: Vec<&str> = container.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["immediate", "deferred"]);
    }

    #[test]
    fn test_named_macro_uses_binding_identifier() {
        let mut container = gadgets();
        named! {
            let sprocket = container.adding(|scope| { scope.weight = 1; });
        }

        assert_eq!(sprocket.name(), "sprocket");
        let gadget = sprocket.force(&mut container);
        assert_eq!(gadget.name, "sprocket");
    }

    #[test]
    #[should_panic(expected = "does not belong to")]
    fn test_force_against_foreign_container_panics() {
        let owner = gadgets();
        let mut other = gadgets();
        let mut deferred = owner.adding("stray", |_: &mut GadgetScope| {});

        deferred.force(&mut other);
    }
}
