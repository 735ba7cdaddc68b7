//! Ordered accumulation of child entities.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    Deferred, EntityFactory, EntityOf, Scope, StoreError,
    store::{Store, VecStore},
};

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identity of a [`Container`].
///
/// Used by [`Deferred`] handles to detect being resolved against a
/// container they were not created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerId(u64);

impl ContainerId {
    fn next() -> Self {
        Self(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered holder of child entities for one entity kind.
///
/// A container pairs a construction strategy ([`EntityFactory`]) with a
/// backing [`Store`] and funnels every child through the same append
/// contract: children are observable in exactly the order they were
/// added, the container itself never removes or reorders them, and no
/// uniqueness is enforced on names.
///
/// Children arrive three ways:
///
/// - [`push`](Container::push) - an already-built entity
/// - [`add`](Container::add) - build a named child now and append it
/// - [`adding`](Container::adding) - capture a configuration closure and
///   defer construction to the first [`Deferred::force`]
#[derive(Debug)]
pub struct Container<F: EntityFactory, S = VecStore<EntityOf<F>>> {
    id: ContainerId,
    factory: F,
    store: S,
}

impl<F: EntityFactory> Container<F> {
    /// Create a container over plain ordered storage.
    pub fn new(factory: F) -> Self {
        Self::with_store(factory, VecStore::new())
    }
}

impl<F, S> Container<F, S>
where
    F: EntityFactory,
    S: Store<EntityOf<F>>,
{
    /// Create a container over an explicit backing store, e.g. an
    /// [`AppendOnly`](crate::AppendOnly) one.
    pub fn with_store(factory: F, store: S) -> Self {
        Self {
            id: ContainerId::next(),
            factory,
            store,
        }
    }

    /// This container's process-unique identity.
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Append an already-built entity, returning a reference to it for
    /// chaining.
    pub fn push(&mut self, entity: EntityOf<F>) -> &EntityOf<F> {
        let index = self.store.len();
        self.store.append(entity);
        self.store
            .get(index)
            .expect("store must expose the entity it just appended")
    }

    /// Build a child called `name` now: start a scope via the factory,
    /// run `configure` against it, finalize, append, and return it.
    pub fn add(&mut self, name: &str, configure: impl FnOnce(&mut F::Scope)) -> &EntityOf<F> {
        let mut scope = self.factory.scope(name);
        configure(&mut scope);
        self.push(scope.finish())
    }

    /// Append every entity from `entities` in iteration order.
    ///
    /// Returns whether the store changed, i.e. whether the iterator was
    /// non-empty.
    pub fn extend(&mut self, entities: impl IntoIterator<Item = EntityOf<F>>) -> bool {
        let before = self.store.len();
        for entity in entities {
            self.store.append(entity);
        }
        self.store.len() != before
    }

    /// Capture `configure` for a child called `name` without building
    /// anything yet.
    ///
    /// The child is constructed and appended on the first
    /// [`Deferred::force`] against this container; its position in the
    /// container reflects that first force, not this call. The
    /// [`named!`](crate::named) macro layers binding-derived naming on
    /// top of this.
    pub fn adding<C>(&self, name: impl Into<String>, configure: C) -> Deferred<C>
    where
        C: FnOnce(&mut F::Scope),
    {
        Deferred::new(self.id, name.into(), configure)
    }

    /// Number of children added so far.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether no children have been added yet.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Child at `index`, in add order.
    pub fn get(&self, index: usize) -> Option<&EntityOf<F>> {
        self.store.get(index)
    }

    /// All children, in add order.
    pub fn as_slice(&self) -> &[EntityOf<F>] {
        self.store.as_slice()
    }

    /// Iterate over children in add order.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityOf<F>> {
        self.store.as_slice().iter()
    }

    /// Remove the child at `index`, if the backing store permits it.
    ///
    /// The container never removes children on its own; this merely
    /// forwards to the store, which refuses when append-only.
    pub fn remove(&mut self, index: usize) -> Result<EntityOf<F>, StoreError> {
        self.store.remove(index)
    }

    /// Consume the container, yielding its children in add order.
    pub fn into_vec(self) -> Vec<EntityOf<F>> {
        self.store.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AppendOnly, FnFactory};

    #[derive(Debug, PartialEq)]
    struct Widget {
        name: String,
        value: i64,
    }

    struct WidgetScope {
        name: String,
        value: i64,
    }

    impl WidgetScope {
        fn value(&mut self, value: i64) -> &mut Self {
            self.value = value;
            self
        }
    }

    impl Scope for WidgetScope {
        type Entity = Widget;

        fn finish(self) -> Widget {
            Widget {
                name: self.name,
                value: self.value,
            }
        }
    }

    fn widget_factory() -> FnFactory<impl Fn(&str) -> WidgetScope> {
        FnFactory::new(|name: &str| WidgetScope {
            name: name.to_owned(),
            value: 0,
        })
    }

    #[test]
    fn test_add_preserves_call_order() {
        let mut widgets = Container::new(widget_factory());
        widgets.add("a", |w| {
            w.value(1);
        });
        widgets.add("b", |w| {
            w.value(2);
        });

        let names: Vec<&str> = widgets.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
        assert_eq!(widgets.get(1).map(|w| w.value), Some(2));
    }

    #[test]
    fn test_add_returns_appended_entity() {
        let mut widgets = Container::new(widget_factory());
        let built = widgets.add("only", |w| {
            w.value(9);
        });

        assert_eq!(built.name, "only");
        assert_eq!(built.value, 9);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut widgets = Container::new(widget_factory());
        widgets.add("dup", |_| {});
        widgets.add("dup", |_| {});

        assert_eq!(widgets.len(), 2);
    }

    #[test]
    fn test_extend_reports_change() {
        let mut widgets = Container::new(widget_factory());
        let first = Widget {
            name: "x".into(),
            value: 0,
        };
        let second = Widget {
            name: "y".into(),
            value: 0,
        };

        assert!(widgets.extend([first, second]));
        assert!(!widgets.extend(std::iter::empty()));
        assert_eq!(widgets.len(), 2);
    }

    #[test]
    fn test_append_only_backing_store() {
        let mut widgets = Container::with_store(widget_factory(), AppendOnly::new());
        widgets.add("pinned", |_| {});

        assert_eq!(
            widgets.remove(0),
            Err(StoreError::Unsupported { op: "remove" })
        );
        assert_eq!(widgets.len(), 1);
    }

    #[test]
    fn test_container_ids_are_unique() {
        let a = Container::new(widget_factory());
        let b = Container::new(widget_factory());
        assert_ne!(a.id(), b.id());
    }
}
