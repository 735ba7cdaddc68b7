//! Builder scopes and the root entry helper.

/// A mutable builder for one kind of entity, finalized exactly once.
///
/// Each entity kind declares its own scope type; configuration closures
/// receive that scope as an explicit `&mut` parameter, so a closure
/// nested inside another can only ever call methods of its own scope.
/// Reaching an outer scope requires naming its parameter explicitly,
/// which keeps same-named methods on nested scopes unambiguous.
///
/// [`finish`](Scope::finish) consumes the scope, so no mutation is
/// possible after the entity has been produced.
pub trait Scope {
    /// The immutable entity this scope produces.
    type Entity;

    /// Convert the accumulated state into the final entity.
    fn finish(self) -> Self::Entity;
}

/// Run `configure` once against a fresh scope, then finalize it.
///
/// This is the root of every `build_*` entry point: allocate a scope,
/// hand it to the caller's closure synchronously, and call
/// [`Scope::finish`] exactly once when the closure returns. Panics
/// raised inside `configure` propagate unmodified; the partially built
/// scope is dropped.
pub fn build<S: Scope>(mut scope: S, configure: impl FnOnce(&mut S)) -> S::Entity {
    configure(&mut scope);
    scope.finish()
}
