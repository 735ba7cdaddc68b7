//! Backing stores for containers.
//!
//! A [`Store`] is the ordered sequence a [`Container`](crate::Container)
//! appends children into. Two implementations are provided:
//!
//! - [`VecStore`] - plain ordered storage with full access
//! - [`AppendOnly`] - a capability-restricted store that accepts appends
//!   and reads but refuses removal, mirroring builders that never expose
//!   random access to their accumulated children

use thiserror::Error;

/// Error raised by a store when a caller attempts an operation the store
/// does not support.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store is append-only and the requested mutation is refused.
    #[error("store is append-only: {op} is not supported")]
    Unsupported {
        /// Name of the refused operation.
        op: &'static str,
    },

    /// The requested index does not exist.
    #[error("index {index} is out of bounds (len {len})")]
    OutOfBounds { index: usize, len: usize },
}

/// An ordered, append-biased sequence of entities.
///
/// Every store guarantees that appended entities are observable in
/// exactly append order. Anything beyond "ordered append plus reads"
/// is optional: a store may refuse [`remove`](Store::remove) with
/// [`StoreError::Unsupported`].
pub trait Store<T> {
    /// Append an entity at the end.
    fn append(&mut self, entity: T);

    /// Number of entities currently held.
    fn len(&self) -> usize;

    /// Whether the store holds no entities.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entity at `index`, in append order.
    fn get(&self, index: usize) -> Option<&T>;

    /// All entities, in append order.
    fn as_slice(&self) -> &[T];

    /// Remove and return the entity at `index`.
    ///
    /// Restricted stores refuse this with [`StoreError::Unsupported`].
    fn remove(&mut self, index: usize) -> Result<T, StoreError>;

    /// Consume the store, yielding its entities in append order.
    fn into_vec(self) -> Vec<T>
    where
        Self: Sized;
}

/// Plain ordered storage with full access.
#[derive(Debug, Clone)]
pub struct VecStore<T> {
    items: Vec<T>,
}

impl<T> VecStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for VecStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> for VecStore<T> {
    fn append(&mut self, entity: T) {
        self.items.push(entity);
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn remove(&mut self, index: usize) -> Result<T, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::OutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    fn into_vec(self) -> Vec<T> {
        self.items
    }
}

/// A store that only supports appending and reading.
///
/// Wraps ordinary storage but refuses removal, so a container handed one
/// of these can accumulate children without ever being able to disturb
/// the ones already appended.
#[derive(Debug, Clone)]
pub struct AppendOnly<T> {
    items: Vec<T>,
}

impl<T> AppendOnly<T> {
    /// Create an empty append-only store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for AppendOnly<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Store<T> for AppendOnly<T> {
    fn append(&mut self, entity: T) {
        self.items.push(entity);
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn remove(&mut self, _index: usize) -> Result<T, StoreError> {
        Err(StoreError::Unsupported { op: "remove" })
    }

    fn into_vec(self) -> Vec<T> {
        self.items
    }
}
