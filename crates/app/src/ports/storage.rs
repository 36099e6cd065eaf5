//! Storage port: one keyed collection per entity kind.

use std::sync::Arc;

use homehub_domain::error::{DuplicateKeyError, NotFoundError};
use homehub_domain::key::Keyed;

/// Keyed, insertion-ordered collection of `V`, addressed by [`Keyed::Key`].
///
/// Every method is atomic with respect to concurrent callers. Values are
/// returned as owned snapshots; later mutations never show through them.
pub trait EntityStore<V: Keyed>: Send + Sync {
    /// Insert a value under its own key.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateKeyError`] if the key is already stored.
    fn create(&self, value: V) -> Result<V, DuplicateKeyError>;

    /// Get a snapshot of the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the key is not stored.
    fn read(&self, key: &V::Key) -> Result<V, NotFoundError>;

    /// Replace the value stored under the value's own key, keeping its
    /// position in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the key is not stored.
    fn update(&self, value: V) -> Result<V, NotFoundError>;

    /// Remove and return the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if the key is not stored.
    fn delete(&self, key: &V::Key) -> Result<V, NotFoundError>;

    /// All values in insertion order.
    fn list(&self) -> Vec<V>;

    /// Whether `key` is currently stored.
    fn contains(&self, key: &V::Key) -> bool;

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Keyed, T: EntityStore<V> + ?Sized> EntityStore<V> for Arc<T> {
    fn create(&self, value: V) -> Result<V, DuplicateKeyError> {
        (**self).create(value)
    }

    fn read(&self, key: &V::Key) -> Result<V, NotFoundError> {
        (**self).read(key)
    }

    fn update(&self, value: V) -> Result<V, NotFoundError> {
        (**self).update(value)
    }

    fn delete(&self, key: &V::Key) -> Result<V, NotFoundError> {
        (**self).delete(key)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn contains(&self, key: &V::Key) -> bool {
        (**self).contains(key)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
