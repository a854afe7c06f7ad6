use std::time::Duration;

use parking_lot::RwLock;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::LockError;
use crate::keys::Key;
use crate::tree::{Tree, TreeStats};

/// A [`Tree`] behind a single reader/writer lock, shareable across threads.
///
/// `find` takes the lock shared; `insert` and `remove` hold it exclusively for the whole walk
/// and mutation, so each call is atomic with respect to every other call on the same tree.
/// Writers are serialized regardless of which keys they touch.
pub struct ConcurrentTree<V, C: Clock = SystemClock> {
    inner: RwLock<Tree<V, C>>,
}

impl<V> ConcurrentTree<V> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V> Default for ConcurrentTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> ConcurrentTree<V, C> {
    pub fn with_clock(clock: C) -> Self {
        debug!("created concurrent tree");
        Self {
            inner: RwLock::new(Tree::with_clock(clock)),
        }
    }

    pub fn insert<K: Key + ?Sized>(&self, key: &K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    pub fn insert_with_expiry<K: Key + ?Sized>(&self, key: &K, value: V, ttl: Duration) -> Option<V> {
        self.inner.write().insert_with_expiry(key, value, ttl)
    }

    /// Returns a copy of the live value at `key`.
    pub fn find<K: Key + ?Sized>(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.read().find(key).cloned()
    }

    /// Applies `f` to the live value at `key` while the shared lock is held.
    pub fn find_map<K, R, F>(&self, key: &K, f: F) -> Option<R>
    where
        K: Key + ?Sized,
        F: FnOnce(&V) -> R,
    {
        self.inner.read().find(key).map(f)
    }

    pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.inner.read().contains_key(key)
    }

    pub fn remove<K: Key + ?Sized>(&self, key: &K) -> Option<V> {
        self.inner.write().remove(key)
    }

    pub fn try_insert<K: Key + ?Sized>(&self, key: &K, value: V) -> Result<Option<V>, LockError> {
        let mut tree = self.inner.try_write().ok_or(LockError::Locked)?;
        Ok(tree.insert(key, value))
    }

    pub fn try_insert_with_expiry<K: Key + ?Sized>(
        &self,
        key: &K,
        value: V,
        ttl: Duration,
    ) -> Result<Option<V>, LockError> {
        let mut tree = self.inner.try_write().ok_or(LockError::Locked)?;
        Ok(tree.insert_with_expiry(key, value, ttl))
    }

    pub fn try_find<K: Key + ?Sized>(&self, key: &K) -> Result<Option<V>, LockError>
    where
        V: Clone,
    {
        let tree = self.inner.try_read().ok_or(LockError::Locked)?;
        Ok(tree.find(key).cloned())
    }

    pub fn try_remove<K: Key + ?Sized>(&self, key: &K) -> Result<Option<V>, LockError> {
        let mut tree = self.inner.try_write().ok_or(LockError::Locked)?;
        Ok(tree.remove(key))
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn stats(&self) -> TreeStats {
        self.inner.read().stats()
    }
}
