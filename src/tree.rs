use std::time::{Duration, Instant};

use tracing::trace;

use crate::clock::{Clock, SystemClock};
use crate::keys::Key;
use crate::node::Node;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Every node including the root.
    pub num_nodes: usize,
    pub num_keyed_nodes: usize,
    pub num_direct_nodes: usize,
    /// Nodes without children; usually terminal, unless left behind by a removal.
    pub num_leaf_nodes: usize,
    /// Terminal nodes, live or expired.
    pub num_values: usize,
    pub num_live_values: usize,
    pub num_expired_values: usize,
    /// Length of the longest path from the root, in bytes.
    pub max_depth: usize,
}

/// A byte-at-a-time prefix tree whose values may carry a deadline.
///
/// Expiry is lazy: an expired value stays in the tree, invisible to [`Tree::find`], until it is
/// overwritten or removed. Both of those still hand back the expired value.
///
/// This is the unsynchronized variant; mutation needs `&mut self`. See
/// [`crate::ConcurrentTree`] for a shareable one.
pub struct Tree<V, C: Clock = SystemClock> {
    root: Node<V>,
    len: usize,
    clock: C,
}

impl<V> Tree<V> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<V> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C: Clock> Tree<V, C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            root: Node::new(),
            len: 0,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Stores `value` at `key` with no expiry. Returns the value previously stored there, if
    /// any, whether or not it had expired.
    pub fn insert<K: Key + ?Sized>(&mut self, key: &K, value: V) -> Option<V> {
        self.insert_at(key.as_slice(), value, None)
    }

    /// Stores `value` at `key`, expiring `ttl` from now. Returns the previously stored value as
    /// [`Tree::insert`] does.
    pub fn insert_with_expiry<K: Key + ?Sized>(
        &mut self,
        key: &K,
        value: V,
        ttl: Duration,
    ) -> Option<V> {
        let deadline = self.clock.deadline_after(ttl);
        self.insert_at(key.as_slice(), value, deadline)
    }

    fn insert_at(&mut self, key: &[u8], value: V, expires_at: Option<Instant>) -> Option<V> {
        let mut node = &mut self.root;
        for &k in key {
            node = node.child_or_insert(k);
        }

        match node.set_value(value, expires_at) {
            Some(prior) => {
                trace!(
                    key_len = key.len(),
                    prior_live = prior.is_live(self.clock.now()),
                    "replaced value"
                );
                Some(prior.value)
            }
            None => {
                self.len += 1;
                None
            }
        }
    }

    /// Returns the live value at `key`. Missing paths, non-terminal nodes and expired values
    /// all yield `None`.
    pub fn find<K: Key + ?Sized>(&self, key: &K) -> Option<&V> {
        let now = self.clock.now();
        let node = self.seek(key.as_slice())?;
        match node.get_value(now) {
            Some((value, true)) => Some(value),
            _ => None,
        }
    }

    pub fn contains_key<K: Key + ?Sized>(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Clears the value at `key` and returns it, live or expired. The nodes along the path stay.
    pub fn remove<K: Key + ?Sized>(&mut self, key: &K) -> Option<V> {
        let key = key.as_slice();
        let mut node = &mut self.root;
        for &k in key {
            node = node.seek_child_mut(k)?;
        }

        let value = node.clear_value()?;
        self.len -= 1;
        trace!(key_len = key.len(), "removed value");
        Some(value)
    }

    /// Number of keys holding a value, including expired values not yet overwritten or removed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn seek(&self, key: &[u8]) -> Option<&Node<V>> {
        let mut node = &self.root;
        for &k in key {
            node = node.seek_child(k)?;
        }
        Some(node)
    }

    pub fn stats(&self) -> TreeStats {
        let now = self.clock.now();
        let mut stats = TreeStats::default();
        let mut stack = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            stats.num_nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.is_direct() {
                stats.num_direct_nodes += 1;
            } else {
                stats.num_keyed_nodes += 1;
            }
            if node.num_children() == 0 {
                stats.num_leaf_nodes += 1;
            }
            if node.is_terminal() {
                stats.num_values += 1;
                if node.get_value(now).is_some_and(|(_, live)| live) {
                    stats.num_live_values += 1;
                } else {
                    stats.num_expired_values += 1;
                }
            }
            stack.extend(node.iter().map(|(_, child)| (child, depth + 1)));
        }
        stats
    }
}

// Tear down with an explicit stack; the default drop glue would recurse once per key byte.
impl<V, C: Clock> Drop for Tree<V, C> {
    fn drop(&mut self) {
        let mut stack = self.root.take_children();
        let mut freed = 0usize;
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.take_children());
            freed += 1;
        }
        trace!(freed, "released tree");
    }
}
