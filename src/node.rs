use std::time::Instant;

use crate::mapping::direct_mapping::DirectChildMapping;
use crate::mapping::keyed_mapping::KeyedChildMapping;
use crate::mapping::NodeMapping;

/// Maximum number of children held in the sorted keyed mapping before a node is grown into a
/// direct (256 slot) mapping.
pub const KEYED_WIDTH: usize = 48;

/// A stored value with its optional absolute deadline.
pub(crate) struct Slot<V> {
    pub(crate) value: V,
    pub(crate) expires_at: Option<Instant>,
}

impl<V> Slot<V> {
    /// Live while the deadline is strictly in the future.
    #[inline]
    pub(crate) fn is_live(&self, now: Instant) -> bool {
        match self.expires_at {
            None => true,
            Some(deadline) => now < deadline,
        }
    }
}

pub(crate) enum ChildMapping<V> {
    Keyed(KeyedChildMapping<Node<V>, KEYED_WIDTH>),
    Direct(DirectChildMapping<Node<V>>),
}

/// One byte position in the tree. A node is terminal iff it holds a slot; it may be terminal
/// and have children at the same time.
pub(crate) struct Node<V> {
    pub(crate) children: ChildMapping<V>,
    pub(crate) slot: Option<Slot<V>>,
}

impl<V> Node<V> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            children: ChildMapping::Keyed(KeyedChildMapping::new()),
            slot: None,
        }
    }

    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.slot.is_some()
    }

    /// Overwrites the slot unconditionally, returning whatever was stored before, live or not.
    #[inline]
    pub(crate) fn set_value(&mut self, value: V, expires_at: Option<Instant>) -> Option<Slot<V>> {
        self.slot.replace(Slot { value, expires_at })
    }

    /// The stored value and whether it is still live at `now`. An expired value is still
    /// returned; only a non-terminal node yields `None`.
    #[inline]
    pub(crate) fn get_value(&self, now: Instant) -> Option<(&V, bool)> {
        self.slot
            .as_ref()
            .map(|slot| (&slot.value, slot.is_live(now)))
    }

    #[inline]
    pub(crate) fn clear_value(&mut self) -> Option<V> {
        self.slot.take().map(|slot| slot.value)
    }

    pub fn num_children(&self) -> usize {
        match &self.children {
            ChildMapping::Keyed(km) => km.num_children(),
            ChildMapping::Direct(dm) => dm.num_children(),
        }
    }

    #[inline]
    pub(crate) fn seek_child(&self, key: u8) -> Option<&Node<V>> {
        match &self.children {
            ChildMapping::Keyed(km) => km.seek_child(key),
            ChildMapping::Direct(dm) => dm.seek_child(key),
        }
    }

    #[inline]
    pub(crate) fn seek_child_mut(&mut self, key: u8) -> Option<&mut Node<V>> {
        match &mut self.children {
            ChildMapping::Keyed(km) => km.seek_child_mut(key),
            ChildMapping::Direct(dm) => dm.seek_child_mut(key),
        }
    }

    /// Returns the child for `key`, creating an empty one if the path does not exist yet.
    pub(crate) fn child_or_insert(&mut self, key: u8) -> &mut Node<V> {
        if let ChildMapping::Keyed(km) = &self.children {
            if km.is_full() && km.seek_child(key).is_none() {
                self.grow();
            }
        }

        match &mut self.children {
            ChildMapping::Keyed(km) => km.child_or_insert_with(key, Node::new),
            ChildMapping::Direct(dm) => dm.child_or_insert_with(key, Node::new),
        }
    }

    pub(crate) fn take_children(&mut self) -> Vec<Node<V>> {
        match &mut self.children {
            ChildMapping::Keyed(km) => km.take_children(),
            ChildMapping::Direct(dm) => dm.take_children(),
        }
    }

    fn grow(&mut self) {
        if let ChildMapping::Keyed(km) = &mut self.children {
            let dm = km.to_direct();
            self.children = ChildMapping::Direct(dm);
        }
    }

    pub(crate) fn is_direct(&self) -> bool {
        matches!(self.children, ChildMapping::Direct(_))
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = (u8, &Self)> + '_> {
        match &self.children {
            ChildMapping::Keyed(km) => Box::new(km.iter()),
            ChildMapping::Direct(dm) => Box::new(dm.iter()),
        }
    }
}
