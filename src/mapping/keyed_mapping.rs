use crate::mapping::direct_mapping::DirectChildMapping;
use crate::mapping::NodeMapping;

/// A mapping which keeps its keys sorted alongside the children, searched by binary search.
/// Nothing is allocated until the first child is added, so leaf nodes stay small.
pub struct KeyedChildMapping<N, const WIDTH: usize> {
    keys: Vec<u8>,
    children: Vec<N>,
}

impl<N, const WIDTH: usize> KeyedChildMapping<N, WIDTH> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.keys.len() >= WIDTH
    }

    pub fn to_direct(&mut self) -> DirectChildMapping<N> {
        let mut dm = DirectChildMapping::new();
        let keys = std::mem::take(&mut self.keys);
        let children = std::mem::take(&mut self.children);
        for (key, child) in keys.into_iter().zip(children) {
            dm.child_or_insert_with(key, || child);
        }
        dm
    }

    #[inline]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.keys.iter().copied().zip(self.children.iter())
    }
}

impl<N, const WIDTH: usize> Default for KeyedChildMapping<N, WIDTH> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, const WIDTH: usize> NodeMapping<N> for KeyedChildMapping<N, WIDTH> {
    fn child_or_insert_with<F: FnOnce() -> N>(&mut self, key: u8, make: F) -> &mut N {
        let idx = match self.keys.binary_search(&key) {
            Ok(idx) => idx,
            Err(idx) => {
                debug_assert!(!self.is_full(), "keyed mapping must grow before overflowing");
                self.keys.insert(idx, key);
                self.children.insert(idx, make());
                idx
            }
        };
        &mut self.children[idx]
    }

    #[inline]
    fn seek_child(&self, key: u8) -> Option<&N> {
        let idx = self.keys.binary_search(&key).ok()?;
        self.children.get(idx)
    }

    #[inline]
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        let idx = self.keys.binary_search(&key).ok()?;
        self.children.get_mut(idx)
    }

    fn take_children(&mut self) -> Vec<N> {
        self.keys.clear();
        std::mem::take(&mut self.children)
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::mapping::keyed_mapping::KeyedChildMapping;
    use crate::mapping::NodeMapping;

    #[test]
    fn test_add_seek() {
        let mut node = KeyedChildMapping::<u8, 4>::new();
        node.child_or_insert_with(4, || 4);
        node.child_or_insert_with(2, || 2);
        node.child_or_insert_with(3, || 3);
        node.child_or_insert_with(1, || 1);
        assert_eq!(node.num_children(), 4);
        assert!(node.is_full());
        assert_eq!(node.seek_child(1), Some(&1));
        assert_eq!(node.seek_child(2), Some(&2));
        assert_eq!(node.seek_child(3), Some(&3));
        assert_eq!(node.seek_child(4), Some(&4));
        assert_eq!(node.seek_child(5), None);
        assert_eq!(node.seek_child_mut(3), Some(&mut 3));
        assert_eq!(node.seek_child_mut(5), None);

        // Keys come back in sorted order regardless of insertion order.
        let keys: Vec<u8> = node.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_existing_child_is_not_replaced() {
        let mut node = KeyedChildMapping::<u32, 4>::new();
        *node.child_or_insert_with(7, || 1) += 10;
        let child = node.child_or_insert_with(7, || 99);
        assert_eq!(*child, 11);
        assert_eq!(node.num_children(), 1);
    }

    #[test]
    fn test_to_direct() {
        let mut node = KeyedChildMapping::<u8, 4>::new();
        for i in [9, 200, 0, 255] {
            node.child_or_insert_with(i, || i);
        }
        let dm = node.to_direct();
        assert_eq!(node.num_children(), 0);
        assert_eq!(dm.num_children(), 4);
        for i in [9, 200, 0, 255] {
            assert_eq!(dm.seek_child(i), Some(&i));
        }
    }

    #[test]
    fn test_take_children() {
        let mut node = KeyedChildMapping::<u8, 4>::new();
        node.child_or_insert_with(1, || 10);
        node.child_or_insert_with(0, || 20);
        assert_eq!(node.take_children(), vec![20, 10]);
        assert_eq!(node.num_children(), 0);
        assert_eq!(node.seek_child(0), None);
    }
}
