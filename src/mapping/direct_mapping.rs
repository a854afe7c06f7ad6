use crate::mapping::NodeMapping;

/// One slot per possible byte. Used once a node is too dense for the keyed mapping.
pub struct DirectChildMapping<N> {
    children: Box<[Option<N>; 256]>,
    num_children: usize,
}

impl<N> DirectChildMapping<N> {
    pub fn new() -> Self {
        Self {
            children: Box::new(std::array::from_fn(|_| None)),
            num_children: 0,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (u8, &N)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(key, child)| child.as_ref().map(|c| (key as u8, c)))
    }
}

impl<N> Default for DirectChildMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeMapping<N> for DirectChildMapping<N> {
    #[inline]
    fn child_or_insert_with<F: FnOnce() -> N>(&mut self, key: u8, make: F) -> &mut N {
        let slot = &mut self.children[key as usize];
        if slot.is_none() {
            self.num_children += 1;
        }
        slot.get_or_insert_with(make)
    }

    #[inline]
    fn seek_child(&self, key: u8) -> Option<&N> {
        self.children[key as usize].as_ref()
    }

    #[inline]
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N> {
        self.children[key as usize].as_mut()
    }

    fn take_children(&mut self) -> Vec<N> {
        self.num_children = 0;
        self.children.iter_mut().filter_map(Option::take).collect()
    }

    #[inline]
    fn num_children(&self) -> usize {
        self.num_children
    }
}
