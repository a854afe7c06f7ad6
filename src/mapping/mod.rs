pub(crate) mod direct_mapping;
pub(crate) mod keyed_mapping;

/// Byte-addressed storage for a node's children.
///
/// Children are only ever added, never deleted: removal of a key clears the
/// terminal slot but keeps the path in place.
pub trait NodeMapping<N> {
    /// Returns the child at `key`, creating it with `make` if absent.
    fn child_or_insert_with<F: FnOnce() -> N>(&mut self, key: u8, make: F) -> &mut N;
    fn seek_child(&self, key: u8) -> Option<&N>;
    fn seek_child_mut(&mut self, key: u8) -> Option<&mut N>;
    /// Moves every child out, leaving the mapping empty.
    fn take_children(&mut self) -> Vec<N>;
    fn num_children(&self) -> usize;
}
