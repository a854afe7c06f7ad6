use thiserror::Error;

/// Returned by the non-blocking operations on a concurrent tree.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum LockError {
    /// The tree lock is held in a mode incompatible with the requested operation.
    #[error("tree lock is held by another operation")]
    Locked,
}
