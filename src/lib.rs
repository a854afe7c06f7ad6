//! A prefix tree keyed by byte strings, walked one byte per level, whose values may carry an
//! absolute expiry deadline.
//!
//! Expiry is lazy. Nothing sweeps the tree; an expired value simply stops being returned by
//! `find`, and stays in place until it is overwritten or removed. Overwriting or removing an
//! expired value still returns it.
//!
//! ```
//! use std::time::Duration;
//! use extrie::{ConcurrentTree, Tree};
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.insert("app", 1), None);
//! assert_eq!(tree.insert(b"apple", 2), None);
//! assert_eq!(tree.insert("app", 3), Some(1));
//! assert_eq!(tree.find("apple"), Some(&2));
//! assert_eq!(tree.remove("apple"), Some(2));
//! assert_eq!(tree.find("app"), Some(&3));
//!
//! let shared = ConcurrentTree::new();
//! shared.insert_with_expiry("session", "token".to_string(), Duration::from_secs(30));
//! assert_eq!(shared.find("session"), Some("token".to_string()));
//! ```

pub mod clock;
mod concurrent;
mod error;
pub mod keys;
mod mapping;
mod node;
mod tree;

pub use clock::{Clock, ManualClock, SystemClock};
pub use concurrent::ConcurrentTree;
pub use error::LockError;
pub use keys::{Key, OwnedKey};
pub use node::KEYED_WIDTH;
pub use tree::{Tree, TreeStats};

#[cfg(test)]
mod proptests;
