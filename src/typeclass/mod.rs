//! Type class traits shared by the containers of this crate.
//!
//! - [`Queue`]: immutable first-in first-out containers
//!
//! Type classes describe a contract independently of any representation, so
//! code written against [`Queue`] works with every implementation.
//!
//! # Examples
//!
//! ```rust
//! use chainqueue::persistent::PersistentQueue;
//! use chainqueue::typeclass::Queue;
//!
//! fn second<Q: Queue<char>>(queue: &Q) -> Option<char> {
//!     queue.dequeue().head().copied()
//! }
//!
//! let queue = PersistentQueue::new().enqueue('a').enqueue('b');
//! assert_eq!(second(&queue), Some('b'));
//! ```

mod queue;

pub use queue::Queue;
