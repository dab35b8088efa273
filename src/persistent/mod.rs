//! Persistent (immutable) data structures.
//!
//! - [`PersistentQueue`]: Persistent FIFO queue over a rebuilt doubly-linked
//!   backbone
//!
//! # Versions Never Share Cells
//!
//! Every operation returns a new value and leaves the receiver untouched.
//! The queue reaches that by copying its backbone into fresh cells on each
//! `enqueue` and `dequeue` instead of sharing suffixes. Element payloads are
//! reference counted and do get shared.
//!
//! # Examples
//!
//! ```rust
//! use chainqueue::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new().enqueue(1).enqueue(2).enqueue(3);
//! assert_eq!(queue.head(), Some(&1));
//!
//! let rest = queue.dequeue();
//! assert_eq!(queue.len(), 3); // Original unchanged
//! assert_eq!(rest.len(), 2);  // New queue
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Non-owning counterpart of [`ReferenceCounter`].
#[cfg(feature = "arc")]
pub(crate) type WeakReference<T> = std::sync::Weak<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type WeakReference<T> = std::rc::Weak<T>;

/// Write-once cell holding a node link.
///
/// `std::sync::OnceLock` with the `arc` feature, `std::cell::OnceCell`
/// otherwise.
#[cfg(feature = "arc")]
pub(crate) type LinkCell<T> = std::sync::OnceLock<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type LinkCell<T> = std::cell::OnceCell<T>;

mod error;
mod node;
mod queue;

pub use error::LinkageError;
pub use queue::PersistentQueue;
pub use queue::PersistentQueueIterator;

// =============================================================================
// Tests
// =============================================================================
