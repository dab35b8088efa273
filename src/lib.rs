//! # chainqueue
//!
//! A persistent (immutable) FIFO queue for Rust.
//!
//! ## Overview
//!
//! Every queue operation returns a new queue value and leaves all previously
//! observed values unchanged and usable. The crate includes:
//!
//! - **Type Classes**: the [`Queue`](typeclass::Queue) contract
//! - **Persistent Data Structures**: [`PersistentQueue`](persistent::PersistentQueue),
//!   a doubly-linked queue that rebuilds its backbone on every update
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (`Queue`)
//! - `persistent`: Persistent data structures
//! - `arc`: Use `Arc` instead of `Rc`, making queues `Send + Sync`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chainqueue::prelude::*;
//!
//! let empty = PersistentQueue::new();
//! let queue = empty.enqueue("first").enqueue("second");
//! assert_eq!(queue.head(), Some(&"first"));
//! assert_eq!(format!("{queue}"), "[first,second]");
//!
//! let rest = queue.dequeue();
//! assert_eq!(format!("{rest}"), "[second]");
//! assert!(empty.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use chainqueue::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "persistent")]
pub mod persistent;
