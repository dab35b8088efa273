//! Error type reported by [`PersistentQueue::verify_linkage`].
//!
//! [`PersistentQueue::verify_linkage`]: super::PersistentQueue::verify_linkage

use std::fmt;

/// Describes the first broken link found while walking a queue's backbone.
///
/// A correctly built queue never produces this error; it exists so tests
/// and debugging sessions can check the chain after every operation.
///
/// # Examples
///
/// ```rust
/// use chainqueue::persistent::{LinkageError, PersistentQueue};
///
/// let queue: PersistentQueue<i32> = (1..=3).collect();
/// assert_eq!(queue.verify_linkage(), Ok(()));
///
/// let error = LinkageError::BrokenBackReference { position: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "node at position 2 does not point back to its forward neighbour"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkageError {
    /// The head node has a predecessor.
    HeadHasPredecessor,
    /// The tail node has a successor.
    TailHasSuccessor,
    /// The node at `position` (zero-based from the head) is not linked back
    /// to the node before it.
    BrokenBackReference {
        /// Position of the offending node.
        position: usize,
    },
    /// Following successors from the head did not end on the tail node.
    TailNotReached {
        /// Number of nodes visited before the walk stopped.
        steps: usize,
    },
    /// The number of reachable nodes differs from the cached length.
    LengthMismatch {
        /// Cached length of the queue.
        expected: usize,
        /// Number of nodes actually reachable from the head.
        actual: usize,
    },
}

impl fmt::Display for LinkageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeadHasPredecessor => write!(formatter, "head node has a predecessor"),
            Self::TailHasSuccessor => write!(formatter, "tail node has a successor"),
            Self::BrokenBackReference { position } => write!(
                formatter,
                "node at position {position} does not point back to its forward neighbour"
            ),
            Self::TailNotReached { steps } => write!(
                formatter,
                "walk from head stopped after {steps} nodes without reaching the tail"
            ),
            Self::LengthMismatch { expected, actual } => write!(
                formatter,
                "queue length is {expected} but {actual} nodes are reachable"
            ),
        }
    }
}

impl std::error::Error for LinkageError {}
