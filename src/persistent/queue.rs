//! Persistent (immutable) FIFO queue.
//!
//! This module provides [`PersistentQueue`], an immutable queue that keeps
//! references to both ends of a doubly-linked backbone.
//!
//! # Overview
//!
//! Every operation returns a new queue and leaves the receiver untouched:
//!
//! - O(1) `head`, `last`, `len` and `is_empty`
//! - O(n) `enqueue` and `dequeue`
//! - O(n) iteration and rendering
//!
//! # Rebuilt Backbone
//!
//! Unlike a cons list, this queue does not share structure between
//! versions. `enqueue` and `dequeue` copy every surviving cell into a fresh
//! chain, so two queue values never share a node even when they hold equal
//! elements. Payloads are kept behind a
//! reference counter, so a copy clones the handle and never the element.
//!
//! ```text
//! q1            : [a] <-> [b] <-> [c]
//! q2 = q1.enqueue(d)
//!               : [a'] <-> [b'] <-> [c'] <-> [d]   // a', b', c' are new cells
//! q3 = q1.dequeue()
//!               : [b''] <-> [c'']                  // q1 still reaches a, b, c
//! ```
//!
//! The linear cost of `enqueue` and `dequeue` is a property of this design.
//!
//! # Examples
//!
//! ```rust
//! use chainqueue::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new().enqueue("first").enqueue("second");
//! assert_eq!(queue.head(), Some(&"first"));
//! assert_eq!(format!("{queue}"), "[first,second]");
//!
//! let rest = queue.dequeue();
//! assert_eq!(format!("{rest}"), "[second]");
//! assert_eq!(format!("{queue}"), "[first,second]"); // original unchanged
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use super::node::Node;
use super::{LinkageError, ReferenceCounter};
use crate::typeclass::Queue;

/// Both ends of a non-empty backbone.
///
/// Keeping them in one value makes "head is absent iff tail is absent"
/// hold by construction.
struct Ends<T> {
    head: ReferenceCounter<Node<T>>,
    tail: ReferenceCounter<Node<T>>,
}

/// A persistent (immutable) FIFO queue.
///
/// # Time Complexity
///
/// | Operation  | Complexity |
/// |------------|------------|
/// | `new`      | O(1)       |
/// | `enqueue`  | O(n)       |
/// | `dequeue`  | O(n)       |
/// | `head`     | O(1)       |
/// | `last`     | O(1)       |
/// | `len`      | O(1)       |
/// | `is_empty` | O(1)       |
/// | `clone`    | O(n)       |
///
/// # Examples
///
/// ```rust
/// use chainqueue::persistent::PersistentQueue;
///
/// let queue: PersistentQueue<i32> = (1..=3).collect();
/// assert_eq!(queue.head(), Some(&1));
/// assert_eq!(queue.last(), Some(&3));
/// assert_eq!(queue.len(), 3);
/// ```
pub struct PersistentQueue<T> {
    ends: Option<Ends<T>>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(queue.is_empty());
    /// assert_eq!(format!("{queue}"), "[]");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ends: None,
            length: 0,
        }
    }

    /// Returns the canonical empty queue. Same as [`PersistentQueue::new`].
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Creates a queue containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::singleton(42);
    /// assert_eq!(queue.head(), Some(&42));
    /// assert_eq!(queue.last(), Some(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().enqueue(value)
    }

    /// Builds a queue around an already linked chain.
    ///
    /// The head must have no predecessor and the tail no successor.
    fn from_ends(
        head: ReferenceCounter<Node<T>>,
        tail: ReferenceCounter<Node<T>>,
        length: usize,
    ) -> Self {
        debug_assert!(
            !head.has_predecessor(),
            "queue head must not have a predecessor"
        );
        debug_assert!(
            tail.successor().is_none(),
            "queue tail must not have a successor"
        );
        Self {
            ends: Some(Ends { head, tail }),
            length,
        }
    }

    fn from_single_node(node: ReferenceCounter<Node<T>>) -> Self {
        Self::from_ends(ReferenceCounter::clone(&node), node, 1)
    }

    /// Links shared payloads into a brand-new chain in one forward pass.
    fn from_shared_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = ReferenceCounter<T>>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Self::new();
        };

        let head = Node::new(first);
        let mut tail = ReferenceCounter::clone(&head);
        let mut length = 1;
        for value in values {
            let node = Node::new(value);
            Node::link(&tail, &node);
            tail = node;
            length += 1;
        }
        Self::from_ends(head, tail, length)
    }

    /// Returns a new queue with `value` appended at the tail.
    ///
    /// The whole backbone is copied into fresh cells; the receiver is left
    /// as it was.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let one = PersistentQueue::new().enqueue(1);
    /// let two = one.enqueue(2);
    /// assert_eq!(one.len(), 1);
    /// assert_eq!(two.len(), 2);
    /// assert_eq!(two.head(), Some(&1));
    /// assert_eq!(two.last(), Some(&2));
    /// ```
    #[must_use]
    pub fn enqueue(&self, value: T) -> Self {
        let last = Node::new(ReferenceCounter::new(value));
        let Some(ends) = &self.ends else {
            return Self::from_single_node(last);
        };

        let first = ends.head.clone_value();
        match ends.head.successor() {
            None => Node::link(&first, &last),
            Some(entry) => copy_through_old_tail(entry, &first, &last),
        }
        Self::from_ends(first, last, self.length + 1)
    }

    /// Returns a new queue without the head element.
    ///
    /// Dequeuing an empty queue returns another empty queue.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (1..=3).collect();
    /// let rest = queue.dequeue();
    /// assert_eq!(rest.head(), Some(&2));
    /// assert_eq!(queue.head(), Some(&1));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.dequeue().is_empty());
    /// ```
    #[must_use]
    pub fn dequeue(&self) -> Self {
        let Some(ends) = &self.ends else {
            return Self::new();
        };
        let Some(second) = ends.head.successor() else {
            return Self::new();
        };

        if ReferenceCounter::ptr_eq(second, &ends.tail) {
            return Self::from_single_node(ends.tail.clone_value());
        }

        let new_head = second.clone_value();
        let new_tail = ends.tail.clone_value();
        let Some(before_tail) = ends.tail.predecessor() else {
            unreachable!("tail of a queue with three or more elements has no predecessor");
        };

        if ReferenceCounter::ptr_eq(second, &before_tail) {
            Node::link(&new_head, &new_tail);
        } else {
            let Some(entry) = second.successor() else {
                unreachable!("backbone ends before reaching the tail");
            };
            copy_through_tail_predecessor(entry, &new_head, &new_tail, &before_tail);
        }
        Self::from_ends(new_head, new_tail, self.length - 1)
    }

    /// Returns a reference to the head element, the next one `dequeue`
    /// removes.
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// assert_eq!(queue.head(), Some(&1));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert_eq!(empty.head(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.ends.as_ref().map(|ends| ends.head.value())
    }

    /// Returns a reference to the most recently enqueued element.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.ends.as_ref().map(|ends| ends.tail.value())
    }

    /// Splits the queue into its head element and the dequeued remainder.
    ///
    /// Returns `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue('a').enqueue('b');
    /// let (head, rest) = queue.uncons().unwrap();
    /// assert_eq!(*head, 'a');
    /// assert_eq!(rest.head(), Some(&'b'));
    /// ```
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        self.head().map(|head| (head, self.dequeue()))
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ends.is_none()
    }

    /// Returns an iterator over the elements from head to tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2).enqueue(3);
    /// let collected: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> PersistentQueueIterator<'_, T> {
        PersistentQueueIterator {
            nodes: self.nodes(),
            remaining: self.length,
        }
    }

    fn nodes(&self) -> Nodes<'_, T> {
        Nodes {
            current: self.ends.as_ref().map(|ends| &*ends.head),
        }
    }

    /// Walks the backbone and checks that it is well formed.
    ///
    /// A well-formed queue has a head without predecessor and a tail without
    /// successor, reaches the tail from the head in exactly `len()` steps,
    /// and every node's predecessor points back at the node before it.
    ///
    /// # Errors
    ///
    /// Returns the first [`LinkageError`] found. Queues built through this
    /// type's API always pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = (0..10).collect();
    /// assert!(queue.dequeue().enqueue(10).verify_linkage().is_ok());
    /// ```
    pub fn verify_linkage(&self) -> Result<(), LinkageError> {
        let Some(ends) = &self.ends else {
            return match self.length {
                0 => Ok(()),
                expected => Err(LinkageError::LengthMismatch {
                    expected,
                    actual: 0,
                }),
            };
        };
        if ends.head.has_predecessor() {
            return Err(LinkageError::HeadHasPredecessor);
        }
        if ends.tail.successor().is_some() {
            return Err(LinkageError::TailHasSuccessor);
        }

        let mut current: &Node<T> = &ends.head;
        let mut steps = 1;
        while let Some(next) = current.successor() {
            let points_back = next
                .predecessor()
                .is_some_and(|predecessor| std::ptr::eq(&*predecessor, current));
            if !points_back {
                return Err(LinkageError::BrokenBackReference { position: steps });
            }
            if steps > self.length {
                return Err(LinkageError::LengthMismatch {
                    expected: self.length,
                    actual: steps,
                });
            }
            current = next;
            steps += 1;
        }

        if !std::ptr::eq(current, &*ends.tail) {
            return Err(LinkageError::TailNotReached { steps });
        }
        if steps != self.length {
            return Err(LinkageError::LengthMismatch {
                expected: self.length,
                actual: steps,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Backbone Reconstruction
// =============================================================================
//
// The two walks stop on different conditions: the enqueue walk copies up to
// the node without a successor, the dequeue walk copies up to a node fixed
// before the walk starts.

/// Copies `entry` and every node after it onto `new_head`, then links the
/// last copy to `new_tail`.
///
/// The walk stops at the old tail, recognised by having no successor.
fn copy_through_old_tail<T>(
    entry: &Node<T>,
    new_head: &ReferenceCounter<Node<T>>,
    new_tail: &ReferenceCounter<Node<T>>,
) {
    let mut current = ReferenceCounter::clone(new_head);
    let mut source = entry;
    loop {
        let copy = source.clone_value();
        Node::link(&current, &copy);
        match source.successor() {
            None => {
                Node::link(&copy, new_tail);
                return;
            }
            Some(next) => {
                current = copy;
                source = next;
            }
        }
    }
}

/// Copies `entry` and the nodes after it up to and including `stop` onto
/// `new_head`, then links the last copy to `new_tail`.
///
/// `stop` is the node before the old tail, looked up before the walk.
fn copy_through_tail_predecessor<T>(
    entry: &Node<T>,
    new_head: &ReferenceCounter<Node<T>>,
    new_tail: &ReferenceCounter<Node<T>>,
    stop: &Node<T>,
) {
    let mut current = ReferenceCounter::clone(new_head);
    let mut source = entry;
    loop {
        let copy = source.clone_value();
        Node::link(&current, &copy);
        if std::ptr::eq(source, stop) {
            Node::link(&copy, new_tail);
            return;
        }
        let Some(next) = source.successor() else {
            unreachable!("backbone ends before reaching the node before the tail");
        };
        current = copy;
        source = next;
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Forward walk over the cells of a backbone.
struct Nodes<'a, T> {
    current: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.successor().map(|next| &**next);
            node
        })
    }
}

/// An iterator over references to elements of a [`PersistentQueue`],
/// from head to tail.
pub struct PersistentQueueIterator<'a, T> {
    nodes: Nodes<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for PersistentQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for PersistentQueueIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for PersistentQueueIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the backbone into fresh cells that share the payloads.
impl<T> Clone for PersistentQueue<T> {
    fn clone(&self) -> Self {
        Self::from_shared_values(
            self.nodes()
                .map(|node| ReferenceCounter::clone(node.shared_value())),
        )
    }
}

impl<T> FromIterator<T> for PersistentQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_shared_values(iter.into_iter().map(ReferenceCounter::new))
    }
}

impl<'a, T> IntoIterator for &'a PersistentQueue<T> {
    type Item = &'a T;
    type IntoIter = PersistentQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for PersistentQueue<T> {}

impl<T: Hash> Hash for PersistentQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the queue as `[v1,v2,...]` from head to tail, `[]` when empty.
impl<T: fmt::Display> fmt::Display for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ",")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> Queue<T> for PersistentQueue<T> {
    #[inline]
    fn enqueue(&self, value: T) -> Self {
        Self::enqueue(self, value)
    }

    #[inline]
    fn dequeue(&self) -> Self {
        Self::dequeue(self)
    }

    #[inline]
    fn head(&self) -> Option<&T> {
        Self::head(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentQueue<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentQueue<i32>: Send, Sync);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentQueueIterator<'static, String>: Send, Sync);
