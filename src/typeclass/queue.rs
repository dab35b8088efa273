//! Queue type class - immutable first-in first-out containers.
//!
//! A type implements [`Queue`] when it can append at one end, remove from the
//! other, and peek the element that would be removed next, all without
//! mutating the receiver.
//!
//! # Laws
//!
//! For all queues `q` and values `v`:
//!
//! ## Non-emptiness
//!
//! ```text
//! q.enqueue(v).is_empty() == false
//! ```
//!
//! ## First In, First Out
//!
//! Repeatedly taking `head()` then `dequeue()` yields the enqueued values in
//! insertion order.
//!
//! ## Persistence
//!
//! ```text
//! let before = q.head();
//! let _ = q.enqueue(v);
//! let _ = q.dequeue();
//! q.head() == before
//! ```
//!
//! # Examples
//!
//! ```rust
//! use chainqueue::persistent::PersistentQueue;
//! use chainqueue::typeclass::Queue;
//!
//! fn drain<Q: Queue<i32>>(mut queue: Q) -> Vec<i32> {
//!     let mut drained = Vec::new();
//!     while let Some(&value) = queue.head() {
//!         drained.push(value);
//!         queue = queue.dequeue();
//!     }
//!     drained
//! }
//!
//! let queue = PersistentQueue::new().enqueue_all([1, 2, 3]);
//! assert_eq!(drain(queue), vec![1, 2, 3]);
//! ```

/// A type class for persistent FIFO queues.
///
/// Every operation takes `&self` and returns a new value; the receiver stays
/// usable and observably unchanged.
pub trait Queue<T>: Sized {
    /// Returns a new queue with `value` appended at the tail.
    #[must_use]
    fn enqueue(&self, value: T) -> Self;

    /// Returns a new queue without the head element.
    ///
    /// Dequeuing an empty queue yields an empty queue, not an error.
    #[must_use]
    fn dequeue(&self) -> Self;

    /// Returns the element the next `dequeue` removes, or `None` when empty.
    fn head(&self) -> Option<&T>;

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool;

    /// Enqueues every value of `values` in iteration order.
    ///
    /// An empty iterator yields a copy of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chainqueue::persistent::PersistentQueue;
    /// use chainqueue::typeclass::Queue;
    ///
    /// let queue = PersistentQueue::singleton("zero").enqueue_all(["one", "two"]);
    /// assert_eq!(format!("{queue}"), "[zero,one,two]");
    /// ```
    #[must_use]
    fn enqueue_all<I>(&self, values: I) -> Self
    where
        Self: Clone,
        I: IntoIterator<Item = T>,
    {
        values
            .into_iter()
            .fold(self.clone(), |queue, value| queue.enqueue(value))
    }
}
