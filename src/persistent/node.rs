//! Doubly-linked cell used to build a queue's backbone.
//!
//! A [`Node`] is scaffolding for [`PersistentQueue`](super::PersistentQueue)
//! and never leaves this crate. Each link is a once-set cell: a node is
//! created unlinked, gets linked exactly once while the owning queue is being
//! built, and is frozen from then on. Publishing a queue therefore never
//! exposes a node that can still change.
//!
//! The forward link (`successor`) owns the next node. The backward link
//! (`predecessor`) is a non-owning [`WeakReference`] used only for lookups
//! such as "the node before the tail".

use super::{LinkCell, ReferenceCounter, WeakReference};

pub(crate) struct Node<T> {
    value: ReferenceCounter<T>,
    predecessor: LinkCell<WeakReference<Self>>,
    successor: LinkCell<ReferenceCounter<Self>>,
}

impl<T> Node<T> {
    /// Allocates an unlinked node holding `value`.
    pub(crate) fn new(value: ReferenceCounter<T>) -> ReferenceCounter<Self> {
        ReferenceCounter::new(Self {
            value,
            predecessor: LinkCell::new(),
            successor: LinkCell::new(),
        })
    }

    /// Allocates a new unlinked node carrying this node's payload.
    ///
    /// Only the payload handle is cloned; `self` is left untouched.
    pub(crate) fn clone_value(&self) -> ReferenceCounter<Self> {
        Self::new(ReferenceCounter::clone(&self.value))
    }

    /// Links `current -> next` in both directions in one step.
    ///
    /// `current` must not have a successor yet and `next` must not have a
    /// predecessor yet. The reconstruction walks in `queue.rs` only ever link
    /// freshly allocated nodes, so a relink here is an internal bug. Either
    /// both directions are set or neither is.
    pub(crate) fn link(current: &ReferenceCounter<Self>, next: &ReferenceCounter<Self>) {
        let forward_free = current.successor.get().is_none();
        let backward_free = next.predecessor.get().is_none();
        debug_assert!(
            forward_free && backward_free,
            "node linked twice: forward_free={forward_free}, backward_free={backward_free}"
        );
        if forward_free && backward_free {
            let _ = current.successor.set(ReferenceCounter::clone(next));
            let _ = next.predecessor.set(ReferenceCounter::downgrade(current));
        }
    }

    /// Sets only the forward link, leaving `next`'s predecessor alone.
    ///
    /// Builds deliberately broken chains for the linkage checks.
    #[cfg(test)]
    pub(crate) fn link_forward_only(current: &Self, next: &ReferenceCounter<Self>) {
        assert!(
            current.successor.set(ReferenceCounter::clone(next)).is_ok(),
            "successor already set"
        );
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) const fn shared_value(&self) -> &ReferenceCounter<T> {
        &self.value
    }

    #[inline]
    pub(crate) fn successor(&self) -> Option<&ReferenceCounter<Self>> {
        self.successor.get()
    }

    /// Returns the node linked before this one, if it is still alive.
    #[inline]
    pub(crate) fn predecessor(&self) -> Option<ReferenceCounter<Self>> {
        self.predecessor.get().and_then(WeakReference::upgrade)
    }

    /// Returns `true` if a predecessor link was ever set on this node.
    ///
    /// Unlike [`Node::predecessor`] this does not care whether the
    /// predecessor is still alive.
    #[inline]
    pub(crate) fn has_predecessor(&self) -> bool {
        self.predecessor.get().is_some()
    }
}

/// Releases the successor chain iteratively.
///
/// The default drop glue would recurse once per node and overflow the stack
/// on long queues. Nodes still referenced elsewhere (a queue's tail handle)
/// stop the walk.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.successor.take();
        while let Some(node) = next {
            next = match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => node.successor.take(),
                Err(_) => None,
            };
        }
    }
}
