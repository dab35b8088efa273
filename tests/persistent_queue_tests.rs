//! Unit tests for PersistentQueue.
//!
//! These tests walk through queue histories step by step and check that
//! every version keeps rendering the same after later operations.

use chainqueue::persistent::{LinkageError, PersistentQueue};
use chainqueue::typeclass::Queue;
use rstest::{fixture, rstest};

fn render<T: std::fmt::Display>(queue: &PersistentQueue<T>) -> String {
    format!("{queue}")
}

#[fixture]
fn empty() -> PersistentQueue<&'static str> {
    PersistentQueue::new()
}

// =============================================================================
// Cycle 1: empty queue
// =============================================================================

#[rstest]
fn test_empty_queue_has_no_head(empty: PersistentQueue<&'static str>) {
    assert_eq!(empty.head(), None);
    assert_eq!(render(&empty), "[]");
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[rstest]
fn test_dequeue_on_empty_is_empty(empty: PersistentQueue<&'static str>) {
    let dequeued = empty.dequeue();
    assert!(dequeued.is_empty());
    assert_eq!(render(&dequeued), "[]");
    assert_eq!(dequeued.verify_linkage(), Ok(()));
}

#[rstest]
fn test_default_is_empty() {
    let queue: PersistentQueue<i32> = PersistentQueue::default();
    assert!(queue.is_empty());
}

// =============================================================================
// Cycle 2: enqueue
// =============================================================================

#[rstest]
fn test_enqueue_on_empty(empty: PersistentQueue<&'static str>) {
    let one = empty.enqueue("first");
    assert_eq!(one.head(), Some(&"first"));
    assert_eq!(render(&one), "[first]");
    assert!(!one.is_empty());
    assert!(empty.is_empty());
}

#[rstest]
fn test_enqueue_keeps_head(empty: PersistentQueue<&'static str>) {
    let one = empty.enqueue("first");
    let two = one.enqueue("second");
    assert_eq!(two.head(), Some(&"first"));
    assert_eq!(render(&two), "[first,second]");
    assert_eq!(render(&one), "[first]");
}

#[rstest]
fn test_enqueue_allows_duplicates(empty: PersistentQueue<&'static str>) {
    let queue = empty.enqueue("same").enqueue("same").enqueue("same");
    assert_eq!(render(&queue), "[same,same,same]");
    assert_eq!(queue.len(), 3);
}

#[rstest]
fn test_enqueue_three_from_empty(empty: PersistentQueue<&'static str>) {
    let queue = empty.enqueue("one").enqueue("two").enqueue("three");
    assert_eq!(render(&queue), "[one,two,three]");
    assert_eq!(queue.head(), Some(&"one"));
}

// =============================================================================
// Cycle 3: dequeue
// =============================================================================

#[rstest]
fn test_dequeue_two_element_queue(empty: PersistentQueue<&'static str>) {
    let two = empty.enqueue("first").enqueue("second");
    let one = two.dequeue();
    assert_eq!(render(&one), "[second]");
    assert_eq!(one.head(), Some(&"second"));
    assert_eq!(render(&two), "[first,second]");
}

#[rstest]
fn test_dequeue_single_element_queue(empty: PersistentQueue<&'static str>) {
    let one = empty.enqueue("first");
    let none = one.dequeue();
    assert_eq!(one.head(), Some(&"first"));
    assert_eq!(none.head(), None);
    assert!(none.is_empty());
    assert_eq!(render(&none), "[]");
}

#[rstest]
fn test_dequeue_four_until_empty(empty: PersistentQueue<&'static str>) {
    let four = empty
        .enqueue("first")
        .enqueue("second")
        .enqueue("three")
        .enqueue("four");
    let three = four.dequeue();
    assert_eq!(render(&three), "[second,three,four]");

    let drained = three.dequeue().dequeue().dequeue();
    assert_eq!(render(&drained), "[]");
    assert_eq!(drained.head(), None);
    assert!(drained.is_empty());
}

#[rstest]
fn test_dequeue_past_empty_stays_empty(empty: PersistentQueue<&'static str>) {
    let queue = empty.enqueue("only").dequeue().dequeue().dequeue();
    assert!(queue.is_empty());
    assert_eq!(queue.verify_linkage(), Ok(()));
}

// =============================================================================
// Cycle 4: full history
// =============================================================================

#[rstest]
fn test_every_version_stays_intact(empty: PersistentQueue<&'static str>) {
    let step1 = empty.enqueue("first");
    let step2 = step1.enqueue("second");
    let step3 = step1.dequeue();
    assert_eq!(step1.head(), Some(&"first"));
    assert!(step3.is_empty());

    let step4 = step2.enqueue("three");
    let step5 = step4.enqueue("four");
    assert_eq!(render(&step4), "[first,second,three]");
    assert_eq!(render(&step5), "[first,second,three,four]");

    let step6 = step4.dequeue();
    assert_eq!(render(&step4), "[first,second,three]");
    assert_eq!(render(&step5), "[first,second,three,four]");
    assert_eq!(render(&step6), "[second,three]");
    assert_eq!(step6.head(), Some(&"second"));

    // dequeuing the same version twice gives equal queues
    let step7 = step5.dequeue();
    let step8 = step5.dequeue();
    assert_eq!(render(&step7), "[second,three,four]");
    assert_eq!(render(&step8), "[second,three,four]");
    assert_eq!(step7, step8);
    assert!(!step8.is_empty());

    let step9 = step7.dequeue().dequeue().dequeue();
    assert_eq!(render(&step9), "[]");
    assert_eq!(step9.head(), None);

    // an emptied queue can be reused
    let step10 = step9.enqueue("one").enqueue("two").enqueue("three");
    assert_eq!(render(&step10), "[one,two,three]");
    assert_eq!(step10.head(), Some(&"one"));

    // so can an intermediate one
    let step11 = step7.enqueue("one").enqueue("two").enqueue("three");
    assert_eq!(render(&step11), "[second,three,four,one,two,three]");
    assert_eq!(step11.head(), Some(&"second"));

    for queue in [
        &step1, &step2, &step3, &step4, &step5, &step6, &step7, &step8, &step9, &step10, &step11,
    ] {
        assert_eq!(queue.verify_linkage(), Ok(()));
    }
}

// =============================================================================
// Cycle 5: accessors
// =============================================================================

#[rstest]
#[case(&[], None, None)]
#[case(&[1], Some(1), Some(1))]
#[case(&[1, 2], Some(1), Some(2))]
#[case(&[1, 2, 3, 4], Some(1), Some(4))]
fn test_head_and_last(
    #[case] values: &[i32],
    #[case] head: Option<i32>,
    #[case] last: Option<i32>,
) {
    let queue: PersistentQueue<i32> = values.iter().copied().collect();
    assert_eq!(queue.head().copied(), head);
    assert_eq!(queue.last().copied(), last);
    assert_eq!(queue.len(), values.len());
}

#[rstest]
fn test_reads_are_repeatable() {
    let queue: PersistentQueue<i32> = (1..=5).collect();
    assert_eq!(queue.head(), queue.head());
    assert_eq!(render(&queue), render(&queue));
}

#[rstest]
fn test_iter_follows_insertion_order() {
    let queue = PersistentQueue::new().enqueue('x').enqueue('y').enqueue('z');
    let collected: String = queue.iter().collect();
    assert_eq!(collected, "xyz");

    let mut by_reference = Vec::new();
    for value in &queue {
        by_reference.push(*value);
    }
    assert_eq!(by_reference, vec!['x', 'y', 'z']);
}

#[rstest]
fn test_uncons_walks_the_queue() {
    let mut queue: PersistentQueue<i32> = (1..=3).collect();
    let mut drained = Vec::new();
    while let Some((head, rest)) = queue.uncons() {
        drained.push(*head);
        queue = rest;
    }
    assert_eq!(drained, vec![1, 2, 3]);
}

#[rstest]
fn test_payloads_without_clone_are_supported() {
    struct Opaque(u8);

    let queue = PersistentQueue::new().enqueue(Opaque(1)).enqueue(Opaque(2));
    let rest = queue.dequeue();
    assert_eq!(rest.head().map(|opaque| opaque.0), Some(2));
    assert_eq!(queue.head().map(|opaque| opaque.0), Some(1));
}

// =============================================================================
// Cycle 6: Queue trait
// =============================================================================

fn drain<T: Clone, Q: Queue<T>>(mut queue: Q) -> Vec<T> {
    let mut drained = Vec::new();
    while let Some(value) = queue.head() {
        drained.push(value.clone());
        queue = queue.dequeue();
    }
    drained
}

#[rstest]
fn test_queue_trait_drain_is_fifo() {
    let queue = PersistentQueue::new().enqueue_all(["a", "b", "c"]);
    assert_eq!(drain(queue), vec!["a", "b", "c"]);
}

#[rstest]
fn test_enqueue_all_with_nothing_copies_receiver() {
    let queue: PersistentQueue<i32> = (1..=3).collect();
    let same = queue.enqueue_all(std::iter::empty());
    assert_eq!(same, queue);
    assert_eq!(same.verify_linkage(), Ok(()));
}

#[rstest]
fn test_queue_trait_is_empty_matches_inherent() {
    let queue: PersistentQueue<i32> = PersistentQueue::new();
    assert!(Queue::is_empty(&queue));
    assert!(!Queue::is_empty(&Queue::enqueue(&queue, 1)));
}

// =============================================================================
// Cycle 7: linkage errors
// =============================================================================

#[rstest]
fn test_linkage_error_is_displayable() {
    let error = LinkageError::TailHasSuccessor;
    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert_eq!(boxed.to_string(), "tail node has a successor");
}
