//! Frontier queue lock tests.
//!
//! Proves:
//! 1. Heap order holds after arbitrary enqueue/dequeue interleavings
//! 2. `[5, 9, 1, 9, 3]` dequeues as `9, 9, 5, 3, 1`
//! 3. Growth past the initial capacity loses and duplicates nothing
//! 4. Identical entries are both kept
//! 5. Ties dequeue in insertion order (the documented tie-break)

use proptest::prelude::*;
use wikiracer_kernel::error::QueueError;
use wikiracer_kernel::heap::{PriorityQueue, DEFAULT_CAPACITY};
use wikiracer_kernel::path::Path;

fn tagged(tag: usize) -> Path {
    Path::start(format!("T{tag}"))
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(i64),
    Dequeue,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (-25_i64..25).prop_map(Op::Enqueue),
        1 => Just(Op::Dequeue),
    ]
}

// ---------------------------------------------------------------------------
// 1. Heap invariant
// ---------------------------------------------------------------------------

proptest! {
    /// Every step keeps heap order, and every dequeue returns the entry a
    /// sorted model picks: highest priority, earliest insertion among ties.
    #[test]
    fn heap_matches_model_under_interleaved_operations(
        ops in prop::collection::vec(op(), 0..600),
        capacity in 1_usize..8,
    ) {
        let mut queue = PriorityQueue::with_capacity(capacity);
        let mut model: Vec<(i64, usize)> = Vec::new();
        for (step, op) in ops.into_iter().enumerate() {
            match op {
                Op::Enqueue(priority) => {
                    queue.enqueue(tagged(step), priority);
                    model.push((priority, step));
                }
                Op::Dequeue => match queue.dequeue_with_priority() {
                    Ok((path, priority)) => {
                        let best = model
                            .iter()
                            .enumerate()
                            .max_by(|(_, a), (_, b)| a.0.cmp(&b.0).then(b.1.cmp(&a.1)))
                            .map(|(index, _)| index)
                            .unwrap();
                        let (want_priority, want_step) = model.remove(best);
                        prop_assert_eq!(priority, want_priority);
                        prop_assert_eq!(path, tagged(want_step));
                    }
                    Err(err) => {
                        prop_assert!(model.is_empty());
                        prop_assert_eq!(err, QueueError::EmptyQueue);
                    }
                },
            }
            prop_assert_eq!(queue.first_order_violation(), None, "step {}", step);
            prop_assert_eq!(queue.len(), model.len());
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Ordering
// ---------------------------------------------------------------------------

#[test]
fn mixed_priorities_dequeue_non_increasing() {
    let mut queue = PriorityQueue::new();
    for (tag, priority) in [5, 9, 1, 9, 3].into_iter().enumerate() {
        queue.enqueue(tagged(tag), priority);
    }
    let order: Vec<i64> = std::iter::from_fn(|| queue.dequeue_with_priority().ok())
        .map(|(_, priority)| priority)
        .collect();
    assert_eq!(order, vec![9, 9, 5, 3, 1]);
}

#[test]
fn empty_queue_reports_an_error() {
    let mut queue = PriorityQueue::new();
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
    queue.enqueue(tagged(0), 1);
    queue.dequeue().unwrap();
    assert_eq!(queue.dequeue(), Err(QueueError::EmptyQueue));
}

// ---------------------------------------------------------------------------
// 3. Growth
// ---------------------------------------------------------------------------

#[test]
fn growth_past_default_capacity_is_lossless() {
    const N: usize = 500;
    let mut queue = PriorityQueue::new();
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);

    // Distinct priorities in a scrambled order: 0..N stepped by a unit mod N.
    for i in 0..N {
        let priority = (i * 137) % N;
        queue.enqueue(tagged(priority), i64::try_from(priority).unwrap());
    }
    assert!(queue.capacity() >= N);
    assert_eq!(queue.len(), N);

    let mut previous = i64::MAX;
    let mut seen = std::collections::BTreeSet::new();
    while let Ok((path, priority)) = queue.dequeue_with_priority() {
        assert!(priority <= previous);
        assert_eq!(path.frontier(), Some(format!("T{priority}").as_str()));
        assert!(seen.insert(priority), "duplicate {priority}");
        previous = priority;
    }
    assert_eq!(seen.len(), N);
}

// ---------------------------------------------------------------------------
// 4. Duplicates
// ---------------------------------------------------------------------------

#[test]
fn identical_entries_are_not_deduplicated() {
    let mut queue = PriorityQueue::new();
    let path: Path = ["Rome", "Forum"].into_iter().collect();
    queue.enqueue(path.clone(), 4);
    queue.enqueue(path.clone(), 4);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.dequeue().unwrap(), path);
    assert_eq!(queue.dequeue().unwrap(), path);
    assert!(queue.is_empty());
}

// ---------------------------------------------------------------------------
// 5. Tie-break
// ---------------------------------------------------------------------------

/// Equal priorities dequeue first-in first-out, regardless of how the paths
/// compare lexicographically.
#[test]
fn equal_priorities_dequeue_in_insertion_order() {
    let mut queue = PriorityQueue::new();
    for topic in ["Zeta", "Alpha", "Mu", "Beta"] {
        queue.enqueue(Path::start(topic), 3);
    }
    queue.enqueue(Path::start("Top"), 4);

    let order: Vec<String> = std::iter::from_fn(|| queue.dequeue().ok())
        .filter_map(|path| path.frontier().map(str::to_string))
        .collect();
    assert_eq!(order, ["Top", "Zeta", "Alpha", "Mu", "Beta"]);
}
