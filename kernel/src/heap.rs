//! Hand-rolled binary max-heap of paths ordered by heuristic priority.
//!
//! Storage is a 0-indexed `Vec` with an explicit logical capacity that
//! doubles when full. Children of slot `i` live at `2i + 1` and `2i + 2`.
//!
//! # Ordering
//!
//! Entries are ranked by `(priority desc, insertion order asc)`. Among equal
//! priorities the entry enqueued first is dequeued first. The rank is a total
//! order, so an identical path enqueued twice with the same priority settles
//! behind its earlier twin instead of swapping with it. Duplicates are never
//! merged or dropped.

use std::fmt;

use crate::error::QueueError;
use crate::path::Path;

/// Initial logical capacity of a new queue.
pub const DEFAULT_CAPACITY: usize = 100;

#[derive(Debug, Clone)]
struct QueueEntry {
    path: Path,
    priority: i64,
    seq: u64,
}

impl QueueEntry {
    /// Strict heap rank: higher priority wins, earlier insertion breaks ties.
    fn outranks(&self, other: &Self) -> bool {
        self.priority > other.priority || (self.priority == other.priority && self.seq < other.seq)
    }
}

/// Max-priority queue of [`Path`]s.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    slots: Vec<QueueEntry>,
    capacity: usize,
    next_seq: u64,
}

impl PriorityQueue {
    /// Create an empty queue with [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty queue with the given initial capacity (minimum 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            next_seq: 0,
        }
    }

    /// Insert `path` with `priority`. Grows storage when full.
    pub fn enqueue(&mut self, path: Path, priority: i64) {
        if self.slots.len() == self.capacity {
            self.grow();
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots.push(QueueEntry {
            path,
            priority,
            seq,
        });
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the highest-ranked path.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    pub fn dequeue(&mut self) -> Result<Path, QueueError> {
        if self.slots.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let top = self.slots.pop().ok_or(QueueError::EmptyQueue)?;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Ok(top.path)
    }

    /// Remove and return the highest-ranked path together with its priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::EmptyQueue`] if the queue holds no entries.
    pub fn dequeue_with_priority(&mut self) -> Result<(Path, i64), QueueError> {
        let priority = self.peek_priority().ok_or(QueueError::EmptyQueue)?;
        self.dequeue().map(|path| (path, priority))
    }

    /// Priority of the entry that `dequeue` would return next.
    #[must_use]
    pub fn peek_priority(&self) -> Option<i64> {
        self.slots.first().map(|e| e.priority)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Current logical capacity. Doubles each time an enqueue finds it full.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check the heap-order invariant over every occupied slot.
    ///
    /// Returns the index of the first child found outranking its parent.
    #[must_use]
    pub fn first_order_violation(&self) -> Option<usize> {
        (1..self.slots.len()).find(|&i| self.slots[i].outranks(&self.slots[(i - 1) / 2]))
    }

    fn grow(&mut self) {
        // Occupied slots keep their indices; only the backing store moves.
        self.slots.reserve_exact(self.capacity);
        self.capacity *= 2;
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.slots[index].outranks(&self.slots[parent]) {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best = index;
            if self.slots[left].outranks(&self.slots[best]) {
                best = left;
            }
            if right < len && self.slots[right].outranks(&self.slots[best]) {
                best = right;
            }
            if best == index {
                break;
            }
            self.slots.swap(index, best);
            index = best;
        }
    }
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the entries in storage order as `{[a] (5), [a, b] (3)}`.
impl fmt::Display for PriorityQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({})", entry.path, entry.priority)?;
        }
        f.write_str("}")
    }
}
