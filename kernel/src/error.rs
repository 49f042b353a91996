//! Typed kernel errors.

use thiserror::Error;

/// Failure of a [`crate::heap::PriorityQueue`] operation.
///
/// Every variant is a programming error on the caller's side: the search loop
/// checks `is_empty()` before dequeuing, so these never occur in a correct
/// run. They are returned rather than swallowed so the caller fails fast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `dequeue` was called on a queue with no entries.
    #[error("dequeue called on an empty priority queue")]
    EmptyQueue,
}
