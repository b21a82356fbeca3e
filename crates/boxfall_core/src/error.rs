//! # Queue Error Types
//!
//! All errors that can occur in the step queue.

use thiserror::Error;

/// Errors surfaced by the bounded step queue.
///
/// All variants are local, recoverable conditions. None of them leaves the
/// queue in a corrupted state: a rejected push hands the item back untouched,
/// and a failed pop moves no cursor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<T> {
    /// A queue cannot be created with zero capacity.
    #[error("queue capacity must be at least 1")]
    InvalidCapacity,

    /// Push was rejected because the queue is full.
    #[error("queue overflow: push rejected at capacity {capacity}")]
    Overflow {
        /// The item that did not fit, handed back to the caller.
        rejected: T,
        /// The fixed capacity of the queue.
        capacity: usize,
    },

    /// Pop was attempted on an empty queue.
    #[error("queue underflow: pop on empty queue")]
    Underflow,
}

/// Result type for queue operations over items of type `I`.
pub type QueueResult<V, I> = Result<V, QueueError<I>>;
