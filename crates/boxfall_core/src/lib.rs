//! # Boxfall Core
//!
//! Step sequencing for the Boxfall puzzle engine:
//! - Fixed-capacity circular queue, pre-allocated at creation
//! - Zero allocations on the push/pop hot path
//! - Overflow and underflow reported to the caller, never absorbed
//!
//! ## Architecture Rules
//!
//! 1. **No heap allocations in hot path** - The backing buffer is allocated once
//! 2. **No silent loss** - A rejected push hands the item back; eviction returns
//!    the evicted item
//! 3. **Single-threaded** - One owner per queue; wrap it yourself if you must share
//!
//! ## Example
//!
//! ```rust,ignore
//! use boxfall_core::TaskQueue;
//!
//! let mut queue = TaskQueue::with_default_capacity();
//! queue.schedule("drop-row", || { /* advance gravity one row */ })?;
//! queue.drain();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod queue;
pub mod task;

pub use error::{QueueError, QueueResult};
pub use queue::BoundedQueue;
pub use task::{Task, TaskQueue};
