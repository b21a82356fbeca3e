//! # Named Deferred Tasks
//!
//! The items the step queue was built for: a label paired with a deferred
//! action. The host schedules one task per pending animation or gravity
//! step and drains the queue from its frame loop.

use std::fmt;

use crate::error::QueueResult;
use crate::queue::BoundedQueue;

/// A deferred unit of work with a human-readable label.
///
/// The label names the step for logging; the action runs at most once.
pub struct Task {
    /// Name of the step, used for logging only.
    label: String,
    /// The deferred action. Consumed by [`run`](Self::run).
    action: Box<dyn FnOnce()>,
}

impl Task {
    /// Creates a new task.
    ///
    /// # Arguments
    ///
    /// * `label` - Name of the step (e.g. `"drop-row"`)
    /// * `action` - The work to defer
    pub fn new(label: impl Into<String>, action: impl FnOnce() + 'static) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    /// Returns the task label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Executes the deferred action, consuming the task.
    pub fn run(self) {
        (self.action)();
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").field("label", &self.label).finish()
    }
}

/// FIFO queue of pending tasks over a fixed-capacity ring.
///
/// A thin convenience wrapper around [`BoundedQueue<Task>`] that pairs
/// scheduling with execution. Single-threaded: the owner schedules from
/// input handling and drains from the frame loop, one context.
#[derive(Debug)]
pub struct TaskQueue {
    /// The backing ring buffer.
    inner: BoundedQueue<Task>,
}

impl TaskQueue {
    /// Creates an empty task queue with the specified capacity.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidCapacity`](crate::QueueError::InvalidCapacity)
    /// if `capacity` is zero.
    pub fn new(capacity: usize) -> QueueResult<Self, Task> {
        Ok(Self {
            inner: BoundedQueue::new(capacity)?,
        })
    }

    /// Creates an empty task queue with the default 128-slot capacity.
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self {
            inner: BoundedQueue::with_default_capacity(),
        }
    }

    /// Schedules a task at the tail of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Overflow`](crate::QueueError::Overflow) when the
    /// queue is full; the rejected task rides back inside the error.
    pub fn schedule(
        &mut self,
        label: impl Into<String>,
        action: impl FnOnce() + 'static,
    ) -> QueueResult<(), Task> {
        self.inner.push(Task::new(label, action))
    }

    /// Schedules a task, evicting the oldest pending task if full.
    ///
    /// The displaced task is returned unexecuted so the caller can decide
    /// whether to run or discard it.
    pub fn schedule_evicting(
        &mut self,
        label: impl Into<String>,
        action: impl FnOnce() + 'static,
    ) -> Option<Task> {
        self.inner.push_evicting(Task::new(label, action))
    }

    /// Pops and executes the task at the head of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::Underflow`](crate::QueueError::Underflow) when
    /// no task is pending.
    pub fn run_next(&mut self) -> QueueResult<(), Task> {
        let task = self.inner.pop()?;
        tracing::trace!("running task: {}", task.label());
        task.run();
        Ok(())
    }

    /// Executes every pending task in FIFO order.
    ///
    /// Returns the number of tasks executed.
    pub fn drain(&mut self) -> usize {
        let mut executed = 0;
        while self.run_next().is_ok() {
            executed += 1;
        }
        executed
    }

    /// Returns the number of pending tasks.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if no tasks are pending.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns true if the queue cannot accept another task without eviction.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the fixed capacity of the queue.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Discards all pending tasks without executing them.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_task_runs_once() {
        let counter = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&counter);

        let task = Task::new("bump", move || *seen.borrow_mut() += 1);
        assert_eq!(task.label(), "bump");

        task.run();
        assert_eq!(*counter.borrow(), 1);
    }

    #[test]
    fn test_scheduled_tasks_run_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut queue = TaskQueue::new(4).unwrap();

        for step in 1..=3 {
            let log = Rc::clone(&order);
            queue
                .schedule(format!("step-{step}"), move || log.borrow_mut().push(step))
                .unwrap();
        }

        assert_eq!(queue.drain(), 3);
        assert_eq!(*order.borrow(), vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_run_next_on_empty_underflows() {
        let mut queue = TaskQueue::new(2).unwrap();
        assert!(queue.run_next().is_err());
    }

    #[test]
    fn test_schedule_evicting_hands_back_unexecuted_task() {
        let ran = Rc::new(RefCell::new(false));
        let mut queue = TaskQueue::new(1).unwrap();

        let flag = Rc::clone(&ran);
        queue
            .schedule("first", move || *flag.borrow_mut() = true)
            .unwrap();

        let evicted = queue.schedule_evicting("second", || {}).unwrap();
        assert_eq!(evicted.label(), "first");
        // The evicted task was never executed.
        assert!(!*ran.borrow());

        assert_eq!(queue.len(), 1);
        queue.run_next().unwrap();
    }

    #[test]
    fn test_clear_discards_without_running() {
        let counter = Rc::new(RefCell::new(0));
        let mut queue = TaskQueue::new(4).unwrap();

        let seen = Rc::clone(&counter);
        queue.schedule("never", move || *seen.borrow_mut() += 1).unwrap();
        queue.clear();

        assert!(queue.is_empty());
        assert_eq!(*counter.borrow(), 0);
    }
}
