//! # BX-04 Priority Intake Queue
//!
//! Ranks inbound records so the most urgent one is always available first.
//! Priorities are supplied by the caller (see `bx-01-scoring`); lower values
//! are more urgent.
//!
//! ## Structure
//!
//! A binary min-heap stored densely in a `Vec`. The children of position `i`
//! are `2i + 1` and `2i + 2`, its parent is `(i - 1) / 2`.
//!
//! ## Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Heap property: parent priority <= child priority | `sift_up()` / `sift_down()` |
//! | Payloads are never mutated once enqueued | no `&mut` access to queued items |
//! | `snapshot()` leaves the heap untouched | sorts a vector of references |
//!
//! ## Operations
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `enqueue` | O(log n) |
//! | `dequeue` | O(log n) |
//! | `peek` | O(1) |
//! | `snapshot` | O(n log n) |
//!
//! Equal priorities have no defined order: callers must not rely on FIFO
//! behavior among ties.
//!
//! ```
//! use bx_04_intake_queue::{IntakeQueue, QueueError};
//!
//! let mut queue = IntakeQueue::new();
//! queue.enqueue("Jane Startup", 75);
//! queue.enqueue("John Enterprise", 45);
//! queue.enqueue("Bob Direct", 55);
//!
//! assert_eq!(queue.peek().map(|s| s.item), Ok("John Enterprise"));
//! assert_eq!(queue.dequeue().map(|s| s.priority), Ok(45));
//! assert_eq!(queue.len(), 2);
//!
//! let mut empty: IntakeQueue<&str, u32> = IntakeQueue::new();
//! assert_eq!(empty.dequeue(), Err(QueueError::EmptyQueue));
//! ```

pub mod domain;

pub use domain::{IntakeQueue, QueueError, ScoredItem};
