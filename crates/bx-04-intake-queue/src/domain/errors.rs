//! Intake queue error types.

use thiserror::Error;

/// Errors returned by the intake queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// `dequeue` or `peek` on a queue holding no items.
    #[error("Intake queue is empty")]
    EmptyQueue,
}
