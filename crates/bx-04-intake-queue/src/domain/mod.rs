//! # Domain Layer - Intake Queue
//!
//! - `entities`: `ScoredItem`, the (payload, priority) pair held by the heap
//! - `heap`: `IntakeQueue`, the binary min-heap
//! - `errors`: `QueueError`

pub mod entities;
pub mod errors;
pub mod heap;

pub use entities::ScoredItem;
pub use errors::QueueError;
pub use heap::IntakeQueue;
