//! Entities held by the intake queue.

/// A queued payload with its ordering key.
///
/// Created on enqueue and handed back by value on dequeue. The queue never
/// mutates either field in between.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem<T, P> {
    /// Opaque payload, usually a shared handle to a stored record.
    pub item: T,
    /// Ordering key. Lower is more urgent.
    pub priority: P,
}

impl<T, P> ScoredItem<T, P> {
    pub fn new(item: T, priority: P) -> Self {
        Self { item, priority }
    }

    /// Splits the pair back into its parts.
    pub fn into_parts(self) -> (T, P) {
        (self.item, self.priority)
    }
}
