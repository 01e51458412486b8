//! # Intake Queue - Binary Min-Heap
//!
//! Dense array heap. Sift operations swap only while the moving element is
//! strictly smaller, so equal priorities never trade places needlessly.

use super::entities::ScoredItem;
use super::errors::QueueError;
use std::cmp::Ordering;

/// Priority queue over (payload, priority) pairs, minimum priority first.
///
/// Priorities only need `PartialOrd`. Incomparable values (NaN) are treated
/// as equal to everything and may surface in any order.
#[derive(Debug, Clone)]
pub struct IntakeQueue<T, P> {
    heap: Vec<ScoredItem<T, P>>,
}

impl<T, P: PartialOrd> IntakeQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Creates an empty queue with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no items are queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds `item` with the given priority.
    pub fn enqueue(&mut self, item: T, priority: P) {
        self.heap.push(ScoredItem::new(item, priority));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the item with the lowest priority.
    ///
    /// # Errors
    /// - `EmptyQueue` if nothing is queued
    pub fn dequeue(&mut self) -> Result<ScoredItem<T, P>, QueueError> {
        if self.heap.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        let root = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// Returns the item with the lowest priority without removing it.
    ///
    /// # Errors
    /// - `EmptyQueue` if nothing is queued
    pub fn peek(&self) -> Result<&ScoredItem<T, P>, QueueError> {
        self.heap.first().ok_or(QueueError::EmptyQueue)
    }

    /// Returns every queued item ordered by ascending priority.
    ///
    /// The heap itself is not reordered. Sorting is stable over the heap's
    /// array order, so repeated calls on an unmodified queue agree.
    pub fn snapshot(&self) -> Vec<&ScoredItem<T, P>> {
        let mut items: Vec<&ScoredItem<T, P>> = self.heap.iter().collect();
        items.sort_by(|a, b| compare(&a.priority, &b.priority));
        items
    }

    /// Iterates queued items in heap (array) order, which is not sorted.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredItem<T, P>> {
        self.heap.iter()
    }

    /// Drops every queued item. Used before a rebuild from the store.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Moves the element at `index` towards the root while it is strictly
    /// less than its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority < self.heap[parent].priority {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the element at `index` towards the leaves, swapping with the
    /// smaller child while that child is strictly less.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T, P: PartialOrd> Default for IntakeQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PartialOrd> Extend<(T, P)> for IntakeQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (item, priority) in iter {
            self.enqueue(item, priority);
        }
    }
}

fn compare<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}
