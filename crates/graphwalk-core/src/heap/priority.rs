use super::{Heap, HeapOrder};

/// Payload paired with the numeric priority it is ordered by
#[derive(Debug, Clone, PartialEq)]
pub struct Prioritized<T> {
    pub item: T,
    pub priority: f64,
}

/// Orders entries by ascending `priority`, ignoring the payload
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority;

impl<T> HeapOrder<Prioritized<T>> for ByPriority {
    fn precedes(&self, a: &Prioritized<T>, b: &Prioritized<T>) -> bool {
        a.priority < b.priority
    }
}

/// Min-priority queue without decrease-key.
///
/// The same payload may be queued several times with different priorities;
/// consumers are expected to discard entries that have gone stale by the time
/// they are popped.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: Heap<Prioritized<T>, ByPriority>,
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: Heap::with_order(ByPriority),
        }
    }

    pub fn add(&mut self, item: T, priority: f64) {
        self.heap.add(Prioritized { item, priority });
    }

    /// Remove the entry with the smallest priority
    pub fn pop_min(&mut self) -> Option<Prioritized<T>> {
        self.heap.pop()
    }

    pub fn peek_min(&self) -> Option<&Prioritized<T>> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        self.heap.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_by_priority_not_payload() {
        let mut queue = PriorityQueue::new();
        queue.add("zeta", 1.0);
        queue.add("alpha", 9.0);
        queue.add("mid", 4.5);

        assert_eq!(queue.pop_min().map(|e| e.item), Some("zeta"));
        assert_eq!(queue.pop_min().map(|e| e.item), Some("mid"));
        assert_eq!(queue.pop_min().map(|e| e.item), Some("alpha"));
        assert!(queue.pop_min().is_none());
    }

    #[test]
    fn test_duplicate_payloads_coexist() {
        let mut queue = PriorityQueue::new();
        queue.add('d', 7.0);
        queue.add('d', 8.0);
        queue.add('d', 3.0);

        assert_eq!(queue.len(), 3);
        let priorities: Vec<f64> = std::iter::from_fn(|| queue.pop_min())
            .map(|e| e.priority)
            .collect();
        assert_eq!(priorities, vec![3.0, 7.0, 8.0]);
    }

    #[test]
    fn test_peek_min_does_not_remove() {
        let mut queue = PriorityQueue::new();
        assert!(queue.peek_min().is_none());
        queue.add(1u32, 2.0);
        queue.add(2u32, 0.5);

        assert_eq!(queue.peek_min().map(|e| e.item), Some(2));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_infinite_priorities_sink() {
        let mut queue = PriorityQueue::new();
        queue.add("far", f64::INFINITY);
        queue.add("near", 0.0);
        assert!(queue.is_valid());

        assert_eq!(queue.pop_min().map(|e| e.item), Some("near"));
        assert_eq!(queue.pop_min().map(|e| e.item), Some("far"));
    }
}
