//! Array-backed binary heaps
//!
//! One heap type serves every ordering:
//! - `MinHeap`: smallest element at the root
//! - `MaxHeap`: largest element at the root
//! - `Heap<T, FnOrder<F>>`: caller-supplied comparison
//! - `PriorityQueue`: payloads ordered by an attached numeric priority
//!
//! Storage is 0-based: `parent(i) = (i - 1) / 2`, `left(i) = 2i + 1`,
//! `right(i) = 2i + 2`.

pub mod priority;

pub use priority::{ByPriority, PriorityQueue, Prioritized};

/// Ordering capability a heap is parameterized by
pub trait HeapOrder<T> {
    /// Returns true when `a` belongs strictly closer to the root than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

/// Natural ascending order (min-heap)
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

impl<T: PartialOrd> HeapOrder<T> for MinOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Natural descending order (max-heap)
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl<T: PartialOrd> HeapOrder<T> for MaxOrder {
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ordering backed by a closure returning true when the first argument
/// should sit above the second
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<T, F> HeapOrder<T> for FnOrder<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

pub type MinHeap<T> = Heap<T, MinOrder>;
pub type MaxHeap<T> = Heap<T, MaxOrder>;

#[inline]
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline]
pub(crate) fn left(index: usize) -> usize {
    index * 2 + 1
}

#[inline]
pub(crate) fn right(index: usize) -> usize {
    index * 2 + 2
}

/// Binary heap over a contiguous vector
#[derive(Debug, Clone)]
pub struct Heap<T, O = MinOrder> {
    items: Vec<T>,
    order: O,
}

impl<T, O: HeapOrder<T> + Default> Heap<T, O> {
    pub fn new() -> Self {
        Self::with_order(O::default())
    }
}

impl<T, O: HeapOrder<T> + Default> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O: HeapOrder<T>> Heap<T, O> {
    pub fn with_order(order: O) -> Self {
        Self {
            items: Vec::new(),
            order,
        }
    }

    /// Insert a value and bubble it up to restore the heap invariant
    pub fn add(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the root, or `None` when the heap is empty
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let popped = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        popped
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate in backing-array order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Drain the heap root-first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Check that no child orders before its parent
    pub fn is_valid(&self) -> bool {
        (1..self.items.len())
            .all(|i| !self.order.precedes(&self.items[i], &self.items[parent(i)]))
    }

    fn sift_up(&mut self, mut current: usize) {
        while current > 0 {
            let parent_index = parent(current);
            if !self
                .order
                .precedes(&self.items[current], &self.items[parent_index])
            {
                break;
            }
            self.items.swap(current, parent_index);
            current = parent_index;
        }
    }

    fn sift_down(&mut self, mut current: usize) {
        let size = self.items.len();
        loop {
            let left_index = left(current);
            let right_index = right(current);

            // A right child only exists when the left one does
            if left_index >= size {
                break;
            }

            let preferred = if right_index < size
                && !self
                    .order
                    .precedes(&self.items[left_index], &self.items[right_index])
            {
                right_index
            } else {
                left_index
            };

            if !self
                .order
                .precedes(&self.items[preferred], &self.items[current])
            {
                break;
            }
            self.items.swap(current, preferred);
            current = preferred;
        }
    }
}

impl<T: PartialOrd> Heap<T, MinOrder> {
    pub fn pop_min(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T: PartialOrd> Heap<T, MaxOrder> {
    pub fn pop_max(&mut self) -> Option<T> {
        self.pop()
    }
}

impl<T, O: HeapOrder<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests;
