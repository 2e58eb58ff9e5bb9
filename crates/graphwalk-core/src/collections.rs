//! Size-bounded FIFO queue and LIFO stack
//!
//! Both containers accept an optional capacity. Insertion into a full
//! container is rejected with `GraphError::CapacityExceeded`; removal from an
//! empty container yields `None`.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};

/// FIFO queue with an optional maximum size
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    max_size: Option<usize>,
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> BoundedQueue<T> {
    pub fn unbounded() -> Self {
        Self {
            items: VecDeque::new(),
            max_size: None,
        }
    }

    pub fn with_capacity_limit(max_size: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    pub fn has_room(&self) -> bool {
        self.max_size.is_none_or(|max| self.items.len() < max)
    }

    /// Add to the back of the queue
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if let Some(max) = self.max_size {
            if self.items.len() >= max {
                return Err(GraphError::capacity_exceeded("queue", max));
            }
        }
        self.items.push_back(value);
        Ok(())
    }

    /// Remove from the front of the queue
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn max_size(&self) -> Option<usize> {
        self.max_size
    }
}

/// LIFO stack with an optional maximum size
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    max_size: Option<usize>,
}

impl<T> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> BoundedStack<T> {
    pub fn unbounded() -> Self {
        Self {
            items: Vec::new(),
            max_size: None,
        }
    }

    pub fn with_capacity_limit(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size),
            max_size: Some(max_size),
        }
    }

    pub fn has_room(&self) -> bool {
        self.max_size.is_none_or(|max| self.items.len() < max)
    }

    pub fn push(&mut self, value: T) -> Result<()> {
        if let Some(max) = self.max_size {
            if self.items.len() >= max {
                return Err(GraphError::capacity_exceeded("stack", max));
            }
        }
        self.items.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top of the stack without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
