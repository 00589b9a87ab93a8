use alloc::{boxed::Box, vec::Vec};
use core::fmt;

use log::debug;

use crate::error::Full;

/// A fixed-capacity FIFO queue over a circular buffer.
///
/// `head` indexes the oldest element and `tail` the slot the next `offer`
/// writes; both wrap modulo the capacity. A full queue rejects new elements
/// instead of growing.
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Appends `value` at the back.
    ///
    /// Hands the value back inside [`Full`] when the queue is at capacity.
    pub fn offer(&mut self, value: T) -> Result<(), Full<T>> {
        if self.is_full() {
            debug!("offer rejected, queue at capacity {}", self.capacity());
            return Err(Full(value));
        }
        self.slots[self.tail] = Some(value);
        self.tail = self.advance(self.tail);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn poll(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.advance(self.head);
        self.len -= 1;
        value
    }

    /// Returns the front element without removing it.
    pub fn peek(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next `offer` would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Fixed number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Forgets every element by resetting the indices.
    ///
    /// Stale slots are dropped when a later `offer` overwrites them or when
    /// the queue itself is dropped.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.slots.len();
        (0..self.len)
            .filter_map(move |offset| self.slots[(self.head + offset) % capacity].as_ref())
    }

    /// Snapshot of the queued elements, front first.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the queued elements, front first, into `out`.
    ///
    /// Stops at whichever runs out first and returns how many were written.
    pub fn copy_into(&self, out: &mut [T]) -> usize
    where
        T: Clone,
    {
        let mut written = 0;
        for (slot, item) in out.iter_mut().zip(self.iter()) {
            *slot = item.clone();
            written += 1;
        }
        written
    }
}

/// Renders `"<len>:"` followed by `" <element>"` for each element.
impl<T: fmt::Display> fmt::Display for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.len)?;
        for item in self.iter() {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
