//! Fixed-capacity FIFO ring buffer for autokey feedback.

use crate::error::CipherError;

/// FIFO queue that never grows past the capacity given at construction.
#[derive(Debug, Clone)]
pub struct RingBuffer<T: Copy> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T: Copy> RingBuffer<T> {
    /// Creates an empty buffer holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        RingBuffer {
            slots: vec![None; capacity],
            head: 0,
            len: 0,
        }
    }

    /// Fixed number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Items currently queued.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is taken.
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends `item` at the tail.
    ///
    /// # Errors
    /// [`CipherError::FeedbackOverflow`] if the buffer is full.
    pub fn push(&mut self, item: T) -> Result<(), CipherError> {
        if self.is_full() {
            return Err(CipherError::FeedbackOverflow {
                capacity: self.capacity(),
            });
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest item.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// Drops every queued item.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut ring = RingBuffer::with_capacity(3);
        ring.push('a').unwrap();
        ring.push('b').unwrap();
        assert_eq!(ring.pop(), Some('a'));
        ring.push('c').unwrap();
        ring.push('d').unwrap();
        assert_eq!(ring.pop(), Some('b'));
        assert_eq!(ring.pop(), Some('c'));
        assert_eq!(ring.pop(), Some('d'));
        assert_eq!(ring.pop(), None);
    }

    #[test]
    fn test_overflow() {
        let mut ring = RingBuffer::with_capacity(2);
        ring.push(1u8).unwrap();
        ring.push(2u8).unwrap();
        assert!(ring.is_full());
        assert_eq!(ring.push(3u8), Err(CipherError::FeedbackOverflow { capacity: 2 }));
    }

    #[test]
    fn test_zero_capacity() {
        let mut ring: RingBuffer<char> = RingBuffer::with_capacity(0);
        assert!(ring.push('x').is_err());
        assert_eq!(ring.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut ring = RingBuffer::with_capacity(2);
        ring.push('x').unwrap();
        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.pop(), None);
    }
}
