use std::fmt;
use std::iter::FusedIterator;

use tracing::debug;

use crate::error::{Error, Result};

/// A growable double-ended buffer over circular storage.
///
/// Logical position `p` lives in slot `(head + p) % capacity`. When a push
/// finds the buffer full, the storage doubles and the elements are laid out
/// again from slot 0 in logical order.
///
/// # Examples
///
/// ```
/// use classic_dsa::RingBuffer;
///
/// let mut ring = RingBuffer::new();
/// ring.push_back(2);
/// ring.push_back(3);
/// ring.push_front(1);
///
/// assert_eq!(ring.get(0), Some(&1));
/// assert_eq!(ring.capacity(), 4);
/// assert_eq!(ring.pop_back(), Some(3));
/// assert_eq!(ring.pop_front(), Some(1));
/// assert_eq!(ring.len(), 1);
/// ```
pub struct RingBuffer<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Create an empty buffer with room for a single element.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty buffer with room for `capacity` elements, at least one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of elements the buffer holds before it grows.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn slot_of(&self, pos: usize) -> usize {
        (self.head + pos) % self.capacity()
    }

    fn grow(&mut self) {
        let capacity = self.capacity() * 2;
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        for pos in 0..self.len {
            let slot = self.slot_of(pos);
            slots.push(self.slots[slot].take());
        }
        slots.resize_with(capacity, || None);
        debug!(from = self.capacity(), to = capacity, "ring buffer grows");
        self.slots = slots;
        self.head = 0;
    }

    /// Returns the element at logical position `pos`, or `None` if
    /// `pos >= len`.
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len {
            return None;
        }
        self.slots[self.slot_of(pos)].as_ref()
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.len {
            return None;
        }
        let slot = self.slot_of(pos);
        self.slots[slot].as_mut()
    }

    /// Replaces the element at logical position `pos` and returns the old
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::{Error, RingBuffer};
    ///
    /// let mut ring = RingBuffer::with_capacity(2);
    /// ring.push_back('a');
    /// assert_eq!(ring.set(0, 'b'), Ok('a'));
    /// assert_eq!(ring.set(1, 'c'), Err(Error::IndexOutOfRange { index: 1, len: 1 }));
    /// ```
    pub fn set(&mut self, pos: usize, value: T) -> Result<T> {
        let len = self.len;
        match self.get_mut(pos) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => {
                debug!(pos, len, "ring buffer position out of range");
                Err(Error::IndexOutOfRange { index: pos, len })
            }
        }
    }

    /// Adds an element at the back, doubling the storage when full.
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        let slot = self.slot_of(self.len);
        self.slots[slot] = Some(value);
        self.len += 1;
    }

    /// Adds an element at the front, doubling the storage when full.
    pub fn push_front(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the buffer is
    /// empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let slot = self.slot_of(self.len - 1);
        self.len -= 1;
        self.slots[slot].take()
    }

    /// Removes the first element and returns it, or `None` if the buffer is
    /// empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }

    /// Provides an iterator in logical order, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }
}

/// An iterator over the elements of a [`RingBuffer`], front to back.
pub struct Iter<'a, T: 'a> {
    ring: &'a RingBuffer<T>,
    front: usize,
    back: usize,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let ring: &'a RingBuffer<T> = self.ring;
        self.front += 1;
        ring.get(self.front - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let ring: &'a RingBuffer<T> = self.ring;
        self.back -= 1;
        ring.get(self.back)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for RingBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::RingBuffer;
    use crate::error::Error;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn ring_wraps_around_before_growing() {
        let mut ring = RingBuffer::with_capacity(3);
        ring.push_back(1);
        ring.push_back(2);
        ring.push_back(3);
        assert_eq!(ring.pop_front(), Some(1));
        ring.push_back(4);
        assert_eq!(ring.capacity(), 3);
        assert_eq!(format!("{:?}", ring), "[2, 3, 4]");

        ring.push_front(1);
        assert_eq!(ring.capacity(), 6);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(ring.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
    }

    #[test]
    fn ring_empty_and_out_of_range() {
        let mut ring = RingBuffer::<u8>::with_capacity(0);
        assert_eq!(ring.capacity(), 1);
        assert!(ring.is_empty());
        assert_eq!(ring.pop_back(), None);
        assert_eq!(ring.pop_front(), None);
        assert_eq!(ring.get(0), None);
        assert_eq!(ring.set(0, 1), Err(Error::IndexOutOfRange { index: 0, len: 0 }));

        ring.push_front(9);
        assert_eq!(ring.set(0, 8), Ok(9));
        *ring.get_mut(0).unwrap() += 1;
        assert_eq!(ring.get(0), Some(&9));
        assert_eq!(ring.get(1), None);
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushBack(i32),
        PushFront(i32),
        PopBack,
        PopFront,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::PushBack),
            any::<i32>().prop_map(Op::PushFront),
            Just(Op::PopBack),
            Just(Op::PopFront),
        ]
    }

    proptest! {
        #[test]
        fn ring_matches_vec_deque(ops in prop::collection::vec(op(), 0..96)) {
            let mut ring = RingBuffer::new();
            let mut model = VecDeque::new();
            for op in ops {
                match op {
                    Op::PushBack(v) => {
                        ring.push_back(v);
                        model.push_back(v);
                    }
                    Op::PushFront(v) => {
                        ring.push_front(v);
                        model.push_front(v);
                    }
                    Op::PopBack => prop_assert_eq!(ring.pop_back(), model.pop_back()),
                    Op::PopFront => prop_assert_eq!(ring.pop_front(), model.pop_front()),
                }
                prop_assert_eq!(ring.len(), model.len());
                prop_assert!(ring.len() <= ring.capacity());
                prop_assert!(ring.iter().eq(model.iter()));
            }
        }
    }
}
