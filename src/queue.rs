use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

struct Node<T> {
    next: Option<NonNull<Node<T>>>,
    element: T,
}

impl<T> Node<T> {
    /// Allocate a node on heap with no successor, and leak it as a pointer.
    fn new_detached(element: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self {
            next: None,
            element,
        })))
    }
}

/// A first-in, first-out queue over a singly linked chain of heap nodes.
///
/// Elements are enqueued at the tail and dequeued from the head, both in
/// constant time.
///
/// # Examples
///
/// ```
/// use classic_dsa::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(5);
/// queue.enqueue(10);
/// queue.enqueue(15);
///
/// assert_eq!(queue.peek(), Some(&5));
/// assert_eq!(queue.dequeue(), Some(5));
/// assert_eq!(queue.dequeue(), Some(10));
/// assert_eq!(queue.len(), 1);
/// ```
pub struct Queue<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Queue<T> {
    /// Create an empty `Queue`.
    #[inline]
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add an element at the tail of the queue.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn enqueue(&mut self, value: T) {
        let node = Node::new_detached(value);
        match self.tail {
            // SAFETY: `tail` is a live node owned by this queue, and no other
            // reference to it exists while `self` is borrowed mutably.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Remove the element at the head of the queue and return it, or `None`
    /// if the queue is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert_eq!(queue.dequeue(), None);
    ///
    /// queue.enqueue('a');
    /// assert_eq!(queue.dequeue(), Some('a'));
    /// assert!(queue.is_empty());
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        // SAFETY: `head` was leaked from a `Box` in `enqueue` and is unlinked
        // from the queue right here, so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(node.element)
    }

    /// Provides a reference to the element at the head, or `None` if the
    /// queue is empty.
    pub fn peek(&self) -> Option<&T> {
        // SAFETY: `head` is a live node owned by this queue.
        self.head.map(|head| unsafe { &(*head.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the head, or `None` if
    /// the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::Queue;
    ///
    /// let mut queue = Queue::from_iter([1, 2]);
    /// if let Some(x) = queue.peek_mut() {
    ///     *x = 7;
    /// }
    /// assert_eq!(queue.dequeue(), Some(7));
    /// ```
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` is a live node owned by this queue, and `&mut self`
        // guarantees the returned reference is unique.
        self.head.map(|head| unsafe { &mut (*head.as_ptr()).element })
    }

    /// Removes all elements from the queue, dropping them from head to tail.
    pub fn clear(&mut self) {
        while self.dequeue().is_some() {}
    }

    /// Provides an iterator from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::Queue;
    ///
    /// let queue = Queue::from_iter([1, 2, 3]);
    /// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

/// An iterator over the elements of a [`Queue`], from head to tail.
pub struct Iter<'a, T: 'a> {
    next: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        // SAFETY: the queue is borrowed immutably for `'a`, so every node
        // reachable from its head stays alive and unchanged.
        let current = unsafe { &*current.as_ptr() };
        self.next = current.next;
        self.len -= 1;
        Some(&current.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.enqueue(item));
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for Queue<T> {}

unsafe impl<T: Sync> Sync for Queue<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}

unsafe impl<T: Sync> Sync for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::Queue;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);

        queue.enqueue(5);
        queue.enqueue(10);
        queue.enqueue(15);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&5));
        assert_eq!(format!("{:?}", queue), "[5, 10, 15]");

        assert_eq!(queue.dequeue(), Some(5));
        assert_eq!(queue.dequeue(), Some(10));
        assert_eq!(queue.dequeue(), Some(15));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn queue_reusable_after_draining() {
        let mut queue = Queue::new();
        queue.enqueue("a");
        assert_eq!(queue.dequeue(), Some("a"));
        assert!(queue.tail.is_none());

        queue.enqueue("b");
        queue.enqueue("c");
        assert_eq!(queue.peek(), Some(&"b"));
        assert_eq!(queue.iter().len(), 2);
        queue.clear();
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn queue_drop_releases_every_node() {
        struct Tracked<'a>(u32, &'a RefCell<Vec<u32>>);
        impl Drop for Tracked<'_> {
            fn drop(&mut self) {
                self.1.borrow_mut().push(self.0);
            }
        }
        let dropped = RefCell::new(Vec::new());
        let mut queue = Queue::new();
        for i in 0..4 {
            queue.enqueue(Tracked(i, &dropped));
        }
        drop(queue.dequeue());
        drop(queue);
        assert_eq!(dropped.into_inner(), vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn queue_preserves_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut queue = Queue::from_iter(values.iter().copied());
            prop_assert_eq!(queue.len(), values.len());
            prop_assert!(queue.iter().eq(values.iter()));
            let drained: Vec<_> = std::iter::from_fn(|| queue.dequeue()).collect();
            prop_assert_eq!(drained, values);
        }
    }
}
