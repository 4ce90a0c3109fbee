use std::fmt;
use std::iter::FusedIterator;

struct Node<T> {
    below: Option<Box<Node<T>>>,
    element: T,
}

/// A last-in, first-out stack over a singly linked chain of boxed nodes.
///
/// # Examples
///
/// ```
/// use classic_dsa::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// stack.push(3);
///
/// assert_eq!(stack.peek(), Some(&3));
/// assert_eq!(stack.pop(), Some(3));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.len(), 1);
/// ```
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    /// Create an empty `Stack`.
    #[inline]
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Push an element on top of the stack.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, value: T) {
        let below = self.top.take();
        self.top = Some(Box::new(Node {
            below,
            element: value,
        }));
        self.len += 1;
    }

    /// Remove the top element and return it, or `None` if the stack is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Option<T> {
        let top = self.top.take()?;
        let Node { below, element } = *top;
        self.top = below;
        self.len -= 1;
        Some(element)
    }

    /// Provides a reference to the top element, or `None` if the stack is
    /// empty.
    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.element)
    }

    /// Provides a mutable reference to the top element, or `None` if the
    /// stack is empty.
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.top.as_mut().map(|node| &mut node.element)
    }

    /// Removes all elements, from top to bottom.
    ///
    /// Nodes are unlinked one at a time, so a deep stack never drops a long
    /// chain of boxes recursively.
    pub fn clear(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.below.take();
        }
        self.len = 0;
    }

    /// Provides an iterator from top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::Stack;
    ///
    /// let stack = Stack::from_iter([1, 2, 3]);
    /// assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
            len: self.len,
        }
    }
}

/// An iterator over the elements of a [`Stack`], from top to bottom.
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
    len: usize,
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.below.as_deref();
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pushes the elements in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;
    use proptest::prelude::*;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);

        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(format!("{:?}", stack), "[3, 2, 1]");

        *stack.peek_mut().unwrap() *= 10;
        assert_eq!(stack.pop(), Some(30));
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn deep_stack_drops_without_overflow() {
        let mut stack = Stack::new();
        stack.extend(0..1_000_000);
        assert_eq!(stack.len(), 1_000_000);
        drop(stack);
    }

    proptest! {
        #[test]
        fn stack_reverses_pushes(values in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut stack = Stack::from_iter(values.iter().copied());
            prop_assert!(stack.iter().eq(values.iter().rev()));
            let popped: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
            let reversed: Vec<_> = values.into_iter().rev().collect();
            prop_assert_eq!(popped, reversed);
        }
    }
}
