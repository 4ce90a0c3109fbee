use std::fmt::{self, Debug, Display, Formatter};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::list::arena::{Arena, Node, NodeId};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter};

mod arena;
pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list whose nodes live in an arena owned by
/// the list. It allows inserting and removing elements at either end in
/// constant time. In compromise, accessing or mutating elements at any
/// position take *O*(*n*) time.
///
/// The `List` contains:
/// - an arena of node slots, each node holding an element and the handles of
///   its previous and next nodes;
/// - the handles `head` and `tail` of the first and last nodes, both absent
///   when the list is empty;
/// - a length field `len`.
///
/// # Naming Conventions
///
/// - `start..end`: a half-open range of positions, where `end` may be the
///   end position `len` which holds no element;
/// - `prev`/`next`: the neighbouring nodes, where `None` stands for the
///   boundary of the list.
pub struct List<T> {
    nodes: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    /// the length of the list
    len: usize,
}

// private methods
impl<T> List<T> {
    pub(crate) fn front_node(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn back_node(&self) -> Option<NodeId> {
        self.tail
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }

    /// Link `prev` and `next` as neighbours.
    ///
    /// A `None` side stands for the boundary of the list: `connect(None, next)`
    /// makes `next` the head, and `connect(prev, None)` makes `prev` the tail.
    fn connect(&mut self, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
    }

    /// Find the node at position `index` by walking forward from the head.
    ///
    /// Returns `None` if `index >= len`.
    pub(crate) fn node_at(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = self.nodes[current?].next;
        }
        current
    }

    /// Attach a new node holding `element` between `prev` and `next`, which
    /// must be adjacent (checked only in `#[cfg(debug_assertions)]`).
    pub(crate) fn attach_node(
        &mut self,
        prev: Option<NodeId>,
        next: Option<NodeId>,
        element: T,
    ) -> NodeId {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        let node = self.nodes.insert(Node {
            prev,
            next,
            element,
        });
        self.connect(prev, Some(node));
        self.connect(Some(node), next);
        self.len += 1;
        debug_assert_eq!(self.nodes.occupied(), self.len);
        #[cfg(debug_assertions)]
        {
            self.assert_adjacent(prev, Some(node));
            self.assert_adjacent(Some(node), next);
        }
        node
    }

    /// Detach the node `node` from the list and return its element.
    ///
    /// The neighbours of the node are linked to each other, so detaching the
    /// only node, the head, the tail or an interior node are all the same
    /// operation.
    pub(crate) fn detach_node(&mut self, node: NodeId) -> T {
        let Node {
            prev,
            next,
            element,
        } = self.nodes.remove(node);
        self.connect(prev, next);
        self.len -= 1;
        debug_assert_eq!(self.nodes.occupied(), self.len);
        trace!(len = self.len, "detached list node");
        element
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Option<NodeId>, next: Option<NodeId>) {
        let after_prev = match prev {
            Some(prev) => self.nodes[prev].next,
            None => self.head,
        };
        let before_next = match next {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        assert_eq!(after_prev, next);
        assert_eq!(before_next, prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use classic_dsa::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Create an empty `List` with room for `capacity` nodes before its
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.prepend("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.prepend(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.append(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, dropping them from head to tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.prepend(2);
    /// list.prepend(1);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&1));
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn clear(&mut self) {
        while self.remove_start().is_some() {}
        self.nodes.clear();
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.cursor_start().current()
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.prepend(1);
    /// if let Some(x) = list.front_mut() {
    ///     *x = 5;
    /// }
    /// assert_eq!(list.front(), Some(&5));
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.node_mut(head).element)
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.cursor_end().previous()
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let tail = self.tail?;
        Some(&mut self.node_mut(tail).element)
    }

    /// Returns a reference to the element at `index`, or `None` if
    /// `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn get(&self, index: usize) -> Option<&T> {
        let node = self.node_at(index)?;
        Some(&self.node(node).element)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let node = self.node_at(index)?;
        Some(&mut self.node_mut(node).element)
    }

    /// Returns the element at `index`.
    ///
    /// This is the checked form of [`List::get`]: an index outside `0..len`
    /// is reported as [`Error::IndexOutOfRange`].
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::{Error, List};
    ///
    /// let list = List::from([10, 20, 30]);
    /// assert_eq!(list.get_value_at(1), Ok(&20));
    /// assert_eq!(
    ///     list.get_value_at(3),
    ///     Err(Error::IndexOutOfRange { index: 3, len: 3 })
    /// );
    /// ```
    pub fn get_value_at(&self, index: usize) -> Result<&T> {
        self.get(index).ok_or_else(|| {
            debug!(index, len = self.len, "list index out of range");
            Error::IndexOutOfRange {
                index,
                len: self.len,
            }
        })
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.prepend(2);
    /// assert_eq!(list.front().unwrap(), &2);
    ///
    /// list.prepend(1);
    /// assert_eq!(list.front().unwrap(), &1);
    /// ```
    pub fn prepend(&mut self, value: T) {
        self.attach_node(None, self.head, value);
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.back().unwrap(), &3);
    /// ```
    pub fn append(&mut self, value: T) {
        self.attach_node(self.tail, None, value);
    }

    /// Inserts an element so that it ends up at position `index`.
    ///
    /// `index == 0` is the same as [`List::prepend`], and any `index >= len`
    /// is the same as [`List::append`]. Otherwise the new element is spliced
    /// in front of the element currently at `index`. The length grows by
    /// exactly one in every case.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.insert_at(2, 4);
    /// list.insert_at(100, 5);
    /// list.insert_at(0, 0);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 4, 3, 5]);
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) {
        if index == 0 {
            trace!(index, "insert_at delegates to prepend");
            return self.prepend(value);
        }
        match self.node_at(index) {
            None => {
                trace!(index, len = self.len, "insert_at delegates to append");
                self.append(value);
            }
            Some(next) => {
                trace!(index, "insert_at splices before node");
                let prev = self.node(next).prev;
                self.attach_node(prev, Some(next), value);
            }
        }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.remove_start(), None);
    ///
    /// list.prepend(1);
    /// list.prepend(3);
    /// assert_eq!(list.remove_start(), Some(3));
    /// assert_eq!(list.remove_start(), Some(1));
    /// assert_eq!(list.remove_start(), None);
    /// ```
    pub fn remove_start(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.detach_node(head))
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.remove_end(), None);
    /// list.append(1);
    /// list.append(3);
    /// assert_eq!(list.remove_end(), Some(3));
    /// ```
    pub fn remove_end(&mut self) -> Option<T> {
        let tail = self.tail?;
        Some(self.detach_node(tail))
    }

    /// Removes the element at `index` and returns it, or `None` if
    /// `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([3, 2, 1]);
    ///
    /// assert_eq!(list.remove_at(1), Some(2));
    /// assert_eq!(list.remove_at(5), None);
    /// assert_eq!(list.remove_at(0), Some(3));
    /// assert_eq!(list.remove_at(0), Some(1));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let node = self.node_at(index)?;
        Some(self.detach_node(node))
    }

    /// Removes the first element (from head to tail) equal to `value` and
    /// returns it. Later duplicates are left in place.
    ///
    /// Fails with [`Error::Empty`] on an empty list, and with
    /// [`Error::NotFound`] when no element is equal to `value`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::{Error, List};
    ///
    /// let mut list = List::from([1, 2, 1, 3]);
    ///
    /// assert_eq!(list.remove_value(&1), Ok(1));
    /// assert_eq!(list.remove_value(&7), Err(Error::NotFound));
    /// assert_eq!(Vec::from_iter(list), vec![2, 1, 3]);
    ///
    /// assert_eq!(List::new().remove_value(&1), Err(Error::Empty));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(Error::Empty);
        }
        let mut cursor = self.cursor_start_mut();
        while cursor.current().ok_or(Error::NotFound)? != value {
            let _ = cursor.move_next();
        }
        cursor.remove().ok_or(Error::NotFound)
    }

    /// Provides a cursor at the node with given index.
    ///
    /// By convention, the cursor is at the end position if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn cursor(&self, at: usize) -> Cursor<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start();
        let _ = cursor.seek_to(at);
        cursor
    }

    /// Provides a cursor at the first node.
    ///
    /// The cursor is at the end position if the list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.front_node(), 0)
    }

    /// Provides a cursor at the end position, right after the last node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// let cursor = list.cursor_end();
    /// assert_eq!(cursor.current(), None);
    /// assert_eq!(cursor.previous(), Some(&3));
    /// ```
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.len)
    }

    /// Provides a cursor with editing operations at the node with given index.
    ///
    /// By convention, the cursor is at the end position if `at == len`.
    ///
    /// # Panics
    ///
    /// Panics if `at > len`
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// assert_eq!(list.cursor_mut(3).current_mut(), None);
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> CursorMut<'_, T> {
        assert!(at <= self.len, "Cannot create cursor at a nonexistent index");
        let mut cursor = self.cursor_start_mut();
        let _ = cursor.seek_to(at);
        cursor
    }

    /// Provides a cursor with editing operations at the first node.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.front_node();
        CursorMut::new(self, head, 0)
    }

    /// Provides a cursor with editing operations at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// let mut cursor = list.cursor_end_mut();
    /// cursor.insert(3);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3]);
    /// ```
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, None, len)
    }

    /// Provides a double-ended iterator from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.append(0);
    /// list.append(1);
    /// list.append(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next_back(), Some(&2));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

/// Renders the list as `HEAD <-> v1 <-> v2 <-> ... <-> NULL`.
///
/// # Examples
///
/// ```
/// use classic_dsa::List;
///
/// let list = List::from([5, 10, 15]);
/// assert_eq!(list.to_string(), "HEAD <-> 5 <-> 10 <-> 15 <-> NULL");
/// assert_eq!(List::<i32>::new().to_string(), "HEAD <-> NULL");
/// ```
impl<T: Display> Display for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("HEAD <-> ")?;
        for element in self {
            write!(f, "{} <-> ", element)?;
        }
        f.write_str("NULL")
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
impl<T> List<T> {
    /// Walk the links and check every structural invariant of the list.
    pub(crate) fn assert_well_formed(&self) {
        assert_eq!(self.head.is_none(), self.len == 0);
        assert_eq!(self.tail.is_none(), self.len == 0);
        assert_eq!(self.nodes.occupied(), self.len);

        let mut prev = None;
        let mut current = self.head;
        let mut count = 0;
        while let Some(node) = current {
            assert_eq!(self.nodes[node].prev, prev, "broken back link");
            count += 1;
            assert!(count <= self.len, "forward walk is longer than len");
            prev = current;
            current = self.nodes[node].next;
        }
        assert_eq!(count, self.len);
        assert_eq!(prev, self.tail);
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::List;
    use proptest::prelude::*;
    use std::cell::RefCell;
    use std::fmt::Debug;

    fn list_eq<T, I>(list: &List<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        list.assert_well_formed();
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        list.append(1);
        assert!(!list.is_empty());
        assert_eq!(list.remove_end(), Some(1));
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        // slots are filled in the order 3, 2, 1, but the list reads 1, 2, 3
        list.prepend(DropChecker::new(3, &dropped));
        list.prepend(DropChecker::new(2, &dropped));
        list.prepend(DropChecker::new(1, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_remove_ends() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.remove_start(), None);
        assert_eq!(list.remove_end(), None);
        assert_eq!(list.remove_at(0), None);
        assert_eq!(list.remove_value(&1), Err(Error::Empty));

        list.append(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.remove_start(), Some(1));
        assert_eq!(list.remove_end(), None);
        assert!(list.is_empty());
        list.assert_well_formed();

        list.prepend(1);
        list.prepend(2);
        list.append(3);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.remove_start(), Some(2));
        assert_eq!(list.remove_end(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.remove_start(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = List::from_iter(0..10);
        list.insert_at(5, 10);
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove_at(10), Some(9));
        assert_eq!(list.back(), Some(&8));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert_at(0, 11);
        assert_eq!(list.front(), Some(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove_at(0), Some(11));
        assert_eq!(list.front(), Some(&0));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert_at(10, 12);
        assert_eq!(list.back(), Some(&12));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));

        list.insert_at(usize::MAX, 13);
        assert_eq!(list.back(), Some(&13));
        assert_eq!(list.len(), 12);
    }

    #[test]
    fn list_insert_at_counts_once() {
        let mut list = List::new();
        list.insert_at(0, 'a');
        assert_eq!(list.len(), 1);
        list.insert_at(7, 'c');
        assert_eq!(list.len(), 2);
        list.insert_at(1, 'b');
        assert_eq!(list.len(), 3);
        list_eq(&list, ['a', 'b', 'c']);
    }

    #[test]
    fn list_insert_at_traces_each_branch() {
        use std::io;
        use std::sync::{Arc, Mutex};

        struct Sink(Arc<Mutex<Vec<u8>>>);

        impl io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let captured = Arc::new(Mutex::new(Vec::new()));
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || Sink(writer.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let mut list = List::from([1, 3]);
            list.insert_at(1, 2);
            list.insert_at(0, 0);
            list.insert_at(9, 4);
            list_eq(&list, [0, 1, 2, 3, 4]);
        });

        let output = String::from_utf8(captured.lock().unwrap().clone()).unwrap();
        assert!(output.contains("insert_at splices before node"));
        assert!(output.contains("insert_at delegates to prepend"));
        assert!(output.contains("insert_at delegates to append"));
    }

    #[test]
    fn list_walkthrough() {
        let mut list = List::new();
        list.append(10);
        list.append(20);
        list.append(30);
        list.prepend(5);
        list.insert_at(2, 15);
        list_eq(&list, [5, 10, 15, 20, 30]);
        assert_eq!(list.get_value_at(3), Ok(&20));
        assert_eq!(list.to_string(), "HEAD <-> 5 <-> 10 <-> 15 <-> 20 <-> 30 <-> NULL");

        assert_eq!(list.remove_start(), Some(5));
        assert_eq!(list.remove_end(), Some(30));
        assert_eq!(list.remove_at(1), Some(15));
        assert_eq!(list.remove_value(&15), Err(Error::NotFound));
        list_eq(&list, [10, 20]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_get_value_at_out_of_range() {
        let list = List::from(["a", "b"]);
        assert_eq!(list.get_value_at(0), Ok(&"a"));
        assert_eq!(list.get_value_at(1), Ok(&"b"));
        assert_eq!(
            list.get_value_at(2),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            List::<u8>::new().get_value_at(0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn list_remove_value_first_occurrence_only() {
        let mut list = List::from([4, 7, 4, 9, 4]);
        assert_eq!(list.remove_value(&4), Ok(4));
        list_eq(&list, [7, 4, 9, 4]);
        assert_eq!(list.remove_value(&4), Ok(4));
        list_eq(&list, [7, 9, 4]);
        assert_eq!(list.remove_value(&4), Ok(4));
        assert_eq!(list.remove_value(&4), Err(Error::NotFound));
        list_eq(&list, [7, 9]);
    }

    #[test]
    fn list_reuses_slots() {
        let mut list = List::with_capacity(4);
        for round in 0..100 {
            list.append(round);
            list.prepend(round);
            assert_eq!(list.remove_end(), Some(round));
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.nodes.occupied(), 100);
        list.clear();
        assert!(list.is_empty());
        list.assert_well_formed();
    }

    #[test]
    fn list_get_and_mutate() {
        let mut list = List::from([1, 2, 3]);
        *list.get_mut(1).unwrap() = 20;
        *list.front_mut().unwrap() = 10;
        *list.back_mut().unwrap() = 30;
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(list.get(3), None);
        list_eq(&list, [10, 20, 30]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Prepend(i8),
        Append(i8),
        InsertAt(usize, i8),
        RemoveStart,
        RemoveEnd,
        RemoveAt(usize),
        RemoveValue(i8),
    }

    fn op() -> impl Strategy<Value = Op> {
        // a narrow value range so that `RemoveValue` hits duplicates
        let value = -4i8..4;
        prop_oneof![
            value.clone().prop_map(Op::Prepend),
            value.clone().prop_map(Op::Append),
            (0usize..12, value.clone()).prop_map(|(i, v)| Op::InsertAt(i, v)),
            Just(Op::RemoveStart),
            Just(Op::RemoveEnd),
            (0usize..12).prop_map(Op::RemoveAt),
            value.prop_map(Op::RemoveValue),
        ]
    }

    proptest! {
        #[test]
        fn list_matches_vec_model(ops in prop::collection::vec(op(), 0..64)) {
            let mut list = List::new();
            let mut model = Vec::new();
            for op in ops {
                match op {
                    Op::Prepend(v) => {
                        list.prepend(v);
                        model.insert(0, v);
                    }
                    Op::Append(v) => {
                        list.append(v);
                        model.push(v);
                    }
                    Op::InsertAt(i, v) => {
                        list.insert_at(i, v);
                        model.insert(i.min(model.len()), v);
                    }
                    Op::RemoveStart => {
                        let expected = (!model.is_empty()).then(|| model.remove(0));
                        prop_assert_eq!(list.remove_start(), expected);
                    }
                    Op::RemoveEnd => prop_assert_eq!(list.remove_end(), model.pop()),
                    Op::RemoveAt(i) => {
                        let expected = (i < model.len()).then(|| model.remove(i));
                        prop_assert_eq!(list.remove_at(i), expected);
                    }
                    Op::RemoveValue(v) => {
                        let expected = if model.is_empty() {
                            Err(Error::Empty)
                        } else {
                            model
                                .iter()
                                .position(|x| *x == v)
                                .map(|i| model.remove(i))
                                .ok_or(Error::NotFound)
                        };
                        prop_assert_eq!(list.remove_value(&v), expected);
                    }
                }
                list.assert_well_formed();
                prop_assert_eq!(list.len(), model.len());
                prop_assert!(list.iter().eq(model.iter()));
                prop_assert!(list.iter().rev().eq(model.iter().rev()));
            }
        }

        #[test]
        fn list_insert_at_boundaries(values in prop::collection::vec(any::<i32>(), 0..16), v: i32, extra in 0usize..8) {
            let mut by_insert = List::from_iter(values.iter().copied());
            let mut by_prepend = by_insert.clone();
            by_insert.insert_at(0, v);
            by_prepend.prepend(v);
            prop_assert_eq!(&by_insert, &by_prepend);

            let mut by_insert = List::from_iter(values.iter().copied());
            let mut by_append = by_insert.clone();
            by_insert.insert_at(values.len() + extra, v);
            by_append.append(v);
            prop_assert_eq!(&by_insert, &by_append);
        }

        #[test]
        fn list_remove_at_shifts_left(values in prop::collection::vec(any::<i32>(), 1..16), seed: prop::sample::Index) {
            let i = seed.index(values.len());
            let mut list = List::from_iter(values.iter().copied());
            prop_assert_eq!(list.remove_at(i), Some(values[i]));
            if i < list.len() {
                prop_assert_eq!(list.get_value_at(i), Ok(&values[i + 1]));
            }
        }

        #[test]
        fn list_drains_in_order(values in prop::collection::vec(any::<i32>(), 0..32)) {
            let mut list = List::from_iter(values.iter().copied());
            let forward: Vec<_> = std::iter::from_fn(|| list.remove_start()).collect();
            prop_assert_eq!(&forward, &values);

            let mut list = List::from_iter(values.iter().copied());
            let backward: Vec<_> = std::iter::from_fn(|| list.remove_end()).collect();
            let reversed: Vec<_> = values.iter().rev().copied().collect();
            prop_assert_eq!(backward, reversed);
        }
    }
}
