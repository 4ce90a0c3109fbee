use crate::list::arena::NodeId;
use crate::list::List;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::ptr;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the end position right after the
/// last node.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end position of
/// the list is denoted by `$`).
/// ```
/// use classic_dsa::List;
///
/// // Create a list: [ A B C D $]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D $] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D $] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|$] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor backward: [ A B C|D $] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: Option<NodeId>,
    list: &'a List<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            list: self.list,
        }
    }
}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list and have the same positions
/// are considered equal.
///
/// # Examples
/// ```
/// use classic_dsa::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let mut cursor2 = cursor1.clone();
/// // The same list, and the same position.
/// assert_eq!(cursor1, cursor2);
///
/// cursor2.move_next().unwrap();
/// // The same list, but different positions.
/// assert_ne!(cursor1, cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_start();
/// // Different list, same position.
/// assert_ne!(cursor1, cursor3);
/// ```
impl<'a, T: 'a> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_list_with(other) && self.index == other.index
    }
}

impl<'a, T: 'a> Eq for Cursor<'a, T> {}

/// Compare cursors by its position.
///
/// Only cursors belong to the same list can compare, so it is `PartialOrd`
/// but not `Ord`.
///
/// # Examples
/// ```
/// use classic_dsa::List;
///
/// let list = List::from([1, 2, 3]);
/// let cursor1 = list.cursor_start();
/// let cursor2 = list.cursor(2);
/// // They belong to the same list, can compare.
/// assert!(cursor1 < cursor2);
///
/// let another_list = list.clone();
/// let cursor3 = another_list.cursor_end();
/// // They belong to different lists, cannot compare.
/// assert_eq!(cursor1.partial_cmp(&cursor3), None);
/// ```
impl<'a, T: 'a> PartialOrd for Cursor<'a, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.same_list_with(other) {
            return None;
        }
        Some(self.index.cmp(&other.index))
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// For convenience, [`CursorMut::view`] provides a function to temporarily borrow
/// the list and returns an immutable reference whose lifetime is shorter than the
/// cursor.
///
/// # Examples
///
/// ```compile_fail
/// use classic_dsa::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: Option<NodeId>,
    list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// The node right before the cursor, which is the tail when the
            /// cursor is at the end position.
            fn prev_node(&self) -> Option<NodeId> {
                match self.current {
                    Some(current) => self.list.node(current).prev,
                    None => self.list.back_node(),
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Move the cursor to the next position, or return an error
            /// when it is already at the end position.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use classic_dsa::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// // The cursor is at the end position
            /// assert_eq!(cursor.previous(), Some(&3));
            ///
            /// // Forbid to move past the end position
            /// assert!(cursor.move_next().is_err());
            ///
            /// // The cursor is still at the end position
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            pub fn move_next(&mut self) -> Result<(), &'static str> {
                match self.current {
                    Some(current) => {
                        self.current = self.list.node(current).next;
                        self.index += 1;
                        Ok(())
                    }
                    None => Err("`move_next` past the end position"),
                }
            }

            /// Move the cursor to the previous position, or return an error
            /// when it is already at the first node.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use classic_dsa::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            ///
            /// // Forbid to move before the first node
            /// assert!(cursor.move_prev().is_err());
            ///
            /// // The cursor is still at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn move_prev(&mut self) -> Result<(), &'static str> {
                match self.prev_node() {
                    Some(prev) => {
                        self.current = Some(prev);
                        self.index -= 1;
                        Ok(())
                    }
                    None => Err("`move_prev` before the first node"),
                }
            }

            /// Move forward the cursor by given steps, or return the number of
            /// steps taken when the end position is reached early.
            ///
            /// If an error occurs, the cursor will stay at the end position.
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn seek_forward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_next().map_err(|_| i))
            }

            /// Move backward the cursor by given steps, or return the number of
            /// steps taken when the first node is reached early.
            ///
            /// If an error occurs, the cursor will stay at the first node.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use classic_dsa::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_end();
            ///
            /// assert_eq!(cursor.seek_backward(5), Err(3));
            /// assert_eq!(cursor.current(), Some(&1));
            /// ```
            pub fn seek_backward(&mut self, steps: usize) -> Result<(), usize> {
                (0..steps).try_for_each(|i| self.move_prev().map_err(|_| i))
            }

            /// Move the cursor to the given position `target`, or return an error
            /// of how far `target` lies beyond `len`.
            ///
            /// The walk starts from whichever of the current position, the first
            /// node and the end position is nearest to `target`. If an error
            /// occurs, the cursor will stay put.
            ///
            /// This operation should compute in *O*(*n*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use classic_dsa::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // Move cursor to a valid place (at the third node)
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// // Forbid to move to a invalid place
            /// assert_eq!(cursor.seek_to(5), Err(2));
            ///
            /// // The cursor is still at the third node
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), usize> {
                let len = self.list.len();
                if target > len {
                    return Err(target - len);
                }
                // current=c, target=t, end=$
                let from_here = self.index.abs_diff(target);
                if target < from_here && target <= len - target {
                    // [-->t      c $]
                    self.move_to_start();
                } else if len - target < from_here {
                    // [ c     t<--$]
                    self.move_to_end();
                }
                if target > self.index {
                    self.seek_forward(target - self.index)
                } else {
                    self.seek_backward(self.index - target)
                }
            }

            /// Set the cursor to the start of the list (i.e. the first node).
            ///
            /// This operation should compute in *O*(*1*) time.
            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.front_node();
            }

            /// Set the cursor to the end position of the list.
            ///
            /// This operation should compute in *O*(*1*) time.
            ///
            /// # Examples
            ///
            /// ```
            /// use classic_dsa::List;
            ///
            /// let list = List::from([1, 2, 3]);
            /// let mut cursor = list.cursor_start();
            ///
            /// // The cursor is at the first node
            /// assert_eq!(cursor.current(), Some(&1));
            /// cursor.move_to_end();
            ///
            /// // The cursor is now at the end position
            /// assert_eq!(cursor.current(), None);
            /// assert_eq!(cursor.previous(), Some(&3));
            /// ```
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = None;
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Option<NodeId>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    fn same_list_with(&self, other: &Self) -> bool {
        ptr::eq(self.list, other.list)
    }

    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).current(), Some(&1));
    /// assert_eq!(list.cursor(1).current(), Some(&2));
    /// assert_eq!(list.cursor(2).current(), Some(&3));
    /// assert_eq!(list.cursor(3).current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        let list: &'a List<T> = self.list;
        self.current.map(|current| &list.node(current).element)
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).previous(), None);
    /// assert_eq!(list.cursor(1).previous(), Some(&1));
    /// assert_eq!(list.cursor(3).previous(), Some(&3));
    /// ```
    pub fn previous(&self) -> Option<&'a T> {
        let list: &'a List<T> = self.list;
        self.prev_node().map(|prev| &list.node(prev).element)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Option<NodeId>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }
}

// Methods that does not change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Return an immutable reference of current node of the cursor,
    /// or return `None` if it is located at the end position.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|current| &self.list.node(current).element)
    }

    /// Return an immutable reference of previous node of the cursor,
    /// or return `None` if it is located at the first node.
    pub fn previous(&self) -> Option<&T> {
        self.prev_node().map(|prev| &self.list.node(prev).element)
    }

    /// Return an mutable reference of current node of the cursor,
    /// or return `None` if it is located at the end position.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// // Create a cursor and mutate the element in the current node.
    /// let mut cursor = list.cursor_mut(0);
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// // Cannot mutate the end position.
    /// assert!(list.cursor_mut(3).current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let current = self.current?;
        Some(&mut self.list.node_mut(current).element)
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    ///
    /// This is useful where the list is not able to read while a
    /// mutable cursor is created and being used.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_start_mut();
    ///
    /// // Temporarily view the list
    /// assert_eq!(cursor.view().back(), Some(&3));
    ///
    /// cursor.insert(4);
    /// assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 3]);
    /// ```
    pub fn view(&self) -> &List<T> {
        self.list
    }
}

// Methods that might change the linking structure of the list.
impl<'a, T: 'a> CursorMut<'a, T> {
    /// Add an element before the cursor position.
    ///
    /// After insertion, the cursor stays put but its `index` becomes
    /// `index + 1`. Inserting at the end position appends to the list.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1);
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 4, 2, 3, 5]);
    /// ```
    pub fn insert(&mut self, item: T) {
        let prev = self.prev_node();
        self.list.attach_node(prev, self.current, item);
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is at the end position. After removal, the cursor
    /// is moved to the next node unless no removing is happened.
    ///
    /// This operation should compute in *O*(*1*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.remove(), Some(5)); // becomes [0, 1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.remove(), Some(0)); // becomes [1, 2, 3, 4, 6, 7, 8, 9]
    /// assert_eq!(cursor.current(), Some(&1));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.index(), 8);
    ///
    /// assert_eq!(Vec::from_iter(list), vec![1, 2, 3, 4, 6, 7, 8, 9]);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let current = self.current?;
        let next = self.list.node(current).next;
        let element = self.list.detach_node(current);
        self.current = next;
        Some(element)
    }

    /// Remove the element before the cursor and return it, or return `None` if
    /// the cursor is at the first node. After removal, the cursor is not moved,
    /// but its `index` becomes `index - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let mut list = List::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5);
    ///
    /// assert_eq!(cursor.backspace(), Some(4));
    /// assert_eq!(cursor.index(), 4);
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// cursor.move_to_start();
    /// assert_eq!(cursor.backspace(), None);
    /// ```
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok()?;
        self.remove()
    }
}
