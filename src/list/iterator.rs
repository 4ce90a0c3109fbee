use crate::list::arena::NodeId;
use crate::list::List;
use std::fmt;
use std::iter::FusedIterator;

/// An iterator over the elements of a `List`.
///
/// It uses a pair of nodes `front..=back` to represent the remaining
/// subrange of the list, together with the number of elements left in it.
///
/// # Examples
///
/// ```compile_fail
/// use classic_dsa::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.append(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.front_node(),
            back: list.back_node(),
            len: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return `*front` and shrink the remaining range to `(front.next)..=back`,
    /// or return `None` if the range is already empty.
    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list: &'a List<T> = self.list;
        let node = list.node(self.front?);
        self.front = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    /// Shrink the remaining range to `front..=(back.prev)` and return `*back`,
    /// or return `None` if the range is already empty.
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        let list: &'a List<T> = self.list;
        let node = list.node(self.back?);
        self.back = node.prev;
        self.len -= 1;
        Some(&node.element)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_start()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_end()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = List::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.append(item));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        Self::from_iter(array)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::fmt::Debug;

    #[test]
    fn test_iter() {
        fn test_iter<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T>,
        {
            let vec = Vec::from_iter(input);
            let list = List::from_iter(vec.clone());
            let len = vec.len();
            let mut iter = list.iter();
            for (i, item) in vec.iter().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
            assert_eq!(iter.len(), 0);

            let mut iter = list.iter();
            for (i, item) in vec.iter().take(mid).enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - i - 1);
            }
            let mut iter = iter.rev();
            for (i, item) in vec.iter().skip(mid).rev().enumerate() {
                assert_eq!(iter.next(), Some(item));
                assert_eq!(iter.len(), len - mid - i - 1);
            }
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next(), None);
            assert_eq!(iter.next_back(), None);
            assert_eq!(iter.len(), 0);
        }

        fn test_into_iter<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T>,
        {
            let vec = Vec::from_iter(input);
            let mut iter = List::from_iter(vec.clone()).into_iter();
            let front: Vec<T> = iter.by_ref().take(mid).collect();
            let back: Vec<T> = iter.rev().collect();
            assert_eq!(front.as_slice(), &vec[..mid]);
            assert_eq!(back, vec[mid..].iter().rev().cloned().collect::<Vec<_>>());
        }

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_into_iter(input, mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 8);
        test_case(0..10, 5);
        test_case(0..10, 2);
        test_case(0..10, 0);
        test_case(0..2, 2);
        test_case(0..2, 1);
        test_case(0..2, 0);
        test_case(0..1, 1);
        test_case(0..1, 0);
        test_case(0..0, 0);
    }

    #[test]
    fn extend_by_reference() {
        let mut list = List::from([1, 2]);
        list.extend(&[3, 4]);
        assert_eq!(Vec::from_iter(list.iter().copied()), vec![1, 2, 3, 4]);
        assert_eq!(format!("{:?}", list), "[1, 2, 3, 4]");
    }
}
