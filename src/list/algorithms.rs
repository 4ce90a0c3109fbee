use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        let mut cursor = self.cursor_start_mut();
        for elem_other in other {
            match cursor.current_mut() {
                None => cursor.insert(elem_other.clone()),
                Some(elem) => {
                    elem.clone_from(elem_other);
                    let _ = cursor.move_next();
                }
            }
        }
        while cursor.remove().is_some() {}
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if the `List` contains an element equal to the given value.
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
    /// assert_eq!(list.contains(&0), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns the index of the first element equal to the given value, or
    /// `None` if there is no such element.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::List;
    ///
    /// let list = List::from(['a', 'b', 'a']);
    /// assert_eq!(list.position(&'a'), Some(0));
    /// assert_eq!(list.position(&'b'), Some(1));
    /// assert_eq!(list.position(&'z'), None);
    /// ```
    pub fn position(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clone_from_longer_and_shorter() {
        let source = List::from([1, 2, 3]);

        let mut longer = List::from([9, 9, 9, 9, 9]);
        longer.clone_from(&source);
        longer.assert_well_formed();
        assert_eq!(longer, source);

        let mut shorter = List::from([7]);
        shorter.clone_from(&source);
        shorter.assert_well_formed();
        assert_eq!(shorter, source);
    }

    #[test]
    fn ordering_and_hash_follow_elements() {
        let a = List::from([1, 2, 3]);
        let b = List::from([1, 2, 4]);
        let c = List::from([1, 2]);
        assert!(a < b);
        assert!(c < a);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&a.clone()));
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}
