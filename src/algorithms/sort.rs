//! In-place comparison sorts over slices.
//!
//! Every algorithm comes in two forms: `x_sort(v)` orders by [`Ord`], and
//! `x_sort_by(v, compare)` orders by a comparator that must define a total
//! order, as for [`slice::sort_by`].

use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

/// Sorts by repeatedly swapping adjacent elements that are out of order.
///
/// A sweep that performs no swap ends the sort early. This sort is stable.
///
/// # Complexity
///
/// *O*(*n*²) comparisons in the worst case, *O*(*n*) on sorted input.
///
/// # Examples
///
/// ```
/// use classic_dsa::bubble_sort;
///
/// let mut v = [5, 2, 4, 3, 1];
/// bubble_sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5]);
/// ```
pub fn bubble_sort<T: Ord>(v: &mut [T]) {
    bubble_sort_by(v, T::cmp);
}

/// Bubble sort by `compare`. See [`bubble_sort`].
pub fn bubble_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut unsorted = v.len();
    while unsorted > 1 {
        let mut last_swap = 0;
        for j in 1..unsorted {
            if compare(&v[j - 1], &v[j]) == Ordering::Greater {
                v.swap(j - 1, j);
                last_swap = j;
            }
        }
        // everything from the last swap onwards is in its final place
        unsorted = last_swap;
    }
}

/// Sorts by swapping each position with every later element that is
/// smaller than it.
///
/// After round `i` the minimum of `v[i..]` sits at `v[i]`. This sort is not
/// stable.
///
/// # Examples
///
/// ```
/// use classic_dsa::exchange_sort;
///
/// let mut v = [3, 1, 2];
/// exchange_sort(&mut v);
/// assert_eq!(v, [1, 2, 3]);
/// ```
pub fn exchange_sort<T: Ord>(v: &mut [T]) {
    exchange_sort_by(v, T::cmp);
}

/// Exchange sort by `compare`. See [`exchange_sort`].
pub fn exchange_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..v.len() {
        for j in i + 1..v.len() {
            if compare(&v[j], &v[i]) == Ordering::Less {
                v.swap(i, j);
            }
        }
    }
}

/// Sorts by growing a sorted prefix, shifting each new element left past
/// every greater element. This sort is stable.
///
/// # Complexity
///
/// *O*(*n*²) in the worst case, *O*(*n*) on sorted input.
///
/// # Examples
///
/// ```
/// use classic_dsa::insertion_sort;
///
/// let mut v = ['d', 'a', 'c', 'b'];
/// insertion_sort(&mut v);
/// assert_eq!(v, ['a', 'b', 'c', 'd']);
/// ```
pub fn insertion_sort<T: Ord>(v: &mut [T]) {
    insertion_sort_by(v, T::cmp);
}

/// Insertion sort by `compare`. See [`insertion_sort`].
pub fn insertion_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts by selecting the minimum of the unsorted suffix and swapping it
/// into place. This sort is not stable.
///
/// # Examples
///
/// ```
/// use classic_dsa::selection_sort;
///
/// let mut v = [64, 25, 12, 22, 11];
/// selection_sort(&mut v);
/// assert_eq!(v, [11, 12, 22, 25, 64]);
/// ```
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_by(v, T::cmp);
}

/// Selection sort by `compare`. See [`selection_sort`].
pub fn selection_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 0..v.len() {
        let mut min = i;
        for j in i + 1..v.len() {
            if compare(&v[j], &v[min]) == Ordering::Less {
                min = j;
            }
        }
        if min != i {
            v.swap(i, min);
        }
    }
}

/// Top-down merge sort. The two halves are copied out and merged back,
/// taking from the left half on ties, so this sort is stable.
///
/// # Complexity
///
/// *O*(*n* log *n*) comparisons and *O*(*n*) extra memory.
///
/// # Examples
///
/// ```
/// use classic_dsa::merge_sort;
///
/// let mut v = vec![38, 27, 43, 3, 9, 82, 10];
/// merge_sort(&mut v);
/// assert_eq!(v, [3, 9, 10, 27, 38, 43, 82]);
/// ```
pub fn merge_sort<T: Ord + Clone>(v: &mut [T]) {
    merge_sort_by(v, T::cmp);
}

/// Merge sort by `compare`. See [`merge_sort`].
pub fn merge_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort_range(v, &mut compare);
}

fn merge_sort_range<T, F>(v: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }
    let mid = v.len() / 2;
    merge_sort_range(&mut v[..mid], compare);
    merge_sort_range(&mut v[mid..], compare);
    merge(v, mid, compare);
}

/// Merge the sorted runs `v[..mid]` and `v[mid..]`.
fn merge<T, F>(v: &mut [T], mid: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();
    let (mut l, mut r) = (0, 0);
    for slot in v.iter_mut() {
        let take_left = match (left.get(l), right.get(r)) {
            (Some(a), Some(b)) => compare(b, a) != Ordering::Less,
            (Some(_), None) => true,
            _ => false,
        };
        if take_left {
            slot.clone_from(&left[l]);
            l += 1;
        } else {
            slot.clone_from(&right[r]);
            r += 1;
        }
    }
}

/// Quick sort with a Lomuto-style partition around a median-of-three pivot.
/// This sort is not stable.
///
/// Elements equal to the pivot are gathered in the middle and never revisited.
/// Only the smaller side is sorted recursively, so the stack depth stays
/// within *O*(log *n*).
///
/// # Complexity
///
/// *O*(*n* log *n*) on average, including sorted and all-equal input;
/// *O*(*n*²) in the worst case.
///
/// # Examples
///
/// ```
/// use classic_dsa::quick_sort;
///
/// let mut v = [10, 80, 30, 90, 40, 50, 70];
/// quick_sort(&mut v);
/// assert_eq!(v, [10, 30, 40, 50, 70, 80, 90]);
/// ```
pub fn quick_sort<T: Ord>(v: &mut [T]) {
    quick_sort_by(v, T::cmp);
}

/// Quick sort by `compare`. See [`quick_sort`].
pub fn quick_sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_range(v, &mut compare);
}

fn quick_sort_range<T, F>(mut v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while v.len() > 1 {
        move_pivot_last(v, compare);
        let (lt, gt) = partition(v, compare);
        let (left, rest) = std::mem::take(&mut v).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            quick_sort_range(left, compare);
            v = right;
        } else {
            quick_sort_range(right, compare);
            v = left;
        }
    }
}

/// Move the median of the first, middle and last elements to the end.
fn move_pivot_last<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = v.len() - 1;
    let mid = last / 2;
    if compare(&v[mid], &v[0]) == Ordering::Less {
        v.swap(mid, 0);
    }
    if compare(&v[last], &v[0]) == Ordering::Less {
        v.swap(last, 0);
    }
    if compare(&v[last], &v[mid]) == Ordering::Less {
        v.swap(last, mid);
    }
    v.swap(mid, last);
}

/// Partition `v` around its last element and return `(lt, gt)` such that
/// `v[..lt]` is less than the pivot, `v[lt..gt]` equals it and `v[gt..]` is
/// greater.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let last = v.len() - 1;
    let (mut lt, mut i, mut gt) = (0, 0, last);
    while i < gt {
        match compare(&v[i], &v[last]) {
            Ordering::Less => {
                v.swap(i, lt);
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                v.swap(i, gt);
            }
        }
    }
    v.swap(gt, last);
    (lt, gt + 1)
}

/// A sorting algorithm selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortAlgorithm {
    Bubble,
    Exchange,
    Insertion,
    Selection,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SortAlgorithm; 6] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Exchange,
        SortAlgorithm::Insertion,
        SortAlgorithm::Selection,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    /// The lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Exchange => "exchange",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Returns `true` if the algorithm keeps equal elements in their
    /// original order.
    pub fn is_stable(self) -> bool {
        matches!(
            self,
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge
        )
    }

    /// Sort `v` with this algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use classic_dsa::SortAlgorithm;
    ///
    /// for algorithm in SortAlgorithm::ALL {
    ///     let mut v = [3, 1, 2];
    ///     algorithm.sort(&mut v);
    ///     assert_eq!(v, [1, 2, 3], "{}", algorithm);
    /// }
    /// ```
    pub fn sort<T: Ord + Clone>(self, v: &mut [T]) {
        self.sort_by(v, T::cmp);
    }

    /// Sort `v` by `compare` with this algorithm.
    pub fn sort_by<T, F>(self, v: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!(algorithm = self.name(), len = v.len(), "sorting");
        match self {
            SortAlgorithm::Bubble => bubble_sort_by(v, compare),
            SortAlgorithm::Exchange => exchange_sort_by(v, compare),
            SortAlgorithm::Insertion => insertion_sort_by(v, compare),
            SortAlgorithm::Selection => selection_sort_by(v, compare),
            SortAlgorithm::Merge => merge_sort_by(v, compare),
            SortAlgorithm::Quick => quick_sort_by(v, compare),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sorts_handle_trivial_inputs() {
        for algorithm in SortAlgorithm::ALL {
            let mut empty: [i32; 0] = [];
            algorithm.sort(&mut empty);

            let mut single = [42];
            algorithm.sort(&mut single);
            assert_eq!(single, [42]);

            let mut reversed = [5, 4, 3, 2, 1];
            algorithm.sort(&mut reversed);
            assert_eq!(reversed, [1, 2, 3, 4, 5], "{}", algorithm);

            let mut same = [7, 7, 7];
            algorithm.sort(&mut same);
            assert_eq!(same, [7, 7, 7]);
        }
    }

    #[test]
    fn sort_by_reverses_order() {
        for algorithm in SortAlgorithm::ALL {
            let mut v = [1, 4, 2, 3];
            algorithm.sort_by(&mut v, |a, b| b.cmp(a));
            assert_eq!(v, [4, 3, 2, 1], "{}", algorithm);
        }
    }

    #[test]
    fn exchange_sort_is_not_stable() {
        // the first swap moves (2, 'a') behind (2, 'b')
        let mut v = [(2, 'a'), (2, 'b'), (1, 'c')];
        exchange_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(1, 'c'), (2, 'b'), (2, 'a')]);
        assert!(!SortAlgorithm::Exchange.is_stable());
    }

    #[test]
    fn merge_sort_keeps_left_on_ties() {
        let mut v = [(1, 'x'), (0, 'a'), (1, 'y'), (0, 'b')];
        merge_sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, [(0, 'a'), (0, 'b'), (1, 'x'), (1, 'y')]);
    }

    #[test]
    fn quick_sort_handles_long_sorted_and_uniform_input() {
        let mut v: Vec<u32> = (0..200_000).collect();
        quick_sort(&mut v);
        assert!(v.iter().copied().eq(0..200_000));

        let mut v: Vec<u32> = (0..200_000).rev().collect();
        quick_sort(&mut v);
        assert!(v.iter().copied().eq(0..200_000));

        let mut v = vec![7; 200_000];
        quick_sort(&mut v);
        assert!(v.iter().all(|&x| x == 7));
        assert_eq!(v.len(), 200_000);
    }

    proptest! {
        #[test]
        fn sorts_agree_with_std(values in prop::collection::vec(any::<i16>(), 0..64)) {
            let mut expected = values.clone();
            expected.sort();
            for algorithm in SortAlgorithm::ALL {
                let mut v = values.clone();
                algorithm.sort(&mut v);
                prop_assert_eq!(&v, &expected, "{}", algorithm);
            }
        }

        #[test]
        fn stable_sorts_keep_tagged_duplicates_in_order(keys in prop::collection::vec(0u8..4, 0..48)) {
            let tagged: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
            let mut expected = tagged.clone();
            expected.sort_by_key(|&(key, _)| key);
            for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()) {
                let mut v = tagged.clone();
                algorithm.sort_by(&mut v, |a, b| a.0.cmp(&b.0));
                prop_assert_eq!(&v, &expected, "{}", algorithm);
            }
        }
    }
}
