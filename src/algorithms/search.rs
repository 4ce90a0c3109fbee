//! Searches over sorted slices.
//!
//! All routines expect `v` to be sorted in ascending order and return the
//! index of an element equal to `target`, or `None` when there is none. If
//! several elements match, any one of their indices may be returned.

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// Iterative binary search over the half-open window `lo..hi`.
///
/// # Complexity
///
/// *O*(log *n*) comparisons.
///
/// # Examples
///
/// ```
/// use classic_dsa::binary_search;
///
/// let v = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search(&v, &7), Some(3));
/// assert_eq!(binary_search(&v, &4), None);
/// ```
pub fn binary_search<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, v.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match v[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    None
}

/// Recursive binary search; same results as [`binary_search`].
///
/// # Examples
///
/// ```
/// use classic_dsa::binary_search_recursive;
///
/// let v = [1, 3, 5, 7, 9];
/// assert_eq!(binary_search_recursive(&v, &1), Some(0));
/// assert_eq!(binary_search_recursive(&v, &10), None);
/// ```
pub fn binary_search_recursive<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    fn search<T: Ord>(v: &[T], target: &T, lo: usize, hi: usize) -> Option<usize> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo) / 2;
        match v[mid].cmp(target) {
            Ordering::Equal => Some(mid),
            Ordering::Less => search(v, target, mid + 1, hi),
            Ordering::Greater => search(v, target, lo, mid),
        }
    }
    search(v, target, 0, v.len())
}

/// Jump search with blocks of `floor(sqrt(n))` elements.
///
/// Probes jump block by block while the probed element is less than
/// `target`. The first probe at or past `target` (or past the end) brackets
/// the window `probe - step ..= min(probe, n - 1)`, which is scanned
/// linearly.
///
/// # Complexity
///
/// *O*(√*n*) comparisons.
///
/// # Examples
///
/// ```
/// use classic_dsa::jump_search;
///
/// let v = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89];
/// assert_eq!(jump_search(&v, &55), Some(10));
/// assert_eq!(jump_search(&v, &4), None);
/// ```
pub fn jump_search<T: Ord>(v: &[T], target: &T) -> Option<usize> {
    let n = v.len();
    if n == 0 {
        return None;
    }
    let step = ((n as f64).sqrt() as usize).max(1);
    let mut probe = 0;
    while probe < n && v[probe] < *target {
        probe += step;
    }
    let start = probe.saturating_sub(step);
    let end = probe.min(n - 1);
    trace!(start, end, step, "jump search scans block");
    (start..=end).find(|&i| v[i] == *target)
}

/// A searching algorithm selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SearchAlgorithm {
    Binary,
    BinaryRecursive,
    Jump,
}

impl SearchAlgorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Binary,
        SearchAlgorithm::BinaryRecursive,
        SearchAlgorithm::Jump,
    ];

    /// The lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::BinaryRecursive => "binary-recursive",
            SearchAlgorithm::Jump => "jump",
        }
    }

    /// Search the sorted slice `v` for `target` with this algorithm.
    pub fn search<T: Ord>(self, v: &[T], target: &T) -> Option<usize> {
        match self {
            SearchAlgorithm::Binary => binary_search(v, target),
            SearchAlgorithm::BinaryRecursive => binary_search_recursive(v, target),
            SearchAlgorithm::Jump => jump_search(v, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
