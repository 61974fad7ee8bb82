//! Selection sort engine.
//!
//! Sorts a caller-owned slice in place, ascending. Every run performs
//! exactly `n - 1` outer passes and `n(n-1)/2` comparisons whatever the
//! input order; there is no early exit for already sorted input.
//!
//! Ordering is always supplied by a comparator. [`selection_sort`] uses
//! `Ord::cmp`; floating point callers pass an explicit total order such as
//! [`f64::total_cmp`]. A comparator that is not a total order produces an
//! unspecified permutation of the input, never a panic.
//!
//! The sort is not stable.

use serde::Serialize;
use std::cmp::Ordering;

/// Counters describing a single run of the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SortStats {
    /// Outer passes, always `n.saturating_sub(1)`.
    pub passes: usize,
    /// Comparator invocations.
    pub comparisons: usize,
    /// Exchanges that actually moved an element.
    pub swaps: usize,
}

impl SortStats {
    /// Comparisons a run over `len` elements performs, saturating at
    /// `usize::MAX` when that count does not fit.
    pub fn expected_comparisons(len: usize) -> usize {
        // halve the even factor first so only a true overflow saturates
        let (a, b) = if len % 2 == 0 {
            (len / 2, len.saturating_sub(1))
        } else {
            (len, len / 2)
        };
        a.saturating_mul(b)
    }
}

/// Sort `v` in place, ascending.
///
/// ```
/// let mut v = [1, 2, 3, 45, 23, 124, 12, 43, 5, 32, 1];
/// tally_core::selection_sort(&mut v);
/// assert_eq!(v, [1, 1, 2, 3, 5, 12, 23, 32, 43, 45, 124]);
/// ```
pub fn selection_sort<T: Ord>(v: &mut [T]) {
    selection_sort_with_stats(v, T::cmp);
}

/// Sort `v` in place, ascending according to `compare`.
///
/// ```
/// let mut v = [2.5, -1.0, f64::NAN, 0.0];
/// tally_core::selection_sort_by(&mut v, f64::total_cmp);
/// assert_eq!(&v[..3], &[-1.0, 0.0, 2.5]);
/// assert!(v[3].is_nan());
/// ```
pub fn selection_sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort_with_stats(v, compare);
}

/// Sort `v` in place, ascending by the key `f` extracts.
pub fn selection_sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    selection_sort_with_stats(v, |a, b| f(a).cmp(&f(b)));
}

/// Sort `v` in place and report what the run did.
pub fn selection_sort_with_stats<T, F>(v: &mut [T], mut compare: F) -> SortStats
where
    F: FnMut(&T, &T) -> Ordering,
{
    let n = v.len();
    let mut stats = SortStats::default();

    for i in 0..n.saturating_sub(1) {
        // Minimum of the unsorted suffix [i, n-1]; the candidate starts at i.
        let mut min_idx = i;
        for j in (i + 1)..n {
            stats.comparisons += 1;
            if compare(&v[j], &v[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }
        if min_idx != i {
            v.swap(i, min_idx);
            stats.swaps += 1;
        }
        stats.passes += 1;
    }

    tracing::trace!(
        len = n,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "selection sort finished"
    );
    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
