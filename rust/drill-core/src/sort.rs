//! Adjacent-swap bubble sort.
//!
//! Each pass walks the unsorted prefix left to right and swaps any pair whose
//! left element compares greater than its right neighbour. After pass `p` the
//! last `p + 1` slots hold their final values, so the next pass stops one
//! slot earlier. A pass with no swaps ends the sort.
//!
//! Comparison is fallible: a pair with no defined order aborts the sort with
//! [`DrillError::TypeMismatch`]. The first pass compares every element
//! against the running maximum, so an unorderable element is reported before
//! any later pass runs.

use std::cmp::Ordering;
use std::fmt::Debug;

use tracing::debug;

use crate::error::{DrillError, Result};

/// Work done by one call to [`bubble_sort_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

/// Sort `items` in place using a fallible comparator.
///
/// On error the slice is still a permutation of its input, in no particular
/// order.
pub fn bubble_sort_by<T, F>(items: &mut [T], mut compare: F) -> Result<SortStats>
where
    F: FnMut(&T, &T) -> Result<Ordering>,
{
    let mut stats = SortStats::default();
    let len = items.len();
    if len < 2 {
        return Ok(stats);
    }

    for pass in 0..len - 1 {
        stats.passes += 1;
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            stats.comparisons += 1;
            if compare(&items[j], &items[j + 1])? == Ordering::Greater {
                items.swap(j, j + 1);
                stats.swaps += 1;
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    debug!(
        len,
        passes = stats.passes,
        comparisons = stats.comparisons,
        swaps = stats.swaps,
        "bubble sort finished"
    );
    Ok(stats)
}

/// Sort `items` in place by their `PartialOrd` ordering.
///
/// Pairs for which `partial_cmp` returns `None` (a float NaN, for instance)
/// fail with [`DrillError::TypeMismatch`].
pub fn bubble_sort<T: PartialOrd + Debug>(items: &mut [T]) -> Result<SortStats> {
    bubble_sort_by(items, |a, b| {
        a.partial_cmp(b).ok_or_else(|| {
            DrillError::type_mismatch(format!("{:?} and {:?} have no defined order", a, b))
        })
    })
}

/// Consume a sequence and return it sorted in non-decreasing order.
pub fn sorted<T: PartialOrd + Debug>(mut items: Vec<T>) -> Result<Vec<T>> {
    bubble_sort(&mut items)?;
    Ok(items)
}

/// True when every adjacent pair is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] <= w[1])
}
