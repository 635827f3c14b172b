//! Optimal 1-D clustering (natural breaks).
//!
//! ## Purpose
//!
//! This module partitions sorted observations into contiguous groups that
//! minimise the total within-group sum of squared deviations. It is the
//! dynamic program known as ckmeans, an exact form of Jenks natural breaks.
//!
//! ## Design notes
//!
//! * **Row recurrence**: `cost[c][i] = min_{c <= j <= i} cost[c-1][j-1] + ssq(j, i)`.
//!   Each row depends only on the row above it.
//! * **Divide and conquer**: The optimal split index is monotone in `i`, so a
//!   row is filled by solving the middle column and recursing on both halves
//!   with narrowed split ranges.
//! * **Pluggable rows**: Row filling goes through `RowFillFn` so the engine can
//!   substitute a parallel implementation.
//! * **Deterministic ties**: The leftmost optimal split wins.
//!
//! ## Invariants
//!
//! * Input is sorted ascending and holds at least `clusters` values.
//! * Every group is non-empty and groups cover the input in order.
//!
//! ## Non-goals
//!
//! * This module does not decide how many clusters to request (see the executor).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::moments::PrefixMoments;

/// Signature of a row-filling pass.
///
/// Fills `row[i]` and `split[i]` for `i` in `cluster..n` from the previous
/// row `prev`. Entries below `cluster` are left untouched.
pub type RowFillFn<T> = fn(&PrefixMoments<T>, &[T], usize, &mut [T], &mut [usize]);

// ============================================================================
// Split Search
// ============================================================================

/// Find the best start index of the last group ending at `i`.
///
/// Scans `j` over `lo..=hi` and returns `(cost, j)` for the leftmost minimum.
#[inline]
pub fn best_split<T: Float>(
    moments: &PrefixMoments<T>,
    prev: &[T],
    i: usize,
    lo: usize,
    hi: usize,
) -> (T, usize) {
    let mut best = T::infinity();
    let mut arg = lo;
    for j in lo..=hi {
        let cost = prev[j - 1] + moments.ssq(j, i);
        if cost < best {
            best = cost;
            arg = j;
        }
    }
    (best, arg)
}

// ============================================================================
// Sequential Row Fill
// ============================================================================

/// Fill one row of the cost and split tables sequentially.
pub fn fill_row<T: Float>(
    moments: &PrefixMoments<T>,
    prev: &[T],
    cluster: usize,
    row: &mut [T],
    split: &mut [usize],
) {
    let n = moments.len();
    if cluster >= n {
        return;
    }
    fill_range(
        moments,
        prev,
        cluster,
        (cluster, n - 1),
        (cluster, n - 1),
        &mut row[cluster..],
        &mut split[cluster..],
    );
}

/// Solve columns `cols.0..=cols.1`, whose entries occupy `row` and `split`,
/// searching split indices within `range`.
fn fill_range<T: Float>(
    moments: &PrefixMoments<T>,
    prev: &[T],
    cluster: usize,
    cols: (usize, usize),
    range: (usize, usize),
    row: &mut [T],
    split: &mut [usize],
) {
    let (imin, imax) = cols;
    let mid = imin + (imax - imin) / 2;
    let lo = range.0.max(cluster);
    let hi = range.1.min(mid);

    let (cost, arg) = best_split(moments, prev, mid, lo, hi);
    let offset = mid - imin;
    row[offset] = cost;
    split[offset] = arg;

    let (row_left, row_right) = row.split_at_mut(offset);
    let (split_left, split_right) = split.split_at_mut(offset);

    if mid > imin {
        fill_range(
            moments,
            prev,
            cluster,
            (imin, mid - 1),
            (range.0, arg),
            row_left,
            split_left,
        );
    }
    if mid < imax {
        fill_range(
            moments,
            prev,
            cluster,
            (mid + 1, imax),
            (arg, range.1),
            &mut row_right[1..],
            &mut split_right[1..],
        );
    }
}

// ============================================================================
// Clustering
// ============================================================================

/// Partition `sorted` into exactly `clusters` contiguous groups.
///
/// Returns inclusive `(start, end)` index pairs in ascending order. Callers
/// must ensure `1 <= clusters <= sorted.len()`.
pub fn cluster_sorted<T: Float>(
    sorted: &[T],
    clusters: usize,
    fill: RowFillFn<T>,
) -> Vec<(usize, usize)> {
    let n = sorted.len();
    if n == 0 || clusters == 0 {
        return Vec::new();
    }
    if clusters == 1 {
        return vec![(0, n - 1)];
    }

    let moments = PrefixMoments::new(sorted);
    let mut cost = vec![vec![T::infinity(); n]; clusters];
    let mut split = vec![vec![0usize; n]; clusters];

    for (i, entry) in cost[0].iter_mut().enumerate() {
        *entry = moments.ssq(0, i);
    }

    for c in 1..clusters {
        let (above, below) = cost.split_at_mut(c);
        fill(
            &moments,
            above[c - 1].as_slice(),
            c,
            below[0].as_mut_slice(),
            split[c].as_mut_slice(),
        );
    }

    backtrack(&split, n)
}

/// Recover group bounds from the split table.
fn backtrack(split: &[Vec<usize>], n: usize) -> Vec<(usize, usize)> {
    let mut groups = vec![(0, 0); split.len()];
    let mut right = n - 1;
    for c in (0..split.len()).rev() {
        let left = if c == 0 { 0 } else { split[c][right] };
        groups[c] = (left, right);
        if c > 0 {
            right = left - 1;
        }
    }
    groups
}

/// Number of distinct values in a sorted slice.
pub fn distinct_sorted<T: Float>(sorted: &[T]) -> usize {
    match sorted.first() {
        None => 0,
        Some(_) => 1 + sorted.windows(2).filter(|w| w[0] != w[1]).count(),
    }
}
