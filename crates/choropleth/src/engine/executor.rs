//! Classification execution engine.
//!
//! ## Purpose
//!
//! This module drives one classification: it sorts the observations, decides
//! how many groups the data can support, runs the ckmeans dynamic program and
//! turns the groups into a padded `BreakSet` with diagnostics. It also provides
//! the rayon-based row fill and region styling passes.
//!
//! ## Design notes
//!
//! * **Determinism**: Observations are sorted before clustering, so the result
//!   depends only on the multiset of values, not on extraction order.
//! * **Degradation**: With `d` distinct values and `d < k`, `d` groups are
//!   formed and the highest band is repeated up to `k`.
//! * **Parallelism**: Row halves are solved with `rayon::join` above a size
//!   threshold; results are identical to the sequential fill.
//!
//! ## Invariants
//!
//! * The class count is at least 1 (validated by the builders).
//! * All inputs are valid observations (finite and positive).
//!
//! ## Non-goals
//!
//! * This module does not filter observations (handled by the extractor).
//! * This module does not assign colors (handled by `symbology`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use num_traits::Float;
use std::cmp::Ordering::Equal;
use std::fmt::Debug;
use tracing::debug;

// Internal dependencies
use crate::algorithms::ckmeans::{cluster_sorted, distinct_sorted, fill_row, RowFillFn};
use crate::evaluation::diagnostics::Diagnostics;
use crate::input::RegionRecord;
use crate::primitives::breaks::BreakSet;

#[cfg(feature = "cpu")]
use crate::algorithms::ckmeans::best_split;
#[cfg(feature = "cpu")]
use crate::engine::symbology::{RegionStyle, Symbology};
#[cfg(feature = "cpu")]
use crate::math::moments::PrefixMoments;

/// Default number of classes.
pub const DEFAULT_CLASSES: usize = 5;

/// Columns below which a row half is solved on the current thread.
#[cfg(feature = "cpu")]
const PARALLEL_THRESHOLD: usize = 1024;

// ============================================================================
// Classification Output
// ============================================================================

/// Result of classifying one observation set.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<T> {
    /// Bands in ascending order.
    pub breaks: BreakSet<T>,
    /// Fit statistics.
    pub diagnostics: Diagnostics<T>,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs natural-breaks classification with a fixed class count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierExecutor {
    /// Requested number of classes.
    pub classes: usize,
    /// Use the parallel row fill and sort.
    pub parallel: bool,
}

impl Default for ClassifierExecutor {
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES,
            parallel: false,
        }
    }
}

impl ClassifierExecutor {
    /// Create an executor for `classes` bands.
    pub fn new(classes: usize, parallel: bool) -> Self {
        Self { classes, parallel }
    }

    /// Classify valid observations.
    pub fn classify<T>(&self, observations: &[T]) -> Classification<T>
    where
        T: Float + Debug + Send + Sync,
    {
        let mut sorted = observations.to_vec();
        self.sort(&mut sorted);

        let distinct = distinct_sorted(&sorted);
        let groups_wanted = self.classes.min(distinct);
        let groups = cluster_sorted(&sorted, groups_wanted, self.row_fill());

        if sorted.is_empty() {
            debug!(classes = self.classes, "no observations; classification is empty");
        } else if groups_wanted < self.classes {
            debug!(
                observations = sorted.len(),
                distinct,
                classes = self.classes,
                "fewer distinct values than classes; repeating highest band"
            );
        }

        let breaks = if groups.is_empty() {
            BreakSet::empty(self.classes)
        } else {
            BreakSet::from_groups(&sorted, &groups, self.classes)
        };
        let diagnostics = Diagnostics::compute(&sorted, &groups, &breaks, distinct);

        debug!(
            observations = sorted.len(),
            distinct,
            classes = self.classes,
            effective = breaks.effective_classes(),
            gvf = ?diagnostics.gvf,
            "classified observations"
        );

        Classification {
            breaks,
            diagnostics,
        }
    }

    fn sort<T: Float + Send + Sync>(&self, values: &mut [T]) {
        #[cfg(feature = "cpu")]
        {
            if self.parallel {
                values.par_sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
                return;
            }
        }
        values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
    }

    fn row_fill<T: Float + Send + Sync>(&self) -> RowFillFn<T> {
        if self.parallel {
            fill_row_parallel::<T>
        } else {
            fill_row::<T>
        }
    }
}

// ============================================================================
// Parallel Row Fill
// ============================================================================

/// Fill one row of the cost and split tables, splitting work with rayon.
#[cfg(feature = "cpu")]
pub fn fill_row_parallel<T: Float + Send + Sync>(
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
    fill_range_parallel(
        moments,
        prev,
        cluster,
        (cluster, n - 1),
        (cluster, n - 1),
        &mut row[cluster..],
        &mut split[cluster..],
    );
}

#[cfg(feature = "cpu")]
fn fill_range_parallel<T: Float + Send + Sync>(
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
    let (cost, arg) = best_split(moments, prev, mid, range.0.max(cluster), range.1.min(mid));
    let offset = mid - imin;
    row[offset] = cost;
    split[offset] = arg;

    let (row_left, row_right) = row.split_at_mut(offset);
    let (split_left, split_right) = split.split_at_mut(offset);
    let row_right = &mut row_right[1..];
    let split_right = &mut split_right[1..];

    let left = |row: &mut [T], split: &mut [usize]| {
        if mid > imin {
            fill_range_parallel(
                moments,
                prev,
                cluster,
                (imin, mid - 1),
                (range.0, arg),
                row,
                split,
            );
        }
    };
    let right = |row: &mut [T], split: &mut [usize]| {
        if mid < imax {
            fill_range_parallel(
                moments,
                prev,
                cluster,
                (mid + 1, imax),
                (arg, range.1),
                row,
                split,
            );
        }
    };

    if imax - imin > PARALLEL_THRESHOLD {
        rayon::join(
            || left(row_left, split_left),
            || right(row_right, split_right),
        );
    } else {
        left(row_left, split_left);
        right(row_right, split_right);
    }
}

/// Sequential fallback when the `cpu` feature is disabled.
#[cfg(not(feature = "cpu"))]
pub fn fill_row_parallel<T: Float + Send + Sync>(
    moments: &crate::math::moments::PrefixMoments<T>,
    prev: &[T],
    cluster: usize,
    row: &mut [T],
    split: &mut [usize],
) {
    fill_row(moments, prev, cluster, row, split)
}

// ============================================================================
// Parallel Region Styling
// ============================================================================

/// Style every region in parallel; output order matches input order.
#[cfg(feature = "cpu")]
pub fn style_pass_parallel<T, R>(
    symbology: &Symbology<T>,
    regions: &[R],
    key: &str,
) -> Vec<RegionStyle<T>>
where
    T: Float + Send + Sync,
    R: RegionRecord<T> + Sync,
{
    regions
        .par_iter()
        .map(|region| symbology.style(region, key))
        .collect()
}

/// Sequential fallback when the `cpu` feature is disabled.
#[cfg(not(feature = "cpu"))]
pub fn style_pass_parallel<T, R>(
    symbology: &crate::engine::symbology::Symbology<T>,
    regions: &[R],
    key: &str,
) -> Vec<crate::engine::symbology::RegionStyle<T>>
where
    T: Float + Send + Sync,
    R: RegionRecord<T> + Sync,
{
    symbology.style_regions(regions, key)
}
