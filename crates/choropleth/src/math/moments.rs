//! Prefix moments over sorted observations.
//!
//! ## Purpose
//!
//! This module answers "sum of squared deviations from the mean over
//! `sorted[j..=i]`" in constant time, which is the cost function of the
//! natural-breaks dynamic program.
//!
//! ## Design notes
//!
//! * **Shifted sums**: Values are shifted by the median before accumulation
//!   to limit cancellation in `sum(x²) - sum(x)² / n`.
//! * **Clamped**: Rounding can push a cost slightly below zero; it is clamped.
//!
//! ## Invariants
//!
//! * Indices are inclusive and satisfy `j <= i < len()`.
//!
//! ## Non-goals
//!
//! * This module does not sort its input.

// External dependencies
use num_traits::Float;

/// Convert a count to the float type.
pub fn cast<T: Float>(n: usize) -> T {
    T::from(n).unwrap_or_else(T::max_value)
}

/// Cumulative first and second moments of a sorted sequence.
#[derive(Debug, Clone)]
pub struct PrefixMoments<T> {
    sums: Vec<T>,
    squares: Vec<T>,
    shift: T,
}

impl<T: Float> PrefixMoments<T> {
    /// Accumulate moments over `sorted`.
    pub fn new(sorted: &[T]) -> Self {
        let shift = sorted
            .get(sorted.len() / 2)
            .copied()
            .unwrap_or_else(T::zero);

        let mut sums = Vec::with_capacity(sorted.len() + 1);
        let mut squares = Vec::with_capacity(sorted.len() + 1);
        let (mut s, mut q) = (T::zero(), T::zero());
        sums.push(s);
        squares.push(q);

        for &x in sorted {
            let d = x - shift;
            s = s + d;
            q = q + d * d;
            sums.push(s);
            squares.push(q);
        }

        Self {
            sums,
            squares,
            shift,
        }
    }

    /// Number of accumulated values.
    pub fn len(&self) -> usize {
        self.sums.len() - 1
    }

    /// True when no values were accumulated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean of `sorted[j..=i]`.
    pub fn mean(&self, j: usize, i: usize) -> T {
        let n = cast::<T>(i - j + 1);
        (self.sums[i + 1] - self.sums[j]) / n + self.shift
    }

    /// Sum of squared deviations from the mean over `sorted[j..=i]`.
    pub fn ssq(&self, j: usize, i: usize) -> T {
        let n = cast::<T>(i - j + 1);
        let s = self.sums[i + 1] - self.sums[j];
        let q = self.squares[i + 1] - self.squares[j];
        (q - s * s / n).max(T::zero())
    }
}
