//! Classification quality diagnostics.
//!
//! ## Purpose
//!
//! This module measures how well a set of groups describes the observations,
//! using the goodness of variance fit (GVF) customary for natural breaks.
//!
//! ## Key concepts
//!
//! * **SDAM**: Squared deviations of all observations about the array mean.
//! * **SDCM**: Squared deviations of observations about their class means.
//! * **GVF**: `1 - SDCM / SDAM`; 1 is a perfect fit.
//!
//! ## Invariants
//!
//! * `0 <= SDCM <= SDAM` up to rounding, so GVF lies in `[0, 1]`.
//! * GVF is 1 only when SDAM is exactly zero (constant or single observations).
//! * Member counts follow the band each observation resolves to, so they
//!   agree with the colors regions are painted with.

// External dependencies
use num_traits::Float;
use serde::Serialize;

// Internal dependencies
use crate::math::moments::PrefixMoments;
use crate::primitives::breaks::BreakSet;

/// Fit statistics for one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostics<T> {
    /// Number of observations classified.
    pub observations: usize,
    /// Number of distinct observation values.
    pub distinct: usize,
    /// Squared deviations about the array mean.
    pub sdam: T,
    /// Squared deviations about the class means.
    pub sdcm: T,
    /// Goodness of variance fit.
    pub gvf: T,
    /// Observations per band, padded bands included.
    pub counts: Vec<usize>,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics for `groups` over `sorted`, counting members per band of `breaks`.
    pub fn compute(
        sorted: &[T],
        groups: &[(usize, usize)],
        breaks: &BreakSet<T>,
        distinct: usize,
    ) -> Self {
        let mut counts = vec![0usize; breaks.classes().max(breaks.len())];
        for &value in sorted {
            if let Some(band) = breaks.band_index(value) {
                counts[band] += 1;
            }
        }

        if sorted.is_empty() {
            return Self {
                observations: 0,
                distinct: 0,
                sdam: T::zero(),
                sdcm: T::zero(),
                gvf: T::one(),
                counts,
            };
        }

        let moments = PrefixMoments::new(sorted);
        let sdam = moments.ssq(0, sorted.len() - 1);
        let sdcm = groups
            .iter()
            .fold(T::zero(), |acc, &(l, r)| acc + moments.ssq(l, r));
        let gvf = if sdam > T::zero() {
            (T::one() - sdcm / sdam).max(T::zero()).min(T::one())
        } else {
            T::one()
        };

        Self {
            observations: sorted.len(),
            distinct,
            sdam,
            sdcm,
            gvf,
            counts,
        }
    }
}
