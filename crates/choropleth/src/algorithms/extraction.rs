//! Observation extraction.
//!
//! ## Purpose
//!
//! This module turns region records or raw values into the set of valid
//! observations fed to the classifier.
//!
//! ## Design notes
//!
//! * **Lazy**: Extraction is a restartable iterator; nothing is accumulated
//!   until an `ObservationSet` is collected.
//! * **Silent exclusion**: Absent, zero, negative and non-finite values are
//!   missing data, not errors.
//!
//! ## Invariants
//!
//! * Only finite values strictly greater than zero are observations.
//! * Input order is preserved; duplicates are kept.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::input::{ObservationInput, RegionRecord};
use crate::primitives::errors::ChoroplethError;

/// Whether `value` is a valid observation.
#[inline]
pub fn is_observation<T: Float>(value: T) -> bool {
    value.is_finite() && value > T::zero()
}

/// `value` if it is a valid observation, else `None`.
#[inline]
pub fn observation<T: Float>(value: Option<T>) -> Option<T> {
    value.filter(|&v| is_observation(v))
}

/// Lazily extract valid observations of attribute `key` from `regions`.
pub fn observations<'a, T, R>(
    regions: &'a [R],
    key: &'a str,
) -> impl Iterator<Item = T> + Clone + 'a
where
    T: Float + 'a,
    R: RegionRecord<T>,
{
    regions
        .iter()
        .filter_map(move |region| observation(region.attribute(key)))
}

/// Lazily extract valid observations from raw values.
pub fn valid_values<T: Float>(values: &[T]) -> impl Iterator<Item = T> + Clone + '_ {
    values.iter().copied().filter(|&v| is_observation(v))
}

/// The valid observations of one rendering cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObservationSet<T> {
    values: Vec<T>,
}

impl<T: Float> ObservationSet<T> {
    /// Collect observations of attribute `key` across `regions`.
    pub fn from_regions<R: RegionRecord<T>>(regions: &[R], key: &str) -> Self {
        Self {
            values: observations(regions, key).collect(),
        }
    }

    /// Collect observations from a raw value container.
    pub fn from_input<I>(input: &I) -> Result<Self, ChoroplethError>
    where
        I: ObservationInput<T> + ?Sized,
    {
        let slice = input.as_observation_slice()?;
        Ok(Self::from_values(slice))
    }

    /// Collect observations from raw values.
    pub fn from_values(values: &[T]) -> Self {
        Self {
            values: valid_values(values).collect(),
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Observations in extraction order.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Float> FromIterator<T> for ObservationSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().filter(|&v| is_observation(v)).collect(),
        }
    }
}
