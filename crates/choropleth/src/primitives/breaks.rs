//! Classification bands.
//!
//! ## Purpose
//!
//! This module defines `Break` (one inclusive `[low, high]` band) and
//! `BreakSet` (the ordered bands produced by one classification).
//!
//! ## Design notes
//!
//! * **Data-anchored**: `low`/`high` are the extreme observed values of a
//!   group, not midpoints between groups.
//! * **Padded**: When fewer distinct values than classes exist, the highest
//!   band is repeated until the requested class count is reached.
//!
//! ## Invariants
//!
//! * Breaks are sorted ascending by `low`, and `low <= high` for every band.
//! * A non-empty `BreakSet` holds exactly `classes` bands.
//! * An empty `BreakSet` arises only from an empty observation set.

// External dependencies
use num_traits::Float;
use serde::Serialize;

/// One classification band, inclusive of both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Break<T> {
    /// Smallest observation in the band.
    pub low: T,
    /// Largest observation in the band.
    pub high: T,
}

impl<T: Float> Break<T> {
    /// Create a band from its bounds.
    pub fn new(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// Whether `value` lies within the band's bounds.
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }
}

/// The ordered bands of one classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakSet<T> {
    breaks: Vec<Break<T>>,
    classes: usize,
    effective: usize,
}

impl<T: Float> BreakSet<T> {
    /// Build a break set from contiguous groups over sorted observations.
    ///
    /// `groups` are inclusive `(start, end)` index pairs into `sorted`, in
    /// ascending order. The result is padded to `classes` bands by repeating
    /// the highest group.
    pub fn from_groups(sorted: &[T], groups: &[(usize, usize)], classes: usize) -> Self {
        let mut breaks: Vec<Break<T>> = groups
            .iter()
            .map(|&(start, end)| Break::new(sorted[start], sorted[end]))
            .collect();
        let effective = breaks.len();

        if let Some(&top) = breaks.last() {
            breaks.resize(classes.max(effective), top);
        }

        Self {
            breaks,
            classes,
            effective,
        }
    }

    /// A break set with no bands.
    pub fn empty(classes: usize) -> Self {
        Self {
            breaks: Vec::new(),
            classes,
            effective: 0,
        }
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.breaks.len()
    }

    /// True when no observations were classified.
    pub fn is_empty(&self) -> bool {
        self.breaks.is_empty()
    }

    /// Requested class count.
    pub fn classes(&self) -> usize {
        self.classes
    }

    /// Number of bands backed by their own group of observations.
    pub fn effective_classes(&self) -> usize {
        self.effective
    }

    /// True when bands were padded because of insufficient distinct values.
    pub fn is_degenerate(&self) -> bool {
        self.effective < self.classes
    }

    /// Bands in ascending order.
    pub fn as_slice(&self) -> &[Break<T>] {
        &self.breaks
    }

    /// Band at `index`.
    pub fn get(&self, index: usize) -> Option<&Break<T>> {
        self.breaks.get(index)
    }

    /// Iterate bands in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Break<T>> {
        self.breaks.iter()
    }

    /// Overall `(min, max)` of the classified observations.
    pub fn range(&self) -> Option<(T, T)> {
        match (self.breaks.first(), self.breaks.last()) {
            (Some(first), Some(last)) => Some((first.low, last.high)),
            _ => None,
        }
    }

    /// Index of the highest band whose `low` does not exceed `value`.
    ///
    /// Values below every band resolve to band 0. Returns `None` only for an
    /// empty break set.
    pub fn band_index(&self, value: T) -> Option<usize> {
        if self.breaks.is_empty() {
            return None;
        }
        let meets = self.breaks.partition_point(|b| b.low <= value);
        Some(meets.saturating_sub(1))
    }
}

impl<'a, T> IntoIterator for &'a BreakSet<T> {
    type Item = &'a Break<T>;
    type IntoIter = std::slice::Iter<'a, Break<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.breaks.iter()
    }
}
