//! Input abstractions for choropleth classification.
//!
//! ## Purpose
//!
//! This module provides the two shapes of input the classifier accepts:
//! raw value containers (slices, vectors, ndarray) through `ObservationInput`,
//! and region records carrying named numeric attributes through
//! `RegionRecord`.
//!
//! ## Design notes
//!
//! * **Zero-copy where possible**: Containers expose a slice view of their data.
//! * **Attribute lookup**: Regions resolve attributes by key, so switching the
//!   mapped attribute needs no new records.
//! * **Fail-fast validation**: Non-contiguous ndarray views are rejected.
//!
//! ## Invariants
//!
//! * Returned slices cover all elements of the input container.
//! * An attribute that is absent or non-numeric is reported as `None`.
//!
//! ## Non-goals
//!
//! * This module does not filter invalid observations (see the extractor).
//! * This module does not parse geometry.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::Float;
use serde::Serialize;
use std::collections::BTreeMap;

// Internal dependencies
use crate::primitives::errors::ChoroplethError;

// ============================================================================
// Raw Value Input
// ============================================================================

/// Trait for containers of raw attribute values.
pub trait ObservationInput<T: Float> {
    /// Convert the input to a contiguous slice.
    fn as_observation_slice(&self) -> Result<&[T], ChoroplethError>;
}

impl<T: Float> ObservationInput<T> for [T] {
    fn as_observation_slice(&self) -> Result<&[T], ChoroplethError> {
        Ok(self)
    }
}

impl<T: Float> ObservationInput<T> for Vec<T> {
    fn as_observation_slice(&self) -> Result<&[T], ChoroplethError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> ObservationInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_observation_slice(&self) -> Result<&[T], ChoroplethError> {
        self.as_slice().ok_or_else(|| {
            ChoroplethError::InvalidInput("ndarray input must be contiguous in memory".to_string())
        })
    }
}

// ============================================================================
// Region Records
// ============================================================================

/// A region handed over by the boundary provider.
pub trait RegionRecord<T: Float> {
    /// Stable identifier.
    fn id(&self) -> &str;

    /// Display name; defaults to the identifier.
    fn name(&self) -> &str {
        self.id()
    }

    /// Numeric attribute under `key`, if present.
    fn attribute(&self, key: &str) -> Option<T>;
}

/// A region with an identifier, a display name and numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region<T> {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Numeric attributes by key.
    pub attributes: BTreeMap<String, T>,
}

impl<T: Float> Region<T> {
    /// Create a region with no attributes, named after its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            attributes: BTreeMap::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add or replace an attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: T) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}

impl<T: Float> RegionRecord<T> for Region<T> {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, key: &str) -> Option<T> {
        self.attributes.get(key).copied()
    }
}

impl<T: Float, R: RegionRecord<T> + ?Sized> RegionRecord<T> for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn attribute(&self, key: &str) -> Option<T> {
        (**self).attribute(key)
    }
}
