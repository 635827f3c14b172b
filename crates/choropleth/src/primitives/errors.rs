//! Error types for choropleth classification.
//!
//! ## Purpose
//!
//! This module defines the single error type surfaced by the crate. Data
//! irregularities (sparse, constant or empty observations) are not errors and
//! never reach this type; only caller mistakes and malformed boundary input do.
//!
//! ## Design notes
//!
//! * **Typed**: One variant per failure, carrying the offending value.
//! * **Cloneable**: Builders can hold and replay a validation failure.
//!
//! ## Non-goals
//!
//! * This module does not model network or I/O failures of boundary providers.

use thiserror::Error;

/// Errors raised while configuring a classifier or ingesting boundary data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoroplethError {
    /// The requested class count cannot produce any band.
    #[error("class count must be at least 1, got {0}")]
    InvalidClassCount(usize),

    /// The palette does not provide exactly one color per class.
    #[error("palette provides {actual} class colors but {expected} classes were requested")]
    PaletteMismatch {
        /// Number of classes requested.
        expected: usize,
        /// Number of class colors in the palette.
        actual: usize,
    },

    /// A palette was built without any class colors.
    #[error("palette must contain at least one class color")]
    EmptyPalette,

    /// A color token could not be parsed.
    #[error("invalid color token `{0}`: expected #rgb or #rrggbb")]
    InvalidColor(String),

    /// Input data could not be viewed as a contiguous slice.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A GeoJSON document could not be read as a feature collection.
    #[error("invalid GeoJSON: {0}")]
    InvalidGeoJson(String),
}
