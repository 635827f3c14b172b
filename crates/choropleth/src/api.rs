//! High-level API for choropleth classification.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the class count, palette and execution mode, and hands
//! off to an execution adapter (Batch or Cycle).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Marker types select the adapter builder.
//! * **Validated**: Parameters are validated when the adapter is built.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: `Batch` classifies on demand; `Cycle` keeps the
//!   latest classification of a sequence of render cycles.
//! * **Configuration Flow**: `Choropleth::new()`, setters, `.adapter(..)`,
//!   `.build()`.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ChoroplethBuilder`](crate::api::ChoroplethBuilder) via `Choropleth::new()`.
//! 2. Chain configuration methods (`.classes()`, `.palette()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchChoroplethBuilder;
use crate::adapters::cycle::CycleChoroplethBuilder;
use crate::engine::executor::DEFAULT_CLASSES;
use crate::primitives::color::ColorScale;
use crate::primitives::errors::ChoroplethError;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Cycle};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Conversion from the shared builder into an adapter-specific builder.
pub trait ChoroplethAdapter {
    /// Adapter-specific builder.
    type Output;

    /// Convert the shared configuration.
    fn convert(builder: ChoroplethBuilder) -> Self::Output;
}

/// Marker for one-shot classification.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl ChoroplethAdapter for Batch {
    type Output = BatchChoroplethBuilder;

    fn convert(builder: ChoroplethBuilder) -> Self::Output {
        // Batch defaults to parallel when the cpu feature is present
        let parallel = builder.parallel.unwrap_or(cfg!(feature = "cpu"));
        BatchChoroplethBuilder {
            base: ChoroplethBuilder {
                parallel: Some(parallel),
                ..builder
            },
        }
    }
}

/// Marker for superseding render cycles.
#[derive(Debug, Clone, Copy)]
pub struct Cycle;

impl ChoroplethAdapter for Cycle {
    type Output = CycleChoroplethBuilder;

    fn convert(builder: ChoroplethBuilder) -> Self::Output {
        let parallel = builder.parallel.unwrap_or(cfg!(feature = "cpu"));
        CycleChoroplethBuilder {
            base: ChoroplethBuilder {
                parallel: Some(parallel),
                ..builder
            },
        }
    }
}

// ============================================================================
// Shared Builder
// ============================================================================

/// Validated settings shared by every adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethConfig {
    /// Number of classes.
    pub classes: usize,
    /// Palette with one color per class.
    pub palette: ColorScale,
    /// Use parallel passes.
    pub parallel: bool,
}

/// Fluent builder for choropleth classification.
#[derive(Debug, Clone, Default)]
pub struct ChoroplethBuilder {
    /// Number of classes; `None` means the default of 5.
    pub classes: Option<usize>,
    /// Palette; `None` means the default blue ramp.
    pub palette: Option<ColorScale>,
    /// Parallel execution; `None` leaves the choice to the adapter.
    pub parallel: Option<bool>,
    /// First configuration error, reported at build time.
    pub deferred_error: Option<ChoroplethError>,
}

impl ChoroplethBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of classes.
    pub fn classes(mut self, classes: usize) -> Self {
        self.classes = Some(classes);
        self
    }

    /// Set the palette.
    pub fn palette(mut self, palette: ColorScale) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Set the palette from hex tokens; parse errors surface at build time.
    pub fn palette_hex<S: AsRef<str>>(mut self, classes: &[S], missing: &str) -> Self {
        match ColorScale::from_hex(classes, missing) {
            Ok(scale) => self.palette = Some(scale),
            Err(err) => {
                self.deferred_error.get_or_insert(err);
            }
        }
        self
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Select an execution adapter.
    pub fn adapter<A: ChoroplethAdapter>(self, _adapter: A) -> A::Output {
        A::convert(self)
    }

    /// Validate the settings.
    pub fn validate(&self) -> Result<ChoroplethConfig, ChoroplethError> {
        if let Some(ref err) = self.deferred_error {
            return Err(err.clone());
        }

        let classes = self.classes.unwrap_or(DEFAULT_CLASSES);
        if classes == 0 {
            return Err(ChoroplethError::InvalidClassCount(classes));
        }

        let palette = self.palette.clone().unwrap_or_default();
        if palette.len() != classes {
            return Err(ChoroplethError::PaletteMismatch {
                expected: classes,
                actual: palette.len(),
            });
        }

        Ok(ChoroplethConfig {
            classes,
            palette,
            parallel: self.parallel.unwrap_or(false),
        })
    }
}

/// Entry point alias used by the prelude.
pub type Choropleth = ChoroplethBuilder;

