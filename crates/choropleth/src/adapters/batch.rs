//! Batch adapter for one-shot classification.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter. It classifies a complete
//! observation set in memory and returns a `Symbology`, or styles a whole
//! region collection into a `ChoroplethLayer`.
//!
//! ## Design notes
//!
//! * **Processing**: Extracts, classifies and resolves in a single pass.
//! * **Delegation**: Delegates computation to the execution engine.
//! * **Parallelism**: Optional rayon passes for sorting, row filling and styling.
//! * **Generics**: Generic over `Float` types at call time.
//!
//! ## Key concepts
//!
//! * **Batch Processing**: Validates at build, then every call is infallible
//!   for region input.
//! * **Builder Pattern**: Fluent API for configuration with sensible defaults.
//!
//! ## Invariants
//!
//! * Region styles are returned in input order.
//! * The same observations always produce the same bands.
//!
//! ## Non-goals
//!
//! * This adapter does not retain results between calls (use the cycle adapter).

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;
use tracing::trace;

// Internal dependencies
use crate::algorithms::extraction::ObservationSet;
use crate::api::{ChoroplethBuilder, ChoroplethConfig};
use crate::engine::executor::{style_pass_parallel, ClassifierExecutor};
use crate::engine::symbology::{ChoroplethLayer, Symbology};
use crate::input::{ObservationInput, RegionRecord};
use crate::primitives::color::ColorScale;
use crate::primitives::errors::ChoroplethError;

// ============================================================================
// Batch Builder
// ============================================================================

/// Builder for the batch classifier.
#[derive(Debug, Clone)]
pub struct BatchChoroplethBuilder {
    /// Shared configuration.
    pub base: ChoroplethBuilder,
}

impl Default for BatchChoroplethBuilder {
    fn default() -> Self {
        Self {
            base: ChoroplethBuilder::new().parallel(cfg!(feature = "cpu")),
        }
    }
}

impl BatchChoroplethBuilder {
    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base.parallel = Some(parallel);
        self
    }

    /// Set the number of classes.
    pub fn classes(mut self, classes: usize) -> Self {
        self.base = self.base.classes(classes);
        self
    }

    /// Set the palette.
    pub fn palette(mut self, palette: ColorScale) -> Self {
        self.base = self.base.palette(palette);
        self
    }

    /// Build the batch classifier.
    pub fn build(self) -> Result<BatchChoropleth, ChoroplethError> {
        let config = self.base.validate()?;
        Ok(BatchChoropleth::from_config(config))
    }
}

// ============================================================================
// Batch Classifier
// ============================================================================

/// Validated batch classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchChoropleth {
    config: ChoroplethConfig,
}

impl BatchChoropleth {
    pub(crate) fn from_config(config: ChoroplethConfig) -> Self {
        Self { config }
    }

    /// Validated configuration.
    pub fn config(&self) -> &ChoroplethConfig {
        &self.config
    }

    fn executor(&self) -> ClassifierExecutor {
        ClassifierExecutor::new(self.config.classes, self.config.parallel)
    }

    /// Classify raw attribute values. Invalid values are treated as missing.
    pub fn classify<T, I>(&self, values: &I) -> Result<Symbology<T>, ChoroplethError>
    where
        T: Float + Debug + Send + Sync,
        I: ObservationInput<T> + ?Sized,
    {
        let observations = ObservationSet::from_input(values)?;
        Ok(self.classify_observations(&observations))
    }

    /// Classify an already extracted observation set.
    pub fn classify_observations<T>(&self, observations: &ObservationSet<T>) -> Symbology<T>
    where
        T: Float + Debug + Send + Sync,
    {
        let classification = self.executor().classify(observations.as_slice());
        Symbology::new(classification, self.config.palette.clone())
    }

    /// Classify attribute `key` across `regions`.
    pub fn classify_regions<T, R>(&self, regions: &[R], key: &str) -> Symbology<T>
    where
        T: Float + Debug + Send + Sync,
        R: RegionRecord<T>,
    {
        let observations = ObservationSet::from_regions(regions, key);
        trace!(
            regions = regions.len(),
            observations = observations.len(),
            attribute = key,
            "extracted observations"
        );
        self.classify_observations(&observations)
    }

    /// Classify attribute `key` and style every region with the result.
    pub fn render<T, R>(&self, regions: &[R], key: &str) -> ChoroplethLayer<T>
    where
        T: Float + Debug + Send + Sync,
        R: RegionRecord<T> + Sync,
    {
        let symbology = self.classify_regions(regions, key);
        let styles = if self.config.parallel {
            style_pass_parallel(&symbology, regions, key)
        } else {
            symbology.style_regions(regions, key)
        };
        let legend = symbology.legend_entries();

        ChoroplethLayer {
            attribute: key.to_string(),
            symbology,
            regions: styles,
            legend,
        }
    }
}
