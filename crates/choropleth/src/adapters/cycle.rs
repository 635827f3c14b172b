//! Cycle adapter for superseding render cycles.
//!
//! ## Purpose
//!
//! This module keeps the current classification of a map whose attribute or
//! data may change while an earlier classification is still running. Each
//! render cycle takes a ticket; when it completes, its result replaces the
//! published one only if no newer cycle has already published.
//!
//! ## Design notes
//!
//! * **Replace, don't merge**: A published `Symbology` is swapped whole.
//! * **Snapshots**: Readers receive an `Arc`, so a result in use is never
//!   mutated or partially replaced.
//! * **No cancellation**: Stale cycles run to completion and are discarded.
//!
//! ## Invariants
//!
//! * Ticket generations are strictly increasing.
//! * The published generation never decreases.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::result::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

// Internal dependencies
use crate::adapters::batch::BatchChoropleth;
use crate::api::ChoroplethBuilder;
use crate::engine::symbology::{ChoroplethLayer, Symbology};
use crate::input::RegionRecord;
use crate::primitives::color::ColorScale;
use crate::primitives::errors::ChoroplethError;

// ============================================================================
// Cycle Builder
// ============================================================================

/// Builder for the cycle classifier.
#[derive(Debug, Clone)]
pub struct CycleChoroplethBuilder {
    /// Shared configuration.
    pub base: ChoroplethBuilder,
}

impl CycleChoroplethBuilder {
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

    /// Build the cycle classifier.
    pub fn build<T: Float>(self) -> Result<CycleChoropleth<T>, ChoroplethError> {
        let config = self.base.validate()?;
        Ok(CycleChoropleth {
            classifier: BatchChoropleth::from_config(config),
            issued: AtomicU64::new(0),
            current: RwLock::new(None),
        })
    }
}

// ============================================================================
// Cycle Classifier
// ============================================================================

/// Handle for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleTicket {
    generation: u64,
}

impl CycleTicket {
    /// Generation number; later cycles have larger numbers.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// A layer published by a render cycle.
#[derive(Debug)]
struct Published<T> {
    generation: u64,
    layer: Arc<ChoroplethLayer<T>>,
}

/// Classifier that keeps the most recent render cycle's result.
#[derive(Debug)]
pub struct CycleChoropleth<T> {
    classifier: BatchChoropleth,
    issued: AtomicU64,
    current: RwLock<Option<Published<T>>>,
}

impl<T: Float + Debug + Send + Sync> CycleChoropleth<T> {
    /// Start a render cycle.
    pub fn begin(&self) -> CycleTicket {
        CycleTicket {
            generation: self.issued.fetch_add(1, Ordering::SeqCst) + 1,
        }
    }

    /// Classify and style `regions` for `ticket`, then publish the layer.
    ///
    /// Returns the layer if it was published, or `None` when a newer cycle
    /// published first.
    pub fn complete<R>(
        &self,
        ticket: CycleTicket,
        regions: &[R],
        key: &str,
    ) -> Option<Arc<ChoroplethLayer<T>>>
    where
        R: RegionRecord<T> + Sync,
    {
        let layer = Arc::new(self.classifier.render(regions, key));
        self.publish(ticket, layer)
    }

    /// Run a full cycle: take a ticket, classify and publish.
    pub fn refresh<R>(&self, regions: &[R], key: &str) -> Option<Arc<ChoroplethLayer<T>>>
    where
        R: RegionRecord<T> + Sync,
    {
        let ticket = self.begin();
        self.complete(ticket, regions, key)
    }

    /// Publish `layer` unless a newer cycle already has.
    pub fn publish(
        &self,
        ticket: CycleTicket,
        layer: Arc<ChoroplethLayer<T>>,
    ) -> Option<Arc<ChoroplethLayer<T>>> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(published) = current.as_ref() {
            if published.generation >= ticket.generation {
                debug!(
                    stale = ticket.generation,
                    published = published.generation,
                    "discarding superseded render cycle"
                );
                return None;
            }
        }

        *current = Some(Published {
            generation: ticket.generation,
            layer: Arc::clone(&layer),
        });
        Some(layer)
    }

    /// Snapshot of the published layer.
    pub fn current(&self) -> Option<Arc<ChoroplethLayer<T>>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|published| Arc::clone(&published.layer))
    }

    /// Snapshot of the published symbology.
    pub fn symbology(&self) -> Option<Symbology<T>> {
        self.current().map(|layer| layer.symbology.clone())
    }

    /// Generation of the published layer, 0 if none.
    pub fn published_generation(&self) -> u64 {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, |published| published.generation)
    }
}
