//! Symbology resolution.
//!
//! ## Purpose
//!
//! This module maps attribute values to display colors using a classification
//! and a palette, and derives the artifacts a rendering layer needs: region
//! fills, tooltip values and legend entries.
//!
//! ## Design notes
//!
//! * **Indexed search**: A value resolves to the highest band whose `low` it
//!   meets, found by binary search over the ascending bands.
//! * **Pure**: Every lookup is a function of the value, the bands and the palette.
//!
//! ## Key concepts
//!
//! * **Band**: Either a class index or `Missing`.
//! * **Tie-break**: A value equal to a shared boundary resolves to the higher band.
//! * **Out of range**: Valid values below every band resolve to band 0.
//!
//! ## Invariants
//!
//! * The palette holds one class color per requested class.
//! * The legend lists the missing entry first, then classes ascending.

// External dependencies
use num_traits::Float;
use serde::Serialize;

// Internal dependencies
use crate::algorithms::extraction::observation;
use crate::engine::executor::Classification;
use crate::evaluation::diagnostics::Diagnostics;
use crate::input::RegionRecord;
use crate::primitives::breaks::BreakSet;
use crate::primitives::color::{Color, ColorScale};

// ============================================================================
// Output Types
// ============================================================================

/// The band a value falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    /// Class index, 0 being the lowest band.
    Class(usize),
    /// No valid observation.
    Missing,
}

/// One legend row: a color and the bounds of its band.
///
/// The missing-data entry has no bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegendEntry<T> {
    /// Swatch color.
    pub color: Color,
    /// Lower bound of the band.
    pub low: Option<T>,
    /// Upper bound of the band.
    pub high: Option<T>,
}

impl<T> LegendEntry<T> {
    /// True for the missing-data entry.
    pub fn is_missing(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Styling of one region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionStyle<T> {
    /// Region identifier.
    pub id: String,
    /// Region display name.
    pub name: String,
    /// Fill color.
    pub fill: Color,
    /// Band the region falls into.
    pub band: Band,
    /// Attribute value shown in tooltips; `None` means missing.
    pub value: Option<T>,
}

/// Everything needed to draw one attribute: bands, region styles and legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethLayer<T> {
    /// Attribute key the layer was built from.
    pub attribute: String,
    /// Resolver used for the layer.
    pub symbology: Symbology<T>,
    /// Per-region styling in input order.
    pub regions: Vec<RegionStyle<T>>,
    /// Legend entries, missing entry first.
    pub legend: Vec<LegendEntry<T>>,
}

// ============================================================================
// Symbology
// ============================================================================

/// A classification paired with the palette that colors it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbology<T> {
    breaks: BreakSet<T>,
    scale: ColorScale,
    diagnostics: Diagnostics<T>,
}

impl<T: Float> Symbology<T> {
    /// Pair a classification with its palette.
    pub fn new(classification: Classification<T>, scale: ColorScale) -> Self {
        Self {
            breaks: classification.breaks,
            scale,
            diagnostics: classification.diagnostics,
        }
    }

    /// Bands in ascending order.
    pub fn breaks(&self) -> &BreakSet<T> {
        &self.breaks
    }

    /// Palette.
    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Fit statistics of the classification.
    pub fn diagnostics(&self) -> &Diagnostics<T> {
        &self.diagnostics
    }

    /// Band of `value`; absent or invalid values are `Missing`.
    pub fn band_for(&self, value: Option<T>) -> Band {
        observation(value)
            .and_then(|v| self.breaks.band_index(v))
            .map_or(Band::Missing, Band::Class)
    }

    /// Display color of `value`.
    pub fn color_for(&self, value: Option<T>) -> Color {
        self.band_color(self.band_for(value))
    }

    /// Display color of a raw value, where zero, negative and non-finite
    /// values stand for missing data.
    pub fn color_of(&self, value: T) -> Color {
        self.color_for(Some(value))
    }

    /// Color assigned to `band`.
    pub fn band_color(&self, band: Band) -> Color {
        match band {
            Band::Class(index) => self.scale.class_color(index),
            Band::Missing => self.scale.missing(),
        }
    }

    /// Legend entries: the missing entry, then one entry per band ascending.
    pub fn legend_entries(&self) -> Vec<LegendEntry<T>> {
        let mut entries = Vec::with_capacity(self.breaks.len() + 1);
        entries.push(LegendEntry {
            color: self.scale.missing(),
            low: None,
            high: None,
        });
        entries.extend(self.breaks.iter().map(|b| LegendEntry {
            color: self
                .breaks
                .band_index(b.low)
                .map_or(self.scale.missing(), |i| self.scale.class_color(i)),
            low: Some(b.low),
            high: Some(b.high),
        }));
        entries
    }

    /// Style a single region by attribute `key`.
    pub fn style<R: RegionRecord<T> + ?Sized>(&self, region: &R, key: &str) -> RegionStyle<T> {
        let value = observation(region.attribute(key));
        let band = self.band_for(value);
        RegionStyle {
            id: region.id().to_string(),
            name: region.name().to_string(),
            fill: self.band_color(band),
            band,
            value,
        }
    }

    /// Style every region in input order.
    pub fn style_regions<R: RegionRecord<T>>(&self, regions: &[R], key: &str) -> Vec<RegionStyle<T>> {
        regions.iter().map(|region| self.style(region, key)).collect()
    }
}
