//! # choropleth
//!
//! Natural-breaks classification and symbology for choropleth maps.
//!
//! ## What it does
//!
//! Given one numeric attribute per region, the crate
//!
//! 1. extracts the valid observations (present, finite and greater than zero),
//! 2. partitions them into `k` contiguous classes minimising within-class
//!    variance (ckmeans, an exact Jenks natural breaks),
//! 3. maps any value to a palette color and derives legend entries.
//!
//! Missing, zero and negative values are never errors: they resolve to the
//! palette's missing color. Sparse, constant and empty data always produce a
//! usable (possibly degenerate) classification.
//!
//! ## Quick start
//!
//! ```rust
//! use choropleth::prelude::*;
//!
//! let rents = vec![100.0, 200.0, 300.0, 900.0, 950.0, 1000.0];
//!
//! let symbology = Choropleth::new()
//!     .classes(5)
//!     .adapter(Batch)
//!     .build()?
//!     .classify(&rents)?;
//!
//! assert_eq!(symbology.color_of(1000.0), symbology.scale().classes()[4]);
//! assert_eq!(symbology.color_of(0.0), symbology.scale().missing());
//! # Ok::<(), ChoroplethError>(())
//! ```
//!
//! ## Regions and layers
//!
//! ```rust
//! use choropleth::prelude::*;
//!
//! let counties = vec![
//!     Region::new("01001").with_name("Autauga").with_attribute("RENT", 850.0),
//!     Region::new("01003").with_name("Baldwin").with_attribute("RENT", 1020.0),
//!     Region::new("01005").with_name("Barbour"),
//! ];
//!
//! let layer = Choropleth::new()
//!     .adapter(Batch)
//!     .build()?
//!     .render(&counties, "RENT");
//!
//! assert_eq!(layer.regions[2].fill, layer.symbology.scale().missing());
//! assert!(layer.legend[0].is_missing());
//! # Ok::<(), ChoroplethError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API          (builder, adapter markers)
//!   ↓
//! Layer 6: Adapters     (batch, cycle, geojson)
//!   ↓
//! Layer 5: Engine       (executor, symbology)
//!   ↓
//! Layer 4: Evaluation   (diagnostics)
//!   ↓
//! Layer 3: Algorithms   (ckmeans, extraction)
//!   ↓
//! Layer 2: Math         (moments)
//!   ↓
//! Layer 1: Primitives   (errors, color, breaks)
//! ```
//!
//! ## Features
//!
//! * `cpu` (default): rayon-parallel sorting, row filling and styling, and
//!   `ndarray` input support.

#![deny(missing_docs)]

// Layer 1: Primitives
mod primitives;

// Layer 2: Math
mod math;

// Layer 3: Algorithms
mod algorithms;

// Layer 4: Evaluation
mod evaluation;

// Layer 5: Engine
mod engine;

// Layer 6: Adapters
mod adapters;

// Layer 7: API
mod api;

// Input abstractions
mod input;

/// Standard prelude.
pub mod prelude {
    pub use crate::adapters::batch::{BatchChoropleth, BatchChoroplethBuilder};
    pub use crate::adapters::cycle::{CycleChoropleth, CycleChoroplethBuilder, CycleTicket};
    pub use crate::adapters::geojson::{regions_from_reader, regions_from_str, DEFAULT_NAME_KEY};
    pub use crate::algorithms::extraction::{is_observation, ObservationSet};
    pub use crate::api::{Batch, Choropleth, ChoroplethBuilder, ChoroplethConfig, Cycle};
    pub use crate::engine::executor::DEFAULT_CLASSES;
    pub use crate::engine::symbology::{
        Band, ChoroplethLayer, LegendEntry, RegionStyle, Symbology,
    };
    pub use crate::evaluation::diagnostics::Diagnostics;
    pub use crate::input::{ObservationInput, Region, RegionRecord};
    pub use crate::primitives::breaks::{Break, BreakSet};
    pub use crate::primitives::color::{Color, ColorScale, BLUES, NO_DATA};
    pub use crate::primitives::errors::ChoroplethError;
}

/// Internal modules for advanced use and testing.
pub mod internals {
    /// Layer 1: value types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Layer 2: numeric helpers.
    pub mod math {
        pub use crate::math::*;
    }
    /// Layer 3: extraction and clustering.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Layer 4: diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Layer 5: executor and symbology.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Layer 6: adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
    /// Layer 7: builder and adapter markers.
    pub mod api {
        pub use crate::api::*;
    }
    /// Input abstractions.
    pub mod input {
        pub use crate::input::*;
    }
}
