//! Layer 6: Adapters
//!
//! ## Purpose
//!
//! This layer provides execution adapters over the engine: `batch` for
//! one-shot classification and `cycle` for a sequence of render cycles where
//! newer results supersede older ones. It also hosts GeoJSON intake.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// One-shot classification.
pub mod batch;

/// Superseding render cycles.
pub mod cycle;

/// GeoJSON feature-collection intake.
pub mod geojson;
