//! Layer 5: Engine
//!
//! ## Purpose
//!
//! This layer runs classifications and resolves their symbology. The executor
//! owns the clustering pipeline and its rayon-based passes; the symbology
//! module turns bands and a palette into colors and legends.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Classification driver and parallel passes.
pub mod executor;

/// Color lookup, legends and region styling.
pub mod symbology;
