//! Layer 3: Algorithms
//!
//! ## Purpose
//!
//! This layer implements the core logic of classification: extracting valid
//! observations from regions and partitioning them into natural-breaks groups.
//! It is orchestrated by the engine layer.
//!
//! ## Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Optimal 1-D clustering (ckmeans dynamic program).
pub mod ckmeans;

/// Observation extraction and the validity filter.
pub mod extraction;
