//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the numeric building blocks of classification, chiefly
//! constant-time within-group variance queries.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```
//!

/// Prefix sums and within-group sum of squared deviations.
pub mod moments;
