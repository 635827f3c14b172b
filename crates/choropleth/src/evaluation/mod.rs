//! Layer 4: Evaluation
//!
//! ## Purpose
//!
//! This layer provides post-classification statistics describing how well the
//! chosen breaks fit the observations.
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
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Goodness of variance fit and per-band counts.
pub mod diagnostics;
