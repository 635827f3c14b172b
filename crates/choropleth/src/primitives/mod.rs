//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer provides the foundational value types shared by every other
//! layer: errors, color tokens and palettes, and classification bands.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Classification bands (`Break`, `BreakSet`).
pub mod breaks;

/// Color tokens and palettes.
pub mod color;

/// Error types.
pub mod errors;
