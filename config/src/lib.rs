//! # Config Crate
//!
//! Centralized configuration constants for the vector mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, CORD_DEVIATION_SCENE_SCALE, MIN_CORD_DEVIATION};
//!
//! // Use EPSILON for floating-point comparisons and division guards
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // The tessellation heuristic scales density with scene coverage
//! let scene_ratio = 0.001;
//! let max_cord = (CORD_DEVIATION_SCENE_SCALE * scene_ratio).max(MIN_CORD_DEVIATION);
//! assert!(max_cord >= MIN_CORD_DEVIATION);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reference Compatible**: The tessellation heuristic coefficients match
//!   the reference renderer exactly and must not be retuned
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
