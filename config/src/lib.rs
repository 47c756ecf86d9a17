//! # Config Crate
//!
//! Centralized configuration constants for the stamp pipeline. All magic
//! numbers and tunable defaults are defined here to ensure consistency
//! across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_THRESHOLD, DEFAULT_PIXEL_SIZE_MM};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Pipeline defaults match the reference stamp workflow
//! assert_eq!(DEFAULT_THRESHOLD, 128);
//! assert_eq!(DEFAULT_PIXEL_SIZE_MM, 0.4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Print-Ready Defaults**: Values tuned for a 0.4 mm FDM nozzle
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
