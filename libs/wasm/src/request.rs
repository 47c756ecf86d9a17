//! # Stamp Request
//!
//! The fully-parameterized request object for one processing run. The
//! core has no notion of "current settings": the host assembles a request
//! per call (debouncing rapid slider changes is its policy, not ours) and
//! every pipeline function receives everything it needs as arguments.

use config::constants::{
    DEFAULT_BASE_HEIGHT_MM, DEFAULT_EXTRUSION_HEIGHT_MM, DEFAULT_PIXEL_SIZE_MM,
    DEFAULT_TARGET_SIZE_MM, DEFAULT_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use stamp_mesh::ReliefParams;
use stamp_raster::ThresholdParams;

/// The recognized configuration surface, JSON-serializable.
///
/// Every field has a default, so hosts may send a partial object:
///
/// ```json
/// { "threshold": 100, "invert": true }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampRequest {
    /// Luminance cutoff in `[0, 255]`; pixels strictly below are ink.
    pub threshold: u8,
    /// Flips ink polarity.
    pub invert: bool,
    /// Reserved denoising strength; accepted but currently a no-op.
    pub smoothing: u8,
    /// Physical width of the exported stamp, `> 0`. Drives the pixel
    /// resolution the host should decode at (see
    /// [`stamp_raster::target_width_px`]).
    pub target_size_mm: f64,
    /// Height of the flat base plate, `>= 0`.
    pub base_height_mm: f64,
    /// Height of the ink relief above the base, `>= 0`.
    pub extrusion_height_mm: f64,
    /// Physical size of one grid cell, `> 0`.
    pub pixel_size_mm: f64,
}

impl Default for StampRequest {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            invert: false,
            smoothing: 0,
            target_size_mm: DEFAULT_TARGET_SIZE_MM,
            base_height_mm: DEFAULT_BASE_HEIGHT_MM,
            extrusion_height_mm: DEFAULT_EXTRUSION_HEIGHT_MM,
            pixel_size_mm: DEFAULT_PIXEL_SIZE_MM,
        }
    }
}

impl StampRequest {
    /// Returns the occupancy-production slice of the request.
    pub fn threshold_params(&self) -> ThresholdParams {
        ThresholdParams {
            threshold: self.threshold,
            invert: self.invert,
            smoothing: self.smoothing,
        }
    }

    /// Returns the relief-geometry slice of the request.
    pub fn relief_params(&self) -> ReliefParams {
        ReliefParams {
            base_height_mm: self.base_height_mm,
            extrusion_height_mm: self.extrusion_height_mm,
            pixel_size_mm: self.pixel_size_mm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_workflow() {
        let request = StampRequest::default();
        assert_eq!(request.threshold, 128);
        assert!(!request.invert);
        assert_eq!(request.base_height_mm, 2.0);
        assert_eq!(request.extrusion_height_mm, 1.0);
        assert_eq!(request.pixel_size_mm, 0.4);
        assert_eq!(request.target_size_mm, 35.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let request: StampRequest =
            serde_json::from_str(r#"{ "threshold": 100, "invert": true }"#).unwrap();
        assert_eq!(request.threshold, 100);
        assert!(request.invert);
        assert_eq!(request.pixel_size_mm, 0.4);
    }

    #[test]
    fn test_roundtrip() {
        let request = StampRequest {
            threshold: 42,
            invert: true,
            smoothing: 3,
            target_size_mm: 20.0,
            base_height_mm: 1.0,
            extrusion_height_mm: 0.5,
            pixel_size_mm: 0.2,
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: StampRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request, back);
    }

    #[test]
    fn test_param_slices() {
        let request = StampRequest::default();
        assert_eq!(request.threshold_params(), ThresholdParams::default());
        assert_eq!(request.relief_params(), ReliefParams::default());
    }
}
