//! # Configuration Constants
//!
//! Centralized constants for the stamp pipeline. Luminance weights,
//! geometry defaults, and the binary STL layout are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Luminance**: Grayscale conversion weights
//! - **Geometry**: Default stamp dimensions in millimeters
//! - **STL Layout**: Byte offsets and sizes of the binary STL format
//! - **Tracing**: Settings handed to the external vector tracer

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Returns true if two values are equal within [`EPSILON`].
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if a value is zero within [`EPSILON`].
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// LUMINANCE CONSTANTS (Rec. 601)
// =============================================================================

/// Red channel weight for grayscale conversion, in per-mille.
///
/// The pipeline uses the Rec. 601 luma transform
/// `L = 0.299 R + 0.587 G + 0.114 B` before thresholding. The weights
/// are stored as integer per-mille values and summed in integer
/// arithmetic so that an equal-channel pixel lands on an exact integer
/// luminance; a naive floating-point sum puts gray 128 at
/// 127.99999999999999, on the wrong side of the strict threshold
/// comparison.
pub const LUMA_WEIGHT_R: u32 = 299;

/// Green channel weight for grayscale conversion, in per-mille.
pub const LUMA_WEIGHT_G: u32 = 587;

/// Blue channel weight for grayscale conversion, in per-mille.
pub const LUMA_WEIGHT_B: u32 = 114;

/// Denominator for the per-mille luminance weights.
pub const LUMA_SCALE: u32 = 1000;

/// Default luminance cutoff for ink detection.
///
/// Pixels with luminance strictly below the threshold are treated as ink.
/// A pixel whose luminance equals the threshold is background.
pub const DEFAULT_THRESHOLD: u8 = 128;

// =============================================================================
// GEOMETRY DEFAULTS (millimeters)
// =============================================================================

/// Default physical size of one grid cell.
///
/// One pixel of the occupancy grid maps to one nozzle width on an FDM
/// printer, so the default matches the common 0.4 mm nozzle.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_PIXEL_SIZE_MM;
///
/// // A 35 mm wide stamp resolves to 35 / 0.4 mm per pixel
/// let pixels = (35.0_f64 / DEFAULT_PIXEL_SIZE_MM).round();
/// assert_eq!(pixels, 88.0);
/// ```
pub const DEFAULT_PIXEL_SIZE_MM: f64 = 0.4;

/// Default height of the flat base plate.
pub const DEFAULT_BASE_HEIGHT_MM: f64 = 2.0;

/// Default height of the raised ink relief above the base.
pub const DEFAULT_EXTRUSION_HEIGHT_MM: f64 = 1.0;

/// Default physical width of the exported stamp.
pub const DEFAULT_TARGET_SIZE_MM: f64 = 35.0;

// =============================================================================
// BINARY STL LAYOUT
// =============================================================================

/// Size of the binary STL header in bytes.
///
/// The header content is unconstrained by readers; this pipeline leaves it
/// zero-filled.
pub const STL_HEADER_BYTES: usize = 80;

/// Size of one encoded triangle record in bytes.
///
/// 12 bytes normal (3 x f32) + 36 bytes vertices (9 x f32) + 2 bytes
/// attribute count (u16, always 0).
pub const STL_TRIANGLE_BYTES: usize = 50;

/// Maximum number of triangles representable in the STL count field.
///
/// The triangle count is an unsigned 32-bit little-endian integer at byte
/// offset 80. Exports above this limit must fail, never truncate.
pub const MAX_STL_TRIANGLES: usize = u32::MAX as usize;

// =============================================================================
// VECTOR TRACER SETTINGS
// =============================================================================

/// Number of color classes the external vector tracer quantizes to.
///
/// The occupancy grid is strictly two-valued (ink / background).
pub const TRACE_COLOR_CLASSES: u32 = 2;

/// Paths with fewer nodes than this are dropped by the tracer.
///
/// Kept minimal so only single-pixel specks are suppressed.
pub const TRACE_SPECK_THRESHOLD: u32 = 1;
