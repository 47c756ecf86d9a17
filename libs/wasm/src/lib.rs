//! WASM-facing entry points for the stamp pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `_internal` helpers to
//! avoid depending on a JS host.
//!
//! The host owns everything outside pure computation: image decoding and
//! resizing, file saving, the vector-tracing library on the SVG path,
//! and debouncing of rapid slider changes. Each entry point receives a
//! fully-parameterized request and holds no state between calls.

use stamp_raster::{produce, OccupancyGrid, PixelGrid};
use wasm_bindgen::prelude::*;

mod error;
mod export;
mod request;

pub use error::ExportError;
pub use export::{export_stl, export_svg};
pub use request::StampRequest;

#[cfg(target_arch = "wasm32")]
pub use wasm_bindgen_rayon::init_thread_pool;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "stamp-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default request as a JSON string.
///
/// Hosts can use this to seed their settings UI and send back partial
/// overrides.
#[wasm_bindgen]
pub fn default_request() -> String {
    serde_json::to_string(&StampRequest::default()).unwrap_or_else(|_| "{}".to_string())
}

/// Returns the pixel width the host should decode the source image at
/// for a given physical stamp width and pixel pitch.
///
/// # Examples
/// ```
/// assert_eq!(stamp_wasm::target_width(35.0, 0.4), 88);
/// ```
#[wasm_bindgen]
pub fn target_width(target_size_mm: f64, pixel_size_mm: f64) -> u32 {
    stamp_raster::target_width_px(target_size_mm, pixel_size_mm)
}

/// Thresholded preview returned to JavaScript.
///
/// Carries the 2-color RGBA rendering of the occupancy grid, which the
/// host paints into a canvas for preview and feeds to the vector-tracing
/// library on the SVG export path.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PreviewHandle {
    width: u32,
    height: u32,
    ink_count: u32,
    rgba: Vec<u8>,
}

#[wasm_bindgen]
impl PreviewHandle {
    /// Returns the grid width in cells.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of ink cells.
    #[wasm_bindgen(getter)]
    pub fn ink_count(&self) -> u32 {
        self.ink_count
    }

    /// Returns the 2-color image as a Uint8Array (RGBA, 4 bytes/pixel).
    pub fn rgba(&self) -> Vec<u8> {
        self.rgba.clone()
    }

    /// Returns the 2-color image as a Uint8ClampedArray, the element
    /// type `ImageData` expects.
    pub fn rgba_clamped(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(&self.rgba[..])
    }
}

impl PreviewHandle {
    /// Creates a handle from a produced occupancy grid.
    fn from_grid(grid: &OccupancyGrid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            ink_count: grid.ink_count() as u32,
            rgba: grid.to_rgba(),
        }
    }
}

/// Thresholds a decoded RGBA image and returns the 2-color preview.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the input is malformed.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const preview = process_preview(rgba, w, h, '{"threshold":128}');
/// // ctx.putImageData(new ImageData(preview.rgba_clamped(), preview.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn process_preview(
    rgba: &[u8],
    width: u32,
    height: u32,
    request_json: &str,
) -> Result<PreviewHandle, JsValue> {
    process_preview_internal(rgba, width, height, request_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`process_preview`] exposing Rust error types.
pub fn process_preview_internal(
    rgba: &[u8],
    width: u32,
    height: u32,
    request_json: &str,
) -> Result<PreviewHandle, ExportError> {
    let request: StampRequest = serde_json::from_str(request_json)?;
    let grid = occupancy_for(rgba, width, height, &request)?;
    Ok(PreviewHandle::from_grid(&grid))
}

/// Runs the full mesh path and returns the binary STL bytes.
///
/// The host writes the bytes verbatim to a `.stl`-suffixed file. On any
/// error nothing is returned, so no partial file can be written.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the input is malformed or the mesh exceeds the STL count field.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const bytes = generate_stl(rgba, w, h, JSON.stringify(settings));
/// // saveAs(new Blob([bytes]), "stamp.stl");
/// ```
#[wasm_bindgen]
pub fn generate_stl(
    rgba: &[u8],
    width: u32,
    height: u32,
    request_json: &str,
) -> Result<Vec<u8>, JsValue> {
    generate_stl_internal(rgba, width, height, request_json)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only twin of [`generate_stl`] exposing Rust error types.
pub fn generate_stl_internal(
    rgba: &[u8],
    width: u32,
    height: u32,
    request_json: &str,
) -> Result<Vec<u8>, ExportError> {
    let request: StampRequest = serde_json::from_str(request_json)?;
    let grid = occupancy_for(rgba, width, height, &request)?;
    export_stl(&grid, &request.relief_params())
}

/// Shared upstream stage of both entry points.
fn occupancy_for(
    rgba: &[u8],
    width: u32,
    height: u32,
    request: &StampRequest,
) -> Result<OccupancyGrid, ExportError> {
    let pixels = PixelGrid::from_rgba(width, height, rgba.to_vec())?;
    Ok(produce(&pixels, &request.threshold_params())?)
}

#[cfg(test)]
mod tests;
