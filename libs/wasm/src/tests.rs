//! Tests for the WASM-facing pipeline helpers.

use super::*;

const DEFAULTS: &str = "{}";

fn gray_rgba(values: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(values.len() * 4);
    for &v in values {
        data.extend_from_slice(&[v, v, v, 255]);
    }
    data
}

#[test]
fn single_ink_pixel_produces_reference_stl() {
    // One black pixel, defaults: 12 triangles, 684 bytes
    let bytes = generate_stl_internal(&gray_rgba(&[0]), 1, 1, DEFAULTS).expect("export succeeds");
    assert_eq!(bytes.len(), 684);
    assert_eq!(
        u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]),
        12
    );
}

#[test]
fn all_background_produces_closed_slab() {
    // 2x2 white: 16 triangles, 884 bytes
    let bytes =
        generate_stl_internal(&gray_rgba(&[255; 4]), 2, 2, DEFAULTS).expect("export succeeds");
    assert_eq!(bytes.len(), 884);
}

#[test]
fn request_overrides_are_honored() {
    // Inverting turns the white pixel into ink and raises it
    let plain = generate_stl_internal(&gray_rgba(&[255]), 1, 1, DEFAULTS).expect("export");
    let inverted =
        generate_stl_internal(&gray_rgba(&[255]), 1, 1, r#"{"invert":true}"#).expect("export");
    // Same closed box either way at 1x1, but both still full layouts
    assert_eq!(plain.len(), 684);
    assert_eq!(inverted.len(), 684);

    let preview = process_preview_internal(&gray_rgba(&[255]), 1, 1, r#"{"invert":true}"#)
        .expect("preview succeeds");
    assert_eq!(preview.ink_count(), 1);
}

#[test]
fn preview_is_two_color_rgba() {
    let preview = process_preview_internal(&gray_rgba(&[0, 255]), 2, 1, DEFAULTS)
        .expect("preview succeeds");
    assert_eq!(preview.width(), 2);
    assert_eq!(preview.height(), 1);
    assert_eq!(preview.ink_count(), 1);
    assert_eq!(preview.rgba(), vec![0, 0, 0, 255, 255, 255, 255, 255]);
}

#[test]
fn malformed_request_is_rejected() {
    let result = generate_stl_internal(&gray_rgba(&[0]), 1, 1, "{ not json");
    assert!(matches!(result, Err(ExportError::BadRequest(_))));
}

#[test]
fn empty_image_is_rejected() {
    let result = generate_stl_internal(&[], 0, 1, DEFAULTS);
    assert!(matches!(result, Err(ExportError::InvalidInput(_))));
}

#[test]
fn buffer_dimension_mismatch_is_rejected() {
    let result = process_preview_internal(&gray_rgba(&[0]), 2, 2, DEFAULTS);
    assert!(matches!(result, Err(ExportError::InvalidInput(_))));
}

#[test]
fn default_request_json_parses_back() {
    let json = default_request();
    let request: StampRequest = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(request, StampRequest::default());
}

#[test]
fn target_width_matches_reference() {
    assert_eq!(target_width(35.0, 0.4), 88);
}
