//! Tests for center-point bounding box construction.

use geo_common::bbox::BoundingBox;
use geo_common::error::GeoError;

// ============================================================================
// Symmetry
// ============================================================================

#[test]
fn test_box_symmetric_around_center() {
    let bbox = BoundingBox::from_center(20.138, -99.057, 300.0, 300.0).unwrap();

    let west = -99.057 - bbox.min_lon;
    let east = bbox.max_lon - (-99.057);
    assert!((west - east).abs() < 1e-12);

    let south = 20.138 - bbox.min_lat;
    let north = bbox.max_lat - 20.138;
    assert!((south - north).abs() < 1e-12);
}

#[test]
fn test_box_symmetric_at_negative_latitude() {
    let bbox = BoundingBox::from_center(-35.5, 149.1, 1000.0, 400.0).unwrap();
    let (lat, lon) = bbox.center();
    assert!((lat - (-35.5)).abs() < 1e-9);
    assert!((lon - 149.1).abs() < 1e-9);
}

// ============================================================================
// Latitude scaling
// ============================================================================

#[test]
fn test_longitude_span_scales_with_inverse_cosine() {
    // Same physical width at two latitudes: the degree span must grow by
    // cos(lat1)/cos(lat2).
    let equator = BoundingBox::from_center(0.0, 0.0, 500.0, 500.0).unwrap();
    let mid = BoundingBox::from_center(60.0, 0.0, 500.0, 500.0).unwrap();

    let ratio = mid.width_deg() / equator.width_deg();
    let expected = 0.0_f64.to_radians().cos() / 60.0_f64.to_radians().cos();
    assert!((ratio - expected).abs() < 1e-9);
}

#[test]
fn test_latitude_span_independent_of_latitude() {
    let equator = BoundingBox::from_center(0.0, 0.0, 500.0, 500.0).unwrap();
    let mid = BoundingBox::from_center(60.0, 0.0, 500.0, 500.0).unwrap();
    assert!((equator.height_deg() - mid.height_deg()).abs() < 1e-12);
}

#[test]
fn test_square_extent_is_square_in_meters_not_degrees() {
    // At 60N a square area must be about twice as wide in degrees as tall.
    let bbox = BoundingBox::from_center(60.0, 10.0, 500.0, 500.0).unwrap();
    let ratio = bbox.width_deg() / bbox.height_deg();
    assert!((ratio - 2.0).abs() < 0.01);
}

// ============================================================================
// Known magnitudes
// ============================================================================

#[test]
fn test_equator_span_magnitude() {
    // One degree is ~111.2km at the equator, so 1112m should be ~0.01 deg.
    let bbox = BoundingBox::from_center(0.0, 0.0, 1112.0, 1112.0).unwrap();
    assert!((bbox.width_deg() - 0.01).abs() < 1e-4);
    assert!((bbox.height_deg() - 0.01).abs() < 1e-4);
}

// ============================================================================
// Invalid inputs
// ============================================================================

#[test]
fn test_nan_center_is_error() {
    let result = BoundingBox::from_center(f64::NAN, -99.0, 300.0, 300.0);
    assert!(matches!(result, Err(GeoError::InvalidCoordinate { .. })));
}

#[test]
fn test_infinite_extent_is_error() {
    let result = BoundingBox::from_center(20.0, -99.0, f64::INFINITY, 300.0);
    assert!(matches!(result, Err(GeoError::InvalidExtent { .. })));
}

#[test]
fn test_zero_extent_is_error() {
    let result = BoundingBox::from_center(20.0, -99.0, 0.0, 0.0);
    assert!(matches!(result, Err(GeoError::InvalidExtent { .. })));
}
