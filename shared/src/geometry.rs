//! Field boundary geometry
//!
//! Area is computed with the shoelace formula applied directly to lat/lng
//! degrees, scaled by a constant meters-per-degree factor. The factor is not
//! corrected for latitude, so areas are overstated away from the equator;
//! this matches the numbers the dashboard has always shown and is kept on
//! purpose. The centroid is the arithmetic mean of the boundary vertices
//! (the vertex centroid, not the area centroid) for the same reason.

use thiserror::Error;

use crate::types::GeoPoint;

/// Meters per degree at the equator.
pub const METERS_PER_DEGREE: f64 = 111_319.9;

/// Square meters to hectares.
pub const SQ_METERS_TO_HECTARES: f64 = 0.0001;

/// Hectares to acres.
pub const HECTARES_TO_ACRES: f64 = 2.47105;

/// Geometry errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("a field boundary requires at least 3 points, got {0}")]
    TooFewVertices(usize),

    #[error("cannot compute the centroid of an empty boundary")]
    EmptyBoundary,
}

/// Compute the area of a field boundary in acres.
///
/// The magnitude of the signed shoelace area is used, so the result does not
/// depend on winding direction and is invariant under cyclic rotation of the
/// vertex list. Degenerate boundaries (all points collinear or identical)
/// yield 0.0, which is a valid result rather than an error.
pub fn area_acres(boundary: &[GeoPoint]) -> Result<f64, GeometryError> {
    if boundary.len() < 3 {
        return Err(GeometryError::TooFewVertices(boundary.len()));
    }

    let mut signed = 0.0;
    for i in 0..boundary.len() {
        let j = (i + 1) % boundary.len();
        signed += boundary[i].lat * boundary[j].lng;
        signed -= boundary[j].lat * boundary[i].lng;
    }
    let square_degrees = signed.abs() / 2.0;

    Ok(square_degrees
        * METERS_PER_DEGREE
        * METERS_PER_DEGREE
        * SQ_METERS_TO_HECTARES
        * HECTARES_TO_ACRES)
}

/// Compute the vertex centroid of a boundary.
///
/// The mean of the vertices always lies inside their convex hull, so the
/// result is a safe coordinate to key weather lookups on.
pub fn centroid(boundary: &[GeoPoint]) -> Result<GeoPoint, GeometryError> {
    if boundary.is_empty() {
        return Err(GeometryError::EmptyBoundary);
    }

    let n = boundary.len() as f64;
    Ok(GeoPoint {
        lat: boundary.iter().map(|p| p.lat).sum::<f64>() / n,
        lng: boundary.iter().map(|p| p.lng).sum::<f64>() / n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square_boundary(side_degrees: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, side_degrees),
            GeoPoint::new(side_degrees, side_degrees),
            GeoPoint::new(side_degrees, 0.0),
        ]
    }

    #[test]
    fn known_square_matches_constants() {
        // 0.01 degree square at the equator: shoelace area is 1e-4 sq deg.
        let expected = 1e-4
            * METERS_PER_DEGREE
            * METERS_PER_DEGREE
            * SQ_METERS_TO_HECTARES
            * HECTARES_TO_ACRES;

        let area = area_acres(&square_boundary(0.01)).unwrap();
        assert!((area - expected).abs() < 1e-9);
    }

    #[test]
    fn degenerate_boundary_has_zero_area() {
        let identical = vec![
            GeoPoint::new(10.0, 20.0),
            GeoPoint::new(10.0, 20.0),
            GeoPoint::new(10.0, 20.0),
        ];
        assert_eq!(area_acres(&identical).unwrap(), 0.0);

        let collinear = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 2.0),
        ];
        assert!(area_acres(&collinear).unwrap().abs() < 1e-6);
    }

    #[test]
    fn too_few_vertices_is_rejected() {
        let two = vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)];
        assert_eq!(area_acres(&two), Err(GeometryError::TooFewVertices(2)));
        assert_eq!(area_acres(&[]), Err(GeometryError::TooFewVertices(0)));
    }

    #[test]
    fn centroid_of_single_point_is_itself() {
        let p = GeoPoint::new(18.7883, 98.9853);
        assert_eq!(centroid(&[p]).unwrap(), p);
    }

    #[test]
    fn centroid_of_empty_boundary_is_rejected() {
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyBoundary));
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let c = centroid(&square_boundary(0.01)).unwrap();
        assert!((c.lat - 0.005).abs() < 1e-12);
        assert!((c.lng - 0.005).abs() < 1e-12);
    }

    prop_compose! {
        fn arb_point()(lat in -90.0f64..90.0, lng in -180.0f64..180.0) -> GeoPoint {
            GeoPoint::new(lat, lng)
        }
    }

    prop_compose! {
        fn arb_boundary()(points in prop::collection::vec(arb_point(), 3..12)) -> Vec<GeoPoint> {
            points
        }
    }

    proptest! {
        #[test]
        fn area_is_non_negative(boundary in arb_boundary()) {
            prop_assert!(area_acres(&boundary).unwrap() >= 0.0);
        }

        #[test]
        fn area_invariant_under_reversal(boundary in arb_boundary()) {
            let forward = area_acres(&boundary).unwrap();
            let mut reversed = boundary.clone();
            reversed.reverse();
            let backward = area_acres(&reversed).unwrap();
            prop_assert!((forward - backward).abs() <= 1e-6 * forward.abs().max(1.0));
        }

        #[test]
        fn area_invariant_under_rotation(boundary in arb_boundary(), k in 0usize..12) {
            let base = area_acres(&boundary).unwrap();
            let mut rotated = boundary.clone();
            rotated.rotate_left(k % boundary.len());
            let turned = area_acres(&rotated).unwrap();
            prop_assert!((base - turned).abs() <= 1e-6 * base.abs().max(1.0));
        }

        #[test]
        fn centroid_stays_in_bounding_box(boundary in arb_boundary()) {
            let c = centroid(&boundary).unwrap();
            let min_lat = boundary.iter().map(|p| p.lat).fold(f64::INFINITY, f64::min);
            let max_lat = boundary.iter().map(|p| p.lat).fold(f64::NEG_INFINITY, f64::max);
            let min_lng = boundary.iter().map(|p| p.lng).fold(f64::INFINITY, f64::min);
            let max_lng = boundary.iter().map(|p| p.lng).fold(f64::NEG_INFINITY, f64::max);
            let eps = 1e-9;
            prop_assert!(c.lat >= min_lat - eps && c.lat <= max_lat + eps);
            prop_assert!(c.lng >= min_lng - eps && c.lng <= max_lng + eps);
        }
    }
}
