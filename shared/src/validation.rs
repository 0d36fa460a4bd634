//! Validation utilities for the FieldSight platform
//!
//! Boundary and date-range checks run before anything is persisted or sent
//! to an upstream service.

use chrono::NaiveDate;

use crate::types::GeoPoint;

/// Minimum number of points for a usable field boundary
pub const MIN_BOUNDARY_POINTS: usize = 3;

/// Validate that a boundary has enough points to describe a polygon
pub fn validate_boundary(boundary: &[GeoPoint]) -> Result<(), &'static str> {
    if boundary.len() < MIN_BOUNDARY_POINTS {
        return Err("A field boundary requires at least 3 coordinates");
    }
    for point in boundary {
        validate_coordinate(point)?;
    }
    Ok(())
}

/// Validate that a coordinate lies within valid geographic bounds
pub fn validate_coordinate(point: &GeoPoint) -> Result<(), &'static str> {
    if !point.in_bounds() {
        return Err("Coordinate is outside valid latitude/longitude bounds");
    }
    Ok(())
}

/// Validate that a date range is ordered (inclusive ranges, start <= end)
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), &'static str> {
    if start > end {
        return Err("Start date must not be after end date");
    }
    Ok(())
}
