//! Field records and their derived geometry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::GeoPoint;

/// Ordered polygon of at least 3 points describing a field's outline
pub type FieldBoundary = Vec<GeoPoint>;

/// A registered field
///
/// `derived` is recomputed from `coordinates` whenever the record is read;
/// the boundary is the only authoritative geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub crop: String,
    pub coordinates: FieldBoundary,
    pub derived: DerivedGeometry,
    pub created_at: DateTime<Utc>,
}

/// Geometry derived from a field boundary
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DerivedGeometry {
    pub area_acres: f64,
    pub centroid: GeoPoint,
}

/// Input for registering a field
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFieldInput {
    #[validate(length(min = 1, message = "Field name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: String,
    #[validate(length(min = 1, message = "Crop cannot be empty"))]
    pub crop: String,
    // Boundary size and coordinate bounds are checked by the store, which
    // distinguishes geometry errors from plain validation errors
    pub coordinates: FieldBoundary,
}
