//! Soil report HTTP handlers

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::SoilReport;
use crate::services::soil;
use crate::AppState;

/// Get the soil report for a field
pub async fn get_soil_report(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
) -> AppResult<Json<SoilReport>> {
    // The field must exist; the report itself is keyed only on the id
    let field = state.fields.get(field_id).await?;
    Ok(Json(soil::report_for_field(field.id)))
}
