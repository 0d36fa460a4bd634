//! Field record storage
//!
//! Fields are persisted as one pretty-printed JSON file per record under
//! `<data_dir>/fields`, named `{sanitized_name}_{id}.json`. There is no
//! locking; concurrent writes to the same field are last-writer-wins, which
//! is acceptable for the single-editor usage pattern this serves.
//!
//! Derived geometry (area and centroid) is recomputed from the boundary on
//! every read; the boundary is the only authoritative geometry.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use shared::geometry;
use shared::models::{CreateFieldInput, DerivedGeometry, Field};
use shared::validation::MIN_BOUNDARY_POINTS;

use crate::error::{AppError, AppResult};

/// File-backed store for field records
#[derive(Clone)]
pub struct FieldStore {
    dir: PathBuf,
}

impl FieldStore {
    /// Create a store rooted at `<data_dir>/fields`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            dir: data_dir.as_ref().join("fields"),
        }
    }

    /// Create the backing directory if it does not exist
    pub async fn ensure_dir(&self) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        Ok(())
    }

    /// Validate and persist a new field, computing derived geometry first
    pub async fn create(&self, input: CreateFieldInput) -> AppResult<Field> {
        input.validate().map_err(validation_error)?;

        if input.coordinates.len() < MIN_BOUNDARY_POINTS {
            return Err(AppError::InvalidGeometry(format!(
                "a field boundary requires at least {} coordinates, got {}",
                MIN_BOUNDARY_POINTS,
                input.coordinates.len()
            )));
        }
        for point in &input.coordinates {
            if !point.in_bounds() {
                return Err(AppError::InvalidCoordinate(format!(
                    "({}, {}) is outside valid latitude/longitude bounds",
                    point.lat, point.lng
                )));
            }
        }

        let derived = DerivedGeometry {
            area_acres: geometry::area_acres(&input.coordinates)?,
            centroid: geometry::centroid(&input.coordinates)?,
        };

        let field = Field {
            id: Uuid::new_v4(),
            name: input.name,
            location: input.location,
            crop: input.crop,
            coordinates: input.coordinates,
            derived,
            created_at: Utc::now(),
        };

        self.ensure_dir().await?;
        let path = self.dir.join(file_name(&field.name, field.id));
        let body = serde_json::to_vec_pretty(&field)
            .map_err(|e| AppError::Storage(e.to_string()))?;
        tokio::fs::write(&path, body).await?;

        tracing::info!(field_id = %field.id, path = %path.display(), "field saved");
        Ok(field)
    }

    /// List all stored fields, sorted by name.
    ///
    /// Unparseable files are skipped with a warning instead of failing the
    /// whole listing.
    pub async fn list(&self) -> AppResult<Vec<Field>> {
        self.ensure_dir().await?;

        let mut fields = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.load(&path).await {
                Ok(field) => fields.push(field),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "skipping unreadable field file: {}", e);
                }
            }
        }

        fields.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(fields)
    }

    /// Get a single field by id
    pub async fn get(&self, id: Uuid) -> AppResult<Field> {
        let path = self
            .find_file(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Field".to_string()))?;
        self.load(&path).await
    }

    /// Delete a field by id
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let path = self
            .find_file(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Field".to_string()))?;
        tokio::fs::remove_file(&path).await?;
        tracing::info!(field_id = %id, "field deleted");
        Ok(())
    }

    async fn find_file(&self, id: Uuid) -> AppResult<Option<PathBuf>> {
        self.ensure_dir().await?;
        let needle = id.to_string();

        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(".json") && name.contains(&needle) {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    async fn load(&self, path: &Path) -> AppResult<Field> {
        let body = tokio::fs::read(path).await?;
        let mut field: Field =
            serde_json::from_slice(&body).map_err(|e| AppError::Storage(e.to_string()))?;
        field.derived = DerivedGeometry {
            area_acres: geometry::area_acres(&field.coordinates)?,
            centroid: geometry::centroid(&field.coordinates)?,
        };
        Ok(field)
    }
}

/// Build the on-disk file name for a field record
fn file_name(name: &str, id: Uuid) -> String {
    format!("{}_{}.json", sanitize(name), id)
}

/// Replace anything outside `[a-z0-9_-]` with `_` and lowercase the rest
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Reduce a validator error set to the first field/message pair
fn validation_error(errors: validator::ValidationErrors) -> AppError {
    let (field, field_errors) = errors
        .field_errors()
        .into_iter()
        .next()
        .map(|(f, errs)| (f.to_string(), errs.to_vec()))
        .unwrap_or_else(|| ("input".to_string(), Vec::new()));

    let message = field_errors
        .first()
        .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| format!("Invalid value for {}", field));

    AppError::Validation { field, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_matches_storage_convention() {
        assert_eq!(sanitize("North Field #2"), "north_field__2");
        assert_eq!(sanitize("already-safe_name1"), "already-safe_name1");
        assert_eq!(sanitize("ÜmlautFarm"), "_mlautfarm");
    }
}
