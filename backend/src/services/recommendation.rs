//! Crop recommendation data
//!
//! Recommendations are produced by an offline pipeline and dropped into the
//! data directory as `crop_recommendations.json`; this store just serves the
//! latest document.

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Store for the static crop recommendation document
#[derive(Clone)]
pub struct RecommendationStore {
    path: PathBuf,
}

impl RecommendationStore {
    /// Create a store backed by `<data_dir>/crop_recommendations.json`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("crop_recommendations.json"),
        }
    }

    /// Read the recommendation document
    pub async fn get(&self) -> AppResult<serde_json::Value> {
        let body = match tokio::fs::read(&self.path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AppError::NotFound("Crop recommendations".to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_slice(&body).map_err(|e| AppError::Storage(e.to_string()))
    }
}
