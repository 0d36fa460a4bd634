//! Trader event scheduling
//!
//! Events live in a single `events.json` file under the data directory. The
//! whole file is rewritten on every schedule; volumes here are tiny.

use std::path::{Path, PathBuf};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use shared::models::{ScheduleEventInput, TraderEvent};

use crate::error::{AppError, AppResult};

/// File-backed store for trader events
#[derive(Clone)]
pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Create a store backed by `<data_dir>/events.json`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join("events.json"),
        }
    }

    /// Validate and persist a new event
    pub async fn schedule(&self, input: ScheduleEventInput) -> AppResult<TraderEvent> {
        input.validate().map_err(|_| AppError::Validation {
            field: "title".to_string(),
            message: "Event title cannot be empty".to_string(),
        })?;

        if input.start_date > input.end_date {
            return Err(AppError::InvalidDateRange(
                "Event start date must not be after end date".to_string(),
            ));
        }

        let event = TraderEvent {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            start_time: input.start_time,
            end_time: input.end_time,
            location: input.location,
            created_at: Utc::now(),
        };

        let mut events = self.load().await?;
        events.push(event.clone());
        self.save(&events).await?;

        tracing::info!(event_id = %event.id, "event scheduled");
        Ok(event)
    }

    /// List all events, ordered by start date ascending
    pub async fn list(&self) -> AppResult<Vec<TraderEvent>> {
        let mut events = self.load().await?;
        events.sort_by_key(|e| e.start_date);
        Ok(events)
    }

    async fn load(&self) -> AppResult<Vec<TraderEvent>> {
        match tokio::fs::read(&self.path).await {
            Ok(body) => {
                serde_json::from_slice(&body).map_err(|e| AppError::Storage(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, events: &[TraderEvent]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body =
            serde_json::to_vec_pretty(events).map_err(|e| AppError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }
}
