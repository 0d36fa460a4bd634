//! Trader event scheduling models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A scheduled trader event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Input for scheduling a trader event
#[derive(Debug, Deserialize, Validate)]
pub struct ScheduleEventInput {
    #[validate(length(min = 1, message = "Event title cannot be empty"))]
    pub title: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<String>,
}
