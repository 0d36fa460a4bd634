//! Trader event scheduling tests

use chrono::NaiveDate;
use tempfile::TempDir;

use fieldsight_backend::error::AppError;
use fieldsight_backend::services::EventStore;
use shared::models::ScheduleEventInput;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn input(title: &str, start: &str, end: &str) -> ScheduleEventInput {
    ScheduleEventInput {
        title: title.to_string(),
        description: Some("Grain auction".to_string()),
        start_date: date(start),
        end_date: date(end),
        start_time: Some("09:00".to_string()),
        end_time: Some("17:00".to_string()),
        location: Some("Mandi yard".to_string()),
    }
}

#[tokio::test]
async fn schedule_and_list_ordered_by_start_date() {
    let dir = TempDir::new().unwrap();
    let store = EventStore::new(dir.path());

    store
        .schedule(input("Late fair", "2025-09-10", "2025-09-12"))
        .await
        .unwrap();
    store
        .schedule(input("Early auction", "2025-08-01", "2025-08-02"))
        .await
        .unwrap();

    let events = store.list().await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Early auction");
    assert_eq!(events[1].title, "Late fair");
}

#[tokio::test]
async fn inverted_event_dates_are_rejected() {
    let dir = TempDir::new().unwrap();
    let store = EventStore::new(dir.path());

    let err = store
        .schedule(input("Backwards", "2025-09-12", "2025-09-10"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDateRange(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_title_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = EventStore::new(dir.path());

    let err = store
        .schedule(input("", "2025-09-10", "2025-09-12"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn listing_without_a_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = EventStore::new(dir.path());
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn events_persist_across_store_instances() {
    let dir = TempDir::new().unwrap();

    let store = EventStore::new(dir.path());
    let created = store
        .schedule(input("Seed expo", "2025-10-01", "2025-10-03"))
        .await
        .unwrap();
    drop(store);

    let reopened = EventStore::new(dir.path());
    let events = reopened.list().await.unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, created.id);
}
