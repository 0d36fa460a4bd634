//! Field store tests
//!
//! File-backed CRUD, validate-before-write, filename conventions, and
//! derived-geometry recompute on read.

use tempfile::TempDir;
use uuid::Uuid;

use fieldsight_backend::error::AppError;
use fieldsight_backend::services::FieldStore;
use shared::models::CreateFieldInput;
use shared::types::GeoPoint;

fn square_boundary() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 0.01),
        GeoPoint::new(0.01, 0.01),
        GeoPoint::new(0.01, 0.0),
    ]
}

fn input(name: &str) -> CreateFieldInput {
    CreateFieldInput {
        name: name.to_string(),
        location: "Udupi".to_string(),
        crop: "Rice".to_string(),
        coordinates: square_boundary(),
    }
}

#[tokio::test]
async fn create_and_get_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let created = store.create(input("North Field")).await.unwrap();
    assert!(created.derived.area_acres > 0.0);
    assert!((created.derived.centroid.lat - 0.005).abs() < 1e-9);
    assert!((created.derived.centroid.lng - 0.005).abs() < 1e-9);

    let fetched = store.get(created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "North Field");
    assert_eq!(fetched.crop, "Rice");
    assert_eq!(fetched.coordinates, created.coordinates);
}

#[tokio::test]
async fn list_is_sorted_by_name() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    store.create(input("Zebra Plot")).await.unwrap();
    store.create(input("Acre One")).await.unwrap();

    let fields = store.list().await.unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "Acre One");
    assert_eq!(fields[1].name, "Zebra Plot");
}

#[tokio::test]
async fn delete_removes_the_record() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let created = store.create(input("Temp Field")).await.unwrap();
    store.delete(created.id).await.unwrap();

    let err = store.get(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleting_a_missing_field_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let err = store.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn too_few_coordinates_are_rejected_before_write() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let mut bad = input("Line Field");
    bad.coordinates.truncate(2);

    let err = store.create(bad).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidGeometry(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn out_of_bounds_coordinate_is_rejected_before_write() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let mut bad = input("Far Field");
    bad.coordinates[1] = GeoPoint::new(95.0, 200.0);

    let err = store.create(bad).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidCoordinate(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_name_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let err = store.create(input("")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn file_name_is_sanitized_and_carries_the_id() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let created = store.create(input("North Field #2")).await.unwrap();

    let fields_dir = dir.path().join("fields");
    let mut names: Vec<String> = std::fs::read_dir(&fields_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    assert_eq!(names.len(), 1);
    assert_eq!(names[0], format!("north_field__2_{}.json", created.id));
}

#[tokio::test]
async fn derived_geometry_is_recomputed_on_read() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    let created = store.create(input("Honest Field")).await.unwrap();
    let expected_area = created.derived.area_acres;

    // Tamper with the stored derived values; the boundary stays authoritative
    let fields_dir = dir.path().join("fields");
    let path = std::fs::read_dir(&fields_dir)
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();
    let mut doc: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    doc["derived"]["area_acres"] = serde_json::json!(99999.0);
    std::fs::write(&path, serde_json::to_vec_pretty(&doc).unwrap()).unwrap();

    let fetched = store.get(created.id).await.unwrap();
    assert!((fetched.derived.area_acres - expected_area).abs() < 1e-9);
}

#[tokio::test]
async fn unreadable_files_are_skipped_in_listing() {
    let dir = TempDir::new().unwrap();
    let store = FieldStore::new(dir.path());

    store.create(input("Good Field")).await.unwrap();

    let fields_dir = dir.path().join("fields");
    std::fs::write(fields_dir.join("corrupted.json"), b"not json at all").unwrap();

    let fields = store.list().await.unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0].name, "Good Field");
}
