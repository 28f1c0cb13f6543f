//! Integration tests for the JSON file record store.

use std::sync::Arc;

use paybook_core::{EmployeeId, EmployeeRecord, RecordStore, StoreConfig};
use paybook_store::{JsonFileRecordStore, StoreFactory};
use serde_json::json;
use tempfile::tempdir;

fn collection(prefix: &str, len: i64) -> Vec<EmployeeRecord> {
    (1..=len)
        .map(|i| {
            let mut record =
                EmployeeRecord::new(EmployeeId::new(i), format!("{prefix}{i}"), "Ops", 1000.0 + 0.25 * i as f64);
            record.set_attribute("notes", Some(json!(format!("note {i}"))));
            record
        })
        .collect()
}

#[tokio::test]
async fn readers_never_observe_partial_writes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let store = Arc::new(JsonFileRecordStore::new(&path));

    let small = collection("small-", 3);
    let large = collection("large-", 400);
    store.save_all(&small).await.unwrap();

    let writer = {
        let store = Arc::clone(&store);
        let (small, large) = (small.clone(), large.clone());
        tokio::spawn(async move {
            for round in 0..40 {
                let next = if round % 2 == 0 { &large } else { &small };
                store.save_all(next).await.unwrap();
            }
        })
    };

    for _ in 0..200 {
        let seen = store.load_all().await;
        assert!(seen == small || seen == large, "observed {} records", seen.len());
    }
    writer.await.unwrap();
}

#[tokio::test]
async fn every_load_rereads_the_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.json");
    let store = JsonFileRecordStore::new(&path);

    store.save_all(&collection("a-", 2)).await.unwrap();
    assert_eq!(store.load_all().await.len(), 2);

    // Another writer replaces the document behind the store's back.
    let other = JsonFileRecordStore::new(&path);
    other.save_all(&collection("b-", 5)).await.unwrap();

    let reloaded = store.load_all().await;
    assert_eq!(reloaded.len(), 5);
    assert_eq!(reloaded[0].name, "b-1");
}

#[tokio::test]
async fn factory_service_persists_to_the_configured_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data").join("employees.json");
    let config = StoreConfig::new(&path);

    let service = StoreFactory::build_employee_service(&config).unwrap();
    let created = service
        .create(paybook_core::EmployeeInput::new("Ada", "Engineering", "5000"))
        .await
        .unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["id"], json!(created.id.get()));
    assert_eq!(on_disk[0]["name"], json!("Ada"));
    assert_eq!(on_disk[0]["basicSalary"], json!(5000.0));
}
