//! Document store integration tests.
//!
//! These exercise `RecordStore` against a real MongoDB instance and are
//! ignored by default. Run them with a server on `localhost:27017` (or
//! `MONGODB_URI` set) via:
//!
//! ```bash
//! cargo test -- --ignored
//! ```
//!
//! Each test works in its own database so the suite can run in parallel,
//! and empties its collection before starting.

use company_records_backend::config::AppConfig;
use company_records_backend::core::errors::AppError;
use company_records_backend::db::Database;
use company_records_backend::domain::entities::Employee;
use company_records_backend::repositories::RecordStore;
use mongodb::bson::doc;

/// Connects to a per-test database and returns an empty employee store.
async fn employee_store(test_name: &str) -> RecordStore<Employee> {
    let mut config = AppConfig::from_env();
    config.database_name = format!("companyDBtest_{test_name}");

    let database = Database::connect(&config)
        .await
        .expect("MongoDB must be running for ignored integration tests");

    let store = RecordStore::<Employee>::new(&database);
    store
        .delete_many(doc! {})
        .await
        .expect("collection cleanup failed");

    store
}

fn john() -> Employee {
    Employee::new(
        "John".to_string(),
        "Doe".to_string(),
        "6473231329ac34874b39d19f".to_string(),
    )
}

fn amanda() -> Employee {
    Employee::new(
        "Amanda".to_string(),
        "Cruz".to_string(),
        "6473230329ac34874b39d19d".to_string(),
    )
}

#[actix_web::test]
#[ignore]
async fn insert_assigns_an_id() {
    let store = employee_store("insert_assigns_an_id").await;

    let unsaved = john();
    assert!(unsaved.id.is_none());

    let saved = store.insert(unsaved).await.unwrap();
    assert!(saved.id.is_some());
}

#[actix_web::test]
#[ignore]
async fn insert_rejects_invalid_records() {
    let store = employee_store("insert_rejects_invalid_records").await;

    let mut invalid = john();
    invalid.first_name = String::new();

    let err = store.insert(invalid).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert!(err.to_string().contains("firstName"));

    // Nothing was persisted.
    assert!(store.find(doc! {}).await.unwrap().is_empty());
}

#[actix_web::test]
#[ignore]
async fn find_returns_every_inserted_record() {
    let store = employee_store("find_returns_every_inserted_record").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let employees = store.find(doc! {}).await.unwrap();
    assert_eq!(employees.len(), 2);
}

#[actix_web::test]
#[ignore]
async fn find_one_matches_on_any_single_field() {
    let store = employee_store("find_one_matches_on_any_single_field").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let filters = [
        doc! { "firstName": "John" },
        doc! { "lastName": "Doe" },
        doc! { "department": "6473231329ac34874b39d19f" },
    ];

    for filter in filters {
        let employee = store
            .find_one(filter.clone())
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("no match for {filter:?}"));

        assert_eq!(employee.first_name, "John");
        assert_eq!(employee.last_name, "Doe");
        assert_eq!(employee.department, "6473231329ac34874b39d19f");
    }
}

#[actix_web::test]
#[ignore]
async fn find_one_combines_fields_with_implicit_and() {
    let store = employee_store("find_one_combines_fields_with_implicit_and").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let hit = store
        .find_one(doc! { "firstName": "John", "lastName": "Doe" })
        .await
        .unwrap();
    assert!(hit.is_some());

    let miss = store
        .find_one(doc! { "firstName": "John", "lastName": "Cruz" })
        .await
        .unwrap();
    assert!(miss.is_none());
}

#[actix_web::test]
#[ignore]
async fn update_one_changes_exactly_one_document() {
    let store = employee_store("update_one_changes_exactly_one_document").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let modified = store
        .update_one(
            doc! { "firstName": "John" },
            doc! { "firstName": "Chris", "lastName": "New", "department": "1111" },
        )
        .await
        .unwrap();
    assert_eq!(modified, 1);

    let updated = store
        .find_one(doc! { "firstName": "Chris", "lastName": "New", "department": "1111" })
        .await
        .unwrap();
    assert!(updated.is_some());

    // The other record is untouched.
    let amanda_still_there = store
        .find_one(doc! { "firstName": "Amanda" })
        .await
        .unwrap();
    assert!(amanda_still_there.is_some());
}

#[actix_web::test]
#[ignore]
async fn update_many_changes_all_documents() {
    let store = employee_store("update_many_changes_all_documents").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let modified = store
        .update_many(
            doc! {},
            doc! { "firstName": "Chris", "lastName": "New", "department": "1111" },
        )
        .await
        .unwrap();
    assert_eq!(modified, 2);

    for employee in store.find(doc! {}).await.unwrap() {
        assert_eq!(employee.first_name, "Chris");
        assert_eq!(employee.last_name, "New");
        assert_eq!(employee.department, "1111");
    }
}

#[actix_web::test]
#[ignore]
async fn update_by_id_returns_the_updated_record() {
    let store = employee_store("update_by_id_returns_the_updated_record").await;

    let saved = store.insert(john()).await.unwrap();
    let id = saved.id_string().unwrap();

    let updated = store
        .update_by_id(&id, doc! { "firstName": "Chris" })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.first_name, "Chris");
    assert_eq!(updated.last_name, "Doe");
}

#[actix_web::test]
#[ignore]
async fn delete_one_removes_exactly_one_match() {
    let store = employee_store("delete_one_removes_exactly_one_match").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let deleted = store
        .delete_one(doc! { "firstName": "John", "lastName": "Doe" })
        .await
        .unwrap();
    assert_eq!(deleted, 1);

    let gone = store.find_one(doc! { "firstName": "John" }).await.unwrap();
    assert!(gone.is_none());

    assert_eq!(store.find(doc! {}).await.unwrap().len(), 1);
}

#[actix_web::test]
#[ignore]
async fn delete_many_empties_the_collection_and_is_idempotent() {
    let store = employee_store("delete_many_empties_the_collection").await;

    store.insert(john()).await.unwrap();
    store.insert(amanda()).await.unwrap();

    let first = store.delete_many(doc! {}).await.unwrap();
    assert_eq!(first, 2);
    assert!(store.find(doc! {}).await.unwrap().is_empty());

    // Deleting again succeeds and removes nothing.
    let second = store.delete_many(doc! {}).await.unwrap();
    assert_eq!(second, 0);
    assert!(store.find(doc! {}).await.unwrap().is_empty());
}

#[actix_web::test]
#[ignore]
async fn delete_by_id_reports_absence() {
    let store = employee_store("delete_by_id_reports_absence").await;

    let saved = store.insert(john()).await.unwrap();
    let id = saved.id_string().unwrap();

    assert!(store.delete_by_id(&id).await.unwrap());
    // Second delete finds nothing.
    assert!(!store.delete_by_id(&id).await.unwrap());
}
