mod common;

use axum_test::TestServer;
use crud_services::api::routes::todo_routes;
use serde_json::json;
use sqlx::SqlitePool;

fn test_server(pool: SqlitePool) -> TestServer {
    let state = common::create_todo_state(pool);
    TestServer::new(todo_routes().with_state(state)).unwrap()
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_create_item_with_defaults(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/items")
        .json(&json!({ "title": "Buy milk" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": 1,
        "title": "Buy milk",
        "description": null,
        "completed": false
    }));
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_create_item_with_all_fields(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/items")
        .json(&json!({
            "title": "Write report",
            "description": "Q3 numbers",
            "completed": true
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Write report");
    assert_eq!(json["description"], "Q3 numbers");
    assert_eq!(json["completed"], true);
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_create_item_without_title_rejected(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .post("/items")
        .json(&json!({ "description": "no title" }))
        .expect_failure()
        .await;

    assert!(response.status_code().is_client_error());
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_list_items(pool: SqlitePool) {
    let server = test_server(pool);

    server
        .post("/items")
        .json(&json!({ "title": "Buy milk" }))
        .await
        .assert_status_ok();

    let response = server.get("/items").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "id": 1, "title": "Buy milk", "description": null, "completed": false }
    ]));
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_list_items_empty(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server.get("/items").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_get_item(pool: SqlitePool) {
    let id = common::create_test_todo(&pool, "Read book", Some("Chapter 3"), true).await;
    let server = test_server(pool);

    let response = server.get(&format!("/items/{}", id)).await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": id,
        "title": "Read book",
        "description": "Chapter 3",
        "completed": true
    }));
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_get_item_not_found(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server.get("/items/42").expect_failure().await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["detail"], "Item not found");
    assert_eq!(json["details"]["id"], 42);
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_get_item_non_numeric_id_rejected(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server.get("/items/abc").expect_failure().await;

    response.assert_status_bad_request();
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_update_item_full_replace(pool: SqlitePool) {
    let id = common::create_test_todo(&pool, "A", Some("details"), true).await;
    let server = test_server(pool);

    let response = server
        .put(&format!("/items/{}", id))
        .json(&json!({ "title": "B" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "id": id,
        "title": "B",
        "description": null,
        "completed": false
    }));

    let fetched = server.get(&format!("/items/{}", id)).await;
    fetched.assert_json(&json!({
        "id": id,
        "title": "B",
        "description": null,
        "completed": false
    }));
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_update_item_not_found(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server
        .put("/items/9")
        .json(&json!({ "title": "B", "completed": true }))
        .expect_failure()
        .await;

    response.assert_status_not_found();
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_delete_item(pool: SqlitePool) {
    let id = common::create_test_todo(&pool, "Temp", None, false).await;
    let server = test_server(pool);

    let response = server.delete(&format!("/items/{}", id)).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "detail": "Item deleted" }));

    server
        .get(&format!("/items/{}", id))
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_delete_item_not_found(pool: SqlitePool) {
    let server = test_server(pool);

    let response = server.delete("/items/1").expect_failure().await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["detail"],
        "Item not found"
    );
}

#[sqlx::test(migrations = "migrations/todo")]
async fn test_create_then_get_roundtrip(pool: SqlitePool) {
    let server = test_server(pool);

    let created = server
        .post("/items")
        .json(&json!({ "title": "Plan trip", "description": "Book hotel" }))
        .await
        .json::<serde_json::Value>();

    let response = server
        .get(&format!("/items/{}", created["id"]))
        .await;

    response.assert_status_ok();
    response.assert_json(&created);
}
