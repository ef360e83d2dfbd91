//! HTTP-level integration tests for the `/rooms` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, login, post_auth, post_json, post_json_auth};
use roomfit_db::models::room::{CreateRoom, Room};
use roomfit_db::repositories::{DeletedItemRepo, RoomRepo};
use sqlx::PgPool;

fn room_body(name: &str, length: f64, width: f64, height: f64) -> serde_json::Value {
    serde_json::json!({ "name": name, "length": length, "width": width, "height": height })
}

async fn stored_room(pool: &PgPool, id: i64) -> Room {
    RoomRepo::list(pool)
        .await
        .unwrap()
        .into_iter()
        .find(|room| room.id == id)
        .expect("room should be stored")
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_persists_all_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/rooms",
        room_body("Living Room", 200.0, 150.0, 250.0),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Room added successfully!");
    let id = json["data"]["room"]["id"].as_i64().unwrap();

    let stored = stored_room(&pool, id).await;
    assert_eq!(stored.name, "Living Room");
    assert_eq!(stored.length, 200.0);
    assert_eq!(stored.width, 150.0);
    assert_eq!(stored.height, 250.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_keeps_name_whitespace(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = login(app.clone()).await;

    let response = post_json_auth(
        app,
        "/api/v1/rooms",
        room_body("  Living Room ", 200.0, 150.0, 250.0),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["room"]["name"], "  Living Room ");
    let id = json["data"]["room"]["id"].as_i64().unwrap();
    assert_eq!(stored_room(&pool, id).await.name, "  Living Room ");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_accepts_form_field_name(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = login(app.clone()).await;

    let body = serde_json::json!({
        "room_name": "Garage",
        "length": 600.0,
        "width": 300.0,
        "height": 250.0,
    });
    let response = post_json_auth(app, "/api/v1/rooms", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["room"]["name"], "Garage");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_rooms_newest_first(pool: PgPool) {
    let older = RoomRepo::create(
        &pool,
        &CreateRoom {
            name: "Older".to_string(),
            length: 1.0,
            width: 1.0,
            height: 1.0,
        },
    )
    .await
    .unwrap();
    let newer = RoomRepo::create(
        &pool,
        &CreateRoom {
            name: "Newer".to_string(),
            length: 2.0,
            width: 2.0,
            height: 2.0,
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool).await;
    let token = login(app.clone()).await;
    let json = body_json(get_auth(app, "/api/v1/rooms", &token).await).await;

    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room_removes_from_listing_and_archives(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = login(app.clone()).await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/rooms",
            room_body("Spare Room", 300.0, 280.0, 240.0),
            &token,
        )
        .await,
    )
    .await;
    let id = created["data"]["room"]["id"].as_i64().unwrap();

    let response = post_auth(app.clone(), &format!("/api/v1/rooms/{id}/delete"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["message"], "Room deleted successfully!");
    assert_eq!(json["data"]["id"], id);

    let listing = body_json(get_auth(app, "/api/v1/rooms", &token).await).await;
    assert!(
        listing["data"]
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["id"].as_i64() != Some(id)),
        "deleted room must not be listed"
    );

    let archived = DeletedItemRepo::list(&pool, None).await.unwrap();
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].source_table, "ROOM");
    assert_eq!(archived[0].source_id, id);
    assert_eq!(archived[0].item_name, "Spare Room");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_room_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = login(app.clone()).await;

    let response = post_auth(app, "/api/v1/rooms/424242/delete", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Room with id 424242 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_validation(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let token = login(app.clone()).await;

    let blank = post_json_auth(
        app.clone(),
        "/api/v1/rooms",
        room_body("   ", 1.0, 1.0, 1.0),
        &token,
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(blank).await["code"], "VALIDATION_ERROR");

    let negative = post_json_auth(
        app.clone(),
        "/api/v1/rooms",
        room_body("Cellar", 1.0, -2.0, 1.0),
        &token,
    )
    .await;
    assert_eq!(negative.status(), StatusCode::BAD_REQUEST);

    let not_numeric = post_json_auth(
        app,
        "/api/v1/rooms",
        serde_json::json!({ "name": "Loft", "length": "big", "width": 1, "height": 1 }),
        &token,
    )
    .await;
    assert!(not_numeric.status().is_client_error());

    assert_eq!(RoomRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_requires_session(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(app, "/api/v1/rooms", room_body("Den", 1.0, 1.0, 1.0)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(RoomRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_room_with_non_numeric_id(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let token = login(app.clone()).await;

    let response = post_auth(app, "/api/v1/rooms/abc/delete", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().starts_with("Invalid id"));
}
