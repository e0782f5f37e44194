//! Integration coverage for the moto CRUD surface and its ownership guard.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod support;

use serde_json::json;

use support::{
    create_moto, delete, get, patch_json, post_json, put_json, read_json, register, spawn_app,
};

#[actix_web::test]
async fn create_and_list_round_trip() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = post_json(
        &app,
        "/motos",
        Some(&account.token),
        json!({"name": "Daily ride", "brand": "Honda", "model": "CB500F", "year": 2021}),
    )
    .await;
    assert_eq!(resp.status(), 201);
    let created = read_json(resp).await;
    assert!(created["id"].is_string(), "entity ids are strings");
    assert_eq!(created["name"], json!("Daily ride"));
    assert!(
        created.get("ownerId").is_none(),
        "the owner never appears on the wire"
    );

    let resp = get(&app, "/motos", Some(&account.token)).await;
    assert_eq!(resp.status(), 200);
    let listed = read_json(resp).await;
    let listed = listed.as_array().expect("array body");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"], created["id"]);
}

#[actix_web::test]
async fn listing_only_shows_the_callers_motos() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;
    let eve = register(&app, "Eve", "eve@example.com").await;
    create_moto(&app, &ada.token, "Ada's bike").await;

    let resp = get(&app, "/motos", Some(&eve.token)).await;
    assert_eq!(resp.status(), 200);
    let listed = read_json(resp).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn foreign_motos_are_unauthorized_not_missing() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;
    let eve = register(&app, "Eve", "eve@example.com").await;
    let moto_id = create_moto(&app, &ada.token, "Ada's bike").await;
    let path = format!("/motos/{moto_id}");

    let fetch = get(&app, &path, Some(&eve.token)).await;
    assert_eq!(fetch.status(), 401);

    let update = put_json(&app, &path, Some(&eve.token), json!({"name": "stolen"})).await;
    assert_eq!(update.status(), 401);

    let removal = delete(&app, &path, Some(&eve.token)).await;
    assert_eq!(removal.status(), 401);

    // The guard must not have leaked a mutation.
    let resp = get(&app, &path, Some(&ada.token)).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(read_json(resp).await["name"], json!("Ada's bike"));
}

#[actix_web::test]
async fn unknown_moto_is_not_found() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = get(&app, "/motos/9999", Some(&account.token)).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn update_applies_only_provided_fields() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;

    let resp = put_json(
        &app,
        &format!("/motos/{moto_id}"),
        Some(&account.token),
        json!({"km": 12000}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["km"], json!(12000));
    assert_eq!(body["name"], json!("Daily ride"));
}

#[actix_web::test]
async fn explicit_null_does_not_clear_a_field() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;
    let path = format!("/motos/{moto_id}");

    let resp = put_json(&app, &path, Some(&account.token), json!({"model": "CB500F"})).await;
    assert_eq!(resp.status(), 200);

    let resp = put_json(
        &app,
        &path,
        Some(&account.token),
        json!({"name": "renamed", "model": null}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["name"], json!("renamed"));
    assert_eq!(body["model"], json!("CB500F"));
}

#[actix_web::test]
async fn empty_update_is_rejected() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;

    let resp = put_json(
        &app,
        &format!("/motos/{moto_id}"),
        Some(&account.token),
        json!({}),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn owner_field_cannot_be_smuggled_into_a_patch() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;

    let resp = put_json(
        &app,
        &format!("/motos/{moto_id}"),
        Some(&account.token),
        json!({"name": "renamed", "ownerId": 99}),
    )
    .await;
    assert_eq!(resp.status(), 400);
    let body = read_json(resp).await;
    assert_eq!(body["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn delete_is_not_idempotent() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;
    let path = format!("/motos/{moto_id}");

    let first = delete(&app, &path, Some(&account.token)).await;
    assert_eq!(first.status(), 204);

    let second = delete(&app, &path, Some(&account.token)).await;
    assert_eq!(second.status(), 404);
}

#[actix_web::test]
async fn blank_name_is_rejected() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = post_json(
        &app,
        "/motos",
        Some(&account.token),
        json!({"name": "   ", "brand": "Honda"}),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn unrouted_methods_fall_through_to_not_found() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let moto_id = create_moto(&app, &account.token, "Daily ride").await;

    // Motos are updated via PUT; a PATCH matches no registered route and
    // lands on the default not-found service.
    let resp = patch_json(
        &app,
        &format!("/motos/{moto_id}"),
        Some(&account.token),
        json!({"name": "renamed"}),
    )
    .await;
    assert_eq!(resp.status(), 404);
}
