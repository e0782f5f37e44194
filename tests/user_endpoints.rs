//! Integration coverage for profile maintenance and the account cascade.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod support;

use serde_json::json;

use support::{
    PASSWORD, create_moto, create_notification, create_revision, delete, get, post_json, put_json,
    read_json, register, spawn_app,
};

#[actix_web::test]
async fn profile_update_returns_camel_case_fields() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", account.id),
        Some(&account.token),
        json!({"name": "Ada L.", "avatarUrl": "https://example.com/ada.png"}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["name"], json!("Ada L."));
    assert_eq!(body["avatarUrl"], json!("https://example.com/ada.png"));
    assert_eq!(body["id"], json!(account.id.to_string()));
}

#[actix_web::test]
async fn empty_profile_update_is_rejected() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", account.id),
        Some(&account.token),
        json!({}),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn unknown_profile_fields_are_rejected() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", account.id),
        Some(&account.token),
        json!({"name": "Ada L.", "isAdmin": true}),
    )
    .await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn explicit_null_does_not_clear_a_field() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;
    let path = format!("/users/{}", account.id);

    let resp = put_json(
        &app,
        &path,
        Some(&account.token),
        json!({"avatarUrl": "https://example.com/ada.png"}),
    )
    .await;
    assert_eq!(resp.status(), 200);

    // Null collapses to "absent", leaving nothing to update.
    let resp = put_json(&app, &path, Some(&account.token), json!({"avatarUrl": null})).await;
    assert_eq!(resp.status(), 400);

    let resp = put_json(
        &app,
        &path,
        Some(&account.token),
        json!({"name": "Ada L.", "avatarUrl": null}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    let body = read_json(resp).await;
    assert_eq!(body["avatarUrl"], json!("https://example.com/ada.png"));
}

#[actix_web::test]
async fn updating_another_user_is_unauthorized() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;
    let eve = register(&app, "Eve", "eve@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", ada.id),
        Some(&eve.token),
        json!({"name": "Mallory"}),
    )
    .await;
    assert_eq!(resp.status(), 401);

    let resp = delete(&app, &format!("/users/{}", ada.id), Some(&eve.token)).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn changing_the_email_to_another_accounts_conflicts() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;
    register(&app, "Eve", "eve@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", ada.id),
        Some(&ada.token),
        json!({"email": "Eve@Example.com"}),
    )
    .await;
    assert_eq!(resp.status(), 409);
}

#[actix_web::test]
async fn password_change_takes_effect_at_the_next_login() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let resp = put_json(
        &app,
        &format!("/users/{}", account.id),
        Some(&account.token),
        json!({"password": "a-new-password"}),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let stale = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ada@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(stale.status(), 200);
    assert_eq!(read_json(stale).await["success"], json!(false));

    let fresh = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ada@example.com", "password": "a-new-password"}),
    )
    .await;
    assert_eq!(fresh.status(), 200);
    assert_eq!(read_json(fresh).await["success"], json!(true));
}

#[actix_web::test]
async fn account_deletion_cascades_to_everything_owned() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;
    let eve = register(&app, "Eve", "eve@example.com").await;
    let moto_id = create_moto(&app, &ada.token, "Daily ride").await;
    let revision_id = create_revision(&app, &ada.token, moto_id, "Oil change").await;
    create_notification(&app, &ada.token, Some(revision_id), "Due soon").await;
    let eve_moto = create_moto(&app, &eve.token, "Eve's bike").await;

    let resp = delete(&app, &format!("/users/{}", ada.id), Some(&ada.token)).await;
    assert_eq!(resp.status(), 204);

    // The account is gone.
    let login = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ada@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(read_json(login).await["success"], json!(false));

    // So is everything it owned; other accounts are untouched.
    let motos = read_json(get(&app, "/motos", Some(&ada.token)).await).await;
    assert_eq!(motos.as_array().map(Vec::len), Some(0));
    let revisions = read_json(get(&app, "/revisions", Some(&ada.token)).await).await;
    assert_eq!(revisions.as_array().map(Vec::len), Some(0));
    let notifications = read_json(get(&app, "/notifications", Some(&ada.token)).await).await;
    assert_eq!(notifications.as_array().map(Vec::len), Some(0));

    let resp = get(&app, &format!("/motos/{eve_moto}"), Some(&eve.token)).await;
    assert_eq!(resp.status(), 200);

    // A second delete finds nothing.
    let resp = delete(&app, &format!("/users/{}", ada.id), Some(&ada.token)).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn email_is_freed_for_registration_after_deletion() {
    let app = spawn_app().await;
    let ada = register(&app, "Ada", "ada@example.com").await;

    let resp = delete(&app, &format!("/users/{}", ada.id), Some(&ada.token)).await;
    assert_eq!(resp.status(), 204);

    register(&app, "Ada II", "ada@example.com").await;
}
