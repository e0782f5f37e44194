//! Integration coverage for registration, login, and bearer authentication.

#[expect(
    dead_code,
    reason = "Shared helpers include functions used only by other integration suites."
)]
mod support;

use serde_json::json;

use support::{PASSWORD, get, post_json, read_json, register, spawn_app};

#[actix_web::test]
async fn register_creates_account_and_issues_token() {
    let app = spawn_app().await;

    let resp = post_json(
        &app,
        "/auth/register",
        None,
        json!({"name": "Ada", "email": "Ada@Example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(resp.status(), 201);

    let body = read_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["user"]["id"].is_string(), "entity ids are strings");
    assert_eq!(body["user"]["email"], json!("ada@example.com"));
    assert!(
        body["token"].as_str().is_some_and(|t| !t.is_empty()),
        "registration returns a usable token"
    );
}

#[actix_web::test]
async fn emails_differing_only_in_case_conflict() {
    let app = spawn_app().await;
    register(&app, "Ada", "Rider@Example.com").await;

    let resp = post_json(
        &app,
        "/auth/register",
        None,
        json!({"name": "Eve", "email": "rider@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(resp.status(), 409);
    let body = read_json(resp).await;
    assert_eq!(body["code"], json!("conflict"));
}

#[actix_web::test]
async fn login_returns_success_envelope_with_fresh_token() {
    let app = spawn_app().await;
    register(&app, "Ada", "ada@example.com").await;

    let resp = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ada@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(resp.status(), 200);

    let body = read_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["user"]["email"], json!("ada@example.com"));
    assert!(body["token"].is_string());
}

#[actix_web::test]
async fn login_failures_share_one_envelope() {
    let app = spawn_app().await;
    register(&app, "Ada", "ada@example.com").await;

    let unknown = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "nobody@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(unknown.status(), 200);
    let unknown_body = read_json(unknown).await;

    let wrong_password = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ada@example.com", "password": "wrong-pw"}),
    )
    .await;
    assert_eq!(wrong_password.status(), 200);
    let wrong_body = read_json(wrong_password).await;

    // Identical bodies: an attacker cannot tell a missing account from a bad
    // password.
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["success"], json!(false));
    assert_eq!(unknown_body["error"], json!("invalid credentials"));
}

#[actix_web::test]
async fn login_accepts_uppercase_email() {
    let app = spawn_app().await;
    register(&app, "Ada", "ada@example.com").await;

    let resp = post_json(
        &app,
        "/auth/login",
        None,
        json!({"email": "ADA@example.com", "password": PASSWORD}),
    )
    .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(read_json(resp).await["success"], json!(true));
}

#[actix_web::test]
async fn protected_routes_require_a_token() {
    let app = spawn_app().await;

    let resp = get(&app, "/motos", None).await;
    assert_eq!(resp.status(), 401);
    let body = read_json(resp).await;
    assert_eq!(body["code"], json!("unauthorized"));
}

#[actix_web::test]
async fn tampered_tokens_are_rejected() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    let mut tampered = account.token.clone();
    let last = tampered.pop().expect("non-empty token");
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let resp = get(&app, "/motos", Some(&tampered)).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn bearer_prefix_is_stripped_from_the_header() {
    let app = spawn_app().await;
    let account = register(&app, "Ada", "ada@example.com").await;

    // The helper already sends `Bearer <token>`; a 200 proves the prefix is
    // stripped before verification.
    let resp = get(&app, "/motos", Some(&account.token)).await;
    assert_eq!(resp.status(), 200);
}
