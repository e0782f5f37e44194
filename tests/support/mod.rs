//! Shared harness for HTTP integration tests.
//!
//! Builds the full actix application over the in-memory store so suites
//! exercise the real routing table, extractors, and error envelopes without a
//! database.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use motolog_backend::domain::{Argon2SecretHasher, TokenConfig, TokenService};
use motolog_backend::inbound::http::health::HealthState;
use motolog_backend::inbound::http::{HttpState, HttpStatePorts, configure};
use motolog_backend::outbound::persistence::MemoryStore;

/// Fixed password used by every registered test account.
pub const PASSWORD: &str = "super-secret-pw";

pub async fn spawn_app()
-> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    let store = Arc::new(MemoryStore::new());
    let tokens = TokenService::new(TokenConfig::new(b"integration-signing-secret".to_vec()));
    let state = web::Data::new(HttpState::assemble(HttpStatePorts {
        users: Arc::clone(&store) as _,
        motos: Arc::clone(&store) as _,
        revisions: Arc::clone(&store) as _,
        notifications: store as _,
        hasher: Arc::new(Argon2SecretHasher),
        tokens,
    }));
    let health = web::Data::new(HealthState::new());
    health.mark_ready();
    test::init_service(
        App::new()
            .app_data(state)
            .app_data(health)
            .configure(configure),
    )
    .await
}

fn with_bearer(req: test::TestRequest, token: Option<&str>) -> test::TestRequest {
    match token {
        Some(token) => req.insert_header((header::AUTHORIZATION, format!("Bearer {token}"))),
        None => req,
    }
}

pub async fn get<S>(app: &S, path: &str, token: Option<&str>) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = with_bearer(test::TestRequest::get().uri(path), token);
    test::call_service(app, req.to_request()).await
}

pub async fn post_json<S>(app: &S, path: &str, token: Option<&str>, body: Value) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = with_bearer(test::TestRequest::post().uri(path).set_json(body), token);
    test::call_service(app, req.to_request()).await
}

pub async fn put_json<S>(app: &S, path: &str, token: Option<&str>, body: Value) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = with_bearer(test::TestRequest::put().uri(path).set_json(body), token);
    test::call_service(app, req.to_request()).await
}

pub async fn patch_json<S>(app: &S, path: &str, token: Option<&str>, body: Value) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = with_bearer(test::TestRequest::patch().uri(path).set_json(body), token);
    test::call_service(app, req.to_request()).await
}

pub async fn delete<S>(app: &S, path: &str, token: Option<&str>) -> ServiceResponse
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let req = with_bearer(test::TestRequest::delete().uri(path), token);
    test::call_service(app, req.to_request()).await
}

pub async fn read_json(resp: ServiceResponse) -> Value {
    test::read_body_json(resp).await
}

/// Identity handed back by [`register`] for follow-up authenticated calls.
pub struct Account {
    pub id: i64,
    pub token: String,
}

pub async fn register<S>(app: &S, name: &str, email: &str) -> Account
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = post_json(
        app,
        "/auth/register",
        None,
        json!({"name": name, "email": email, "password": PASSWORD}),
    )
    .await;
    assert_eq!(resp.status(), 201, "registration should succeed");
    let body = read_json(resp).await;
    let id = body["user"]["id"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("user id");
    let token = body["token"].as_str().expect("token").to_owned();
    Account { id, token }
}

pub async fn create_moto<S>(app: &S, token: &str, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = post_json(
        app,
        "/motos",
        Some(token),
        json!({"name": name, "brand": "Honda"}),
    )
    .await;
    assert_eq!(resp.status(), 201, "moto creation should succeed");
    let body = read_json(resp).await;
    body["id"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("moto id")
}

pub async fn create_revision<S>(app: &S, token: &str, moto_id: i64, title: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = post_json(
        app,
        "/revisions",
        Some(token),
        json!({"motoId": moto_id, "title": title, "service": "engine"}),
    )
    .await;
    assert_eq!(resp.status(), 201, "revision creation should succeed");
    let body = read_json(resp).await;
    body["id"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("revision id")
}

pub async fn create_notification<S>(
    app: &S,
    token: &str,
    revision_id: Option<i64>,
    title: &str,
) -> i64
where
    S: Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
{
    let resp = post_json(
        app,
        "/notifications",
        Some(token),
        json!({"title": title, "revisionId": revision_id}),
    )
    .await;
    assert_eq!(resp.status(), 201, "notification creation should succeed");
    let body = read_json(resp).await;
    body["id"]
        .as_str()
        .and_then(|raw| raw.parse().ok())
        .expect("notification id")
}
