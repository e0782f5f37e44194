//! Registration and login handlers.
//!
//! ```text
//! POST /auth/register {"name":"Ada","email":"ada@example.com","password":"secret"}
//! POST /auth/login {"email":"ada@example.com","password":"secret"}
//! ```
//!
//! Login is a compatibility surface: every credential failure is reported as
//! `200 {"success":false,"error":...}` so clients can branch on the body
//! without special-casing status codes. Registration uses regular statuses.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, LoginPayload, RegisterPayload};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::UserDto;
use crate::inbound::http::state::HttpState;

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    pub user: UserDto,
    pub token: String,
}

/// Login failure envelope, returned with status 200.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginFailure {
    pub success: bool,
    pub error: String,
}

/// Create an account and sign the caller in.
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let payload = RegisterPayload::try_from_parts(&payload.name, &payload.email, &payload.password)
        .map_err(Error::from)?;

    let account = state.accounts.register(payload).await?;
    Ok(HttpResponse::Created().json(AuthResponse {
        success: true,
        user: UserDto::from(account.user),
        token: account.token,
    }))
}

/// Verify credentials and issue a fresh token.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login outcome; check the success flag", body = AuthResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let payload = payload.into_inner();
    let payload = match LoginPayload::try_from_parts(&payload.email, &payload.password) {
        Ok(payload) => payload,
        Err(err) => return Ok(login_failure(err.to_string())),
    };

    match state.accounts.login(payload).await {
        Ok(account) => Ok(HttpResponse::Ok().json(AuthResponse {
            success: true,
            user: UserDto::from(account.user),
            token: account.token,
        })),
        Err(err)
            if matches!(
                err.code(),
                ErrorCode::InvalidRequest | ErrorCode::Unauthorized
            ) =>
        {
            Ok(login_failure(err.message().to_owned()))
        }
        Err(err) => Err(err),
    }
}

fn login_failure(error: String) -> HttpResponse {
    HttpResponse::Ok().json(LoginFailure {
        success: false,
        error,
    })
}
