//! Profile maintenance handlers.
//!
//! ```text
//! PUT /users/{id} {"name":"Ada","avatarUrl":"https://..."}
//! DELETE /users/{id}
//! ```
//!
//! Both operations are self-only: the path id must match the token identity.

use actix_web::{HttpResponse, delete, put, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::BearerCaller;
use crate::inbound::http::schemas::UserDto;
use crate::inbound::http::state::HttpState;

/// Profile patch body. Unknown keys are rejected so a payload can never smuggle
/// fields the contract does not name.
///
/// An explicit JSON null is treated the same as an absent key: nullable
/// attributes cannot be cleared through this endpoint, only replaced.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatchRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub password: Option<String>,
}

impl From<UserPatchRequest> for UserPatch {
    fn from(value: UserPatchRequest) -> Self {
        Self {
            name: value.name,
            email: value.email,
            avatar_url: value.avatar_url,
            secret: value.password,
        }
    }
}

/// Update the caller's own profile.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UserPatchRequest,
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 409, description = "Email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
    payload: web::Json<UserPatchRequest>,
) -> ApiResult<web::Json<UserDto>> {
    let target = UserId::new(path.into_inner());
    let user = state
        .accounts
        .update_profile(&caller.0, target, payload.into_inner().into())
        .await?;
    Ok(web::Json(UserDto::from(user)))
}

/// Delete the caller's own account and everything it owns.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "User not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let target = UserId::new(path.into_inner());
    state.accounts.delete_account(&caller.0, target).await?;
    Ok(HttpResponse::NoContent().finish())
}
