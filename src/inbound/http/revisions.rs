//! Maintenance revision handlers.
//!
//! ```text
//! POST /revisions {"motoId":7,"title":"Oil change","service":"engine"}
//! GET /revisions
//! GET /revisions/{id}
//! PATCH /revisions/{id} {"status":"done"}
//! DELETE /revisions/{id}
//! ```
//!
//! Deleting a revision also removes every notification that references it.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, MotoId, RevisionChanges, RevisionDraft, RevisionId, WorkStatus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::BearerCaller;
use crate::inbound::http::schemas::RevisionDto;
use crate::inbound::http::state::HttpState;

/// Revision creation body. Status is not accepted: new revisions always start
/// pending.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevisionCreateRequest {
    pub moto_id: i64,
    pub title: String,
    pub service: String,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    #[serde(default)]
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<String>,
}

impl From<RevisionCreateRequest> for RevisionDraft {
    fn from(value: RevisionCreateRequest) -> Self {
        Self {
            moto_id: MotoId::new(value.moto_id),
            title: value.title,
            service: value.service,
            details: value.details,
            date: value.date,
            time: value.time,
            km: value.km,
            auto_reminder_enabled: value.auto_reminder_enabled,
            auto_reminder_interval: value.auto_reminder_interval,
        }
    }
}

/// Revision patch body. Unknown keys are rejected; the owner and moto
/// references are not patchable. An explicit JSON null is treated the same as
/// an absent key, so nullable attributes can only be replaced, not cleared.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RevisionPatchRequest {
    pub title: Option<String>,
    pub service: Option<String>,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: Option<bool>,
    pub auto_reminder_interval: Option<String>,
    pub status: Option<WorkStatus>,
}

impl From<RevisionPatchRequest> for RevisionChanges {
    fn from(value: RevisionPatchRequest) -> Self {
        Self {
            title: value.title,
            service: value.service,
            details: value.details,
            date: value.date,
            time: value.time,
            km: value.km,
            auto_reminder_enabled: value.auto_reminder_enabled,
            auto_reminder_interval: value.auto_reminder_interval,
            status: value.status,
        }
    }
}

/// Schedule a revision for one of the caller's motos.
#[utoipa::path(
    post,
    path = "/revisions",
    request_body = RevisionCreateRequest,
    responses(
        (status = 201, description = "Revision created", body = RevisionDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Moto not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["revisions"],
    operation_id = "createRevision"
)]
#[post("/revisions")]
pub async fn create_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    payload: web::Json<RevisionCreateRequest>,
) -> ApiResult<HttpResponse> {
    let revision = state
        .revisions
        .create(&caller.0, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(RevisionDto::from(revision)))
}

/// List the caller's revisions across all their motos.
#[utoipa::path(
    get,
    path = "/revisions",
    responses(
        (status = 200, description = "Revisions", body = [RevisionDto]),
        (status = 401, description = "Not authorized", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["revisions"],
    operation_id = "listRevisions"
)]
#[get("/revisions")]
pub async fn list_revisions(
    state: web::Data<HttpState>,
    caller: BearerCaller,
) -> ApiResult<web::Json<Vec<RevisionDto>>> {
    let revisions = state.revisions.list(&caller.0).await?;
    Ok(web::Json(
        revisions.into_iter().map(RevisionDto::from).collect(),
    ))
}

/// Fetch one of the caller's revisions.
#[utoipa::path(
    get,
    path = "/revisions/{id}",
    params(("id" = i64, Path, description = "Revision id")),
    responses(
        (status = 200, description = "Revision", body = RevisionDto),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Revision not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["revisions"],
    operation_id = "getRevision"
)]
#[get("/revisions/{id}")]
pub async fn get_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RevisionDto>> {
    let revision = state
        .revisions
        .get(&caller.0, RevisionId::new(path.into_inner()))
        .await?;
    Ok(web::Json(RevisionDto::from(revision)))
}

/// Update one of the caller's revisions.
#[utoipa::path(
    patch,
    path = "/revisions/{id}",
    request_body = RevisionPatchRequest,
    params(("id" = i64, Path, description = "Revision id")),
    responses(
        (status = 200, description = "Updated revision", body = RevisionDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Revision not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["revisions"],
    operation_id = "updateRevision"
)]
#[patch("/revisions/{id}")]
pub async fn update_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
    payload: web::Json<RevisionPatchRequest>,
) -> ApiResult<web::Json<RevisionDto>> {
    let revision = state
        .revisions
        .update(
            &caller.0,
            RevisionId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(RevisionDto::from(revision)))
}

/// Delete one of the caller's revisions and its notifications.
#[utoipa::path(
    delete,
    path = "/revisions/{id}",
    params(("id" = i64, Path, description = "Revision id")),
    responses(
        (status = 204, description = "Revision deleted"),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Revision not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["revisions"],
    operation_id = "deleteRevision"
)]
#[delete("/revisions/{id}")]
pub async fn delete_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .revisions
        .delete(&caller.0, RevisionId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
