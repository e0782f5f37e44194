//! Notification handlers, including the by-revision bulk endpoints.
//!
//! ```text
//! POST /notifications {"title":"Oil change due","motoId":7}
//! GET /notifications
//! GET /notifications/{id}
//! PATCH /notifications/{id} {"status":"done"}
//! DELETE /notifications/{id}
//! PATCH /notifications/revision/{revisionId} {"status":"done"}
//! DELETE /notifications/revision/{revisionId}
//! ```

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    Error, MotoId, NotificationChanges, NotificationDraft, NotificationId, RevisionId, WorkStatus,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::BearerCaller;
use crate::inbound::http::schemas::NotificationDto;
use crate::inbound::http::state::HttpState;

/// Notification creation body. Status defaults to pending.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationCreateRequest {
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<WorkStatus>,
}

impl From<NotificationCreateRequest> for NotificationDraft {
    fn from(value: NotificationCreateRequest) -> Self {
        Self {
            moto_id: value.moto_id.map(MotoId::new),
            revision_id: value.revision_id.map(RevisionId::new),
            title: value.title,
            description: value.description,
            status: value.status.unwrap_or(WorkStatus::Pending),
        }
    }
}

/// Notification patch body. Unknown keys are rejected; the owner is not
/// patchable. An explicit JSON null is treated the same as an absent key, so
/// the moto and revision references can only be replaced, not cleared.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NotificationPatchRequest {
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<WorkStatus>,
}

impl From<NotificationPatchRequest> for NotificationChanges {
    fn from(value: NotificationPatchRequest) -> Self {
        Self {
            moto_id: value.moto_id.map(MotoId::new),
            revision_id: value.revision_id.map(RevisionId::new),
            title: value.title,
            description: value.description,
            status: value.status,
        }
    }
}

/// Body for the bulk status update.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StatusRequest {
    pub status: WorkStatus,
}

/// Outcome of a bulk status update.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpdateResponse {
    pub message: String,
    pub updated: u64,
}

/// Create a notification for the caller.
#[utoipa::path(
    post,
    path = "/notifications",
    request_body = NotificationCreateRequest,
    responses(
        (status = 201, description = "Notification created", body = NotificationDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "createNotification"
)]
#[post("/notifications")]
pub async fn create_notification(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    payload: web::Json<NotificationCreateRequest>,
) -> ApiResult<HttpResponse> {
    let notification = state
        .notifications
        .create(&caller.0, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(NotificationDto::from(notification)))
}

/// List the caller's notifications.
#[utoipa::path(
    get,
    path = "/notifications",
    responses(
        (status = 200, description = "Notifications", body = [NotificationDto]),
        (status = 401, description = "Not authorized", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("/notifications")]
pub async fn list_notifications(
    state: web::Data<HttpState>,
    caller: BearerCaller,
) -> ApiResult<web::Json<Vec<NotificationDto>>> {
    let notifications = state.notifications.list(&caller.0).await?;
    Ok(web::Json(
        notifications
            .into_iter()
            .map(NotificationDto::from)
            .collect(),
    ))
}

/// Fetch one of the caller's notifications.
#[utoipa::path(
    get,
    path = "/notifications/{id}",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification", body = NotificationDto),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Notification not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "getNotification"
)]
#[get("/notifications/{id}")]
pub async fn get_notification(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<web::Json<NotificationDto>> {
    let notification = state
        .notifications
        .get(&caller.0, NotificationId::new(path.into_inner()))
        .await?;
    Ok(web::Json(NotificationDto::from(notification)))
}

/// Update one of the caller's notifications.
#[utoipa::path(
    patch,
    path = "/notifications/{id}",
    request_body = NotificationPatchRequest,
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Updated notification", body = NotificationDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Notification not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "updateNotification"
)]
#[patch("/notifications/{id}")]
pub async fn update_notification(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
    payload: web::Json<NotificationPatchRequest>,
) -> ApiResult<web::Json<NotificationDto>> {
    let notification = state
        .notifications
        .update(
            &caller.0,
            NotificationId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(NotificationDto::from(notification)))
}

/// Delete one of the caller's notifications.
#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    params(("id" = i64, Path, description = "Notification id")),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Notification not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "deleteNotification"
)]
#[delete("/notifications/{id}")]
pub async fn delete_notification(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .notifications
        .delete(&caller.0, NotificationId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete every notification attached to one of the caller's revisions.
#[utoipa::path(
    delete,
    path = "/notifications/revision/{revisionId}",
    params(("revisionId" = i64, Path, description = "Revision id")),
    responses(
        (status = 204, description = "Notifications deleted"),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Revision not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "deleteNotificationsByRevision"
)]
#[delete("/notifications/revision/{revision_id}")]
pub async fn delete_by_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .notifications
        .delete_by_revision(&caller.0, RevisionId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Set the status of every notification attached to one of the caller's
/// revisions.
#[utoipa::path(
    patch,
    path = "/notifications/revision/{revisionId}",
    request_body = StatusRequest,
    params(("revisionId" = i64, Path, description = "Revision id")),
    responses(
        (status = 200, description = "Bulk update outcome", body = BulkUpdateResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Revision not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "updateNotificationStatusByRevision"
)]
#[patch("/notifications/revision/{revision_id}")]
pub async fn set_status_by_revision(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
    payload: web::Json<StatusRequest>,
) -> ApiResult<web::Json<BulkUpdateResponse>> {
    let updated = state
        .notifications
        .set_status_by_revision(
            &caller.0,
            RevisionId::new(path.into_inner()),
            payload.status,
        )
        .await?;
    Ok(web::Json(BulkUpdateResponse {
        message: "updated".to_owned(),
        updated,
    }))
}
