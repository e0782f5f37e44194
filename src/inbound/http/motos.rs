//! Garage handlers.
//!
//! ```text
//! POST /motos {"name":"Tracer","brand":"Yamaha"}
//! GET /motos
//! GET /motos/{id}
//! PUT /motos/{id} {"km":15000}
//! DELETE /motos/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{Error, MotoChanges, MotoDraft, MotoId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::BearerCaller;
use crate::inbound::http::schemas::MotoDto;
use crate::inbound::http::state::HttpState;

/// Moto creation body.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotoCreateRequest {
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
}

impl From<MotoCreateRequest> for MotoDraft {
    fn from(value: MotoCreateRequest) -> Self {
        Self {
            name: value.name,
            brand: value.brand,
            model: value.model,
            year: value.year,
            km: value.km,
            plate: value.plate,
            color: value.color,
            next_revision_date: value.next_revision_date,
        }
    }
}

/// Moto patch body. Unknown keys are rejected; the owner is not patchable.
/// An explicit JSON null is treated the same as an absent key, so nullable
/// attributes can only be replaced, not cleared.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MotoPatchRequest {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
}

impl From<MotoPatchRequest> for MotoChanges {
    fn from(value: MotoPatchRequest) -> Self {
        Self {
            name: value.name,
            brand: value.brand,
            model: value.model,
            year: value.year,
            km: value.km,
            plate: value.plate,
            color: value.color,
            next_revision_date: value.next_revision_date,
        }
    }
}

/// Register a motorcycle for the caller.
#[utoipa::path(
    post,
    path = "/motos",
    request_body = MotoCreateRequest,
    responses(
        (status = 201, description = "Moto created", body = MotoDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["motos"],
    operation_id = "createMoto"
)]
#[post("/motos")]
pub async fn create_moto(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    payload: web::Json<MotoCreateRequest>,
) -> ApiResult<HttpResponse> {
    let moto = state
        .garage
        .create(&caller.0, payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(MotoDto::from(moto)))
}

/// List the caller's motorcycles.
#[utoipa::path(
    get,
    path = "/motos",
    responses(
        (status = 200, description = "Motos", body = [MotoDto]),
        (status = 401, description = "Not authorized", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["motos"],
    operation_id = "listMotos"
)]
#[get("/motos")]
pub async fn list_motos(
    state: web::Data<HttpState>,
    caller: BearerCaller,
) -> ApiResult<web::Json<Vec<MotoDto>>> {
    let motos = state.garage.list(&caller.0).await?;
    Ok(web::Json(motos.into_iter().map(MotoDto::from).collect()))
}

/// Fetch one of the caller's motorcycles.
#[utoipa::path(
    get,
    path = "/motos/{id}",
    params(("id" = i64, Path, description = "Moto id")),
    responses(
        (status = 200, description = "Moto", body = MotoDto),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Moto not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["motos"],
    operation_id = "getMoto"
)]
#[get("/motos/{id}")]
pub async fn get_moto(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<web::Json<MotoDto>> {
    let moto = state
        .garage
        .get(&caller.0, MotoId::new(path.into_inner()))
        .await?;
    Ok(web::Json(MotoDto::from(moto)))
}

/// Update one of the caller's motorcycles.
#[utoipa::path(
    put,
    path = "/motos/{id}",
    request_body = MotoPatchRequest,
    params(("id" = i64, Path, description = "Moto id")),
    responses(
        (status = 200, description = "Updated moto", body = MotoDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Moto not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["motos"],
    operation_id = "updateMoto"
)]
#[put("/motos/{id}")]
pub async fn update_moto(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
    payload: web::Json<MotoPatchRequest>,
) -> ApiResult<web::Json<MotoDto>> {
    let moto = state
        .garage
        .update(
            &caller.0,
            MotoId::new(path.into_inner()),
            payload.into_inner().into(),
        )
        .await?;
    Ok(web::Json(MotoDto::from(moto)))
}

/// Delete one of the caller's motorcycles.
#[utoipa::path(
    delete,
    path = "/motos/{id}",
    params(("id" = i64, Path, description = "Moto id")),
    responses(
        (status = 204, description = "Moto deleted"),
        (status = 401, description = "Not authorized", body = Error),
        (status = 404, description = "Moto not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["motos"],
    operation_id = "deleteMoto"
)]
#[delete("/motos/{id}")]
pub async fn delete_moto(
    state: web::Data<HttpState>,
    caller: BearerCaller,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .garage
        .delete(&caller.0, MotoId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
