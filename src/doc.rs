//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for the
//! REST API: every HTTP endpoint from the inbound layer, the shared response
//! schemas, and the bearer token security scheme.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, WorkStatus};
use crate::inbound::http::auth::{AuthResponse, LoginFailure, LoginRequest, RegisterRequest};
use crate::inbound::http::motos::{MotoCreateRequest, MotoPatchRequest};
use crate::inbound::http::notifications::{
    BulkUpdateResponse, NotificationCreateRequest, NotificationPatchRequest, StatusRequest,
};
use crate::inbound::http::revisions::{RevisionCreateRequest, RevisionPatchRequest};
use crate::inbound::http::schemas::{MotoDto, NotificationDto, RevisionDto, UserDto};
use crate::inbound::http::users::UserPatchRequest;

/// Enrich the generated document with the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Token issued by POST /auth/login."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Motolog backend API",
        description = "HTTP interface for the motorcycle maintenance tracker."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::motos::create_moto,
        crate::inbound::http::motos::list_motos,
        crate::inbound::http::motos::get_moto,
        crate::inbound::http::motos::update_moto,
        crate::inbound::http::motos::delete_moto,
        crate::inbound::http::revisions::create_revision,
        crate::inbound::http::revisions::list_revisions,
        crate::inbound::http::revisions::get_revision,
        crate::inbound::http::revisions::update_revision,
        crate::inbound::http::revisions::delete_revision,
        crate::inbound::http::notifications::create_notification,
        crate::inbound::http::notifications::list_notifications,
        crate::inbound::http::notifications::get_notification,
        crate::inbound::http::notifications::update_notification,
        crate::inbound::http::notifications::delete_notification,
        crate::inbound::http::notifications::delete_by_revision,
        crate::inbound::http::notifications::set_status_by_revision,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        WorkStatus,
        UserDto,
        MotoDto,
        RevisionDto,
        NotificationDto,
        RegisterRequest,
        LoginRequest,
        AuthResponse,
        LoginFailure,
        UserPatchRequest,
        MotoCreateRequest,
        MotoPatchRequest,
        RevisionCreateRequest,
        RevisionPatchRequest,
        NotificationCreateRequest,
        NotificationPatchRequest,
        StatusRequest,
        BulkUpdateResponse,
    )),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Profile maintenance"),
        (name = "motos", description = "The caller's garage"),
        (name = "revisions", description = "Maintenance revisions"),
        (name = "notifications", description = "Notifications and bulk operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document references the API surface.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_contains_all_top_level_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/auth/register",
            "/auth/login",
            "/users/{id}",
            "/motos",
            "/motos/{id}",
            "/revisions",
            "/revisions/{id}",
            "/notifications",
            "/notifications/{id}",
            "/notifications/revision/{revisionId}",
            "/healthz/live",
            "/healthz/ready",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }
}
