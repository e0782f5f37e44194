//! Route registration for the HTTP surface.

use actix_web::web;

use crate::domain::Error;
use crate::inbound::http::{auth, health, motos, notifications, revisions, users};

/// JSON extractor configuration turning deserialization failures into the
/// shared error envelope instead of Actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| Error::invalid_request(err.to_string()).into())
}

/// Register every API route on the given service config.
///
/// Health probes need `HealthState` and the API handlers need `HttpState`,
/// both provided as `web::Data` by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(health::live)
        .service(health::ready)
        .service(auth::register)
        .service(auth::login)
        .service(users::update_user)
        .service(users::delete_user)
        .service(motos::create_moto)
        .service(motos::list_motos)
        .service(motos::get_moto)
        .service(motos::update_moto)
        .service(motos::delete_moto)
        .service(revisions::create_revision)
        .service(revisions::list_revisions)
        .service(revisions::get_revision)
        .service(revisions::update_revision)
        .service(revisions::delete_revision)
        .service(notifications::create_notification)
        .service(notifications::list_notifications)
        // The by-revision routes must register before the `{id}` routes so a
        // literal "revision" segment is not captured as an id.
        .service(notifications::delete_by_revision)
        .service(notifications::set_status_by_revision)
        .service(notifications::get_notification)
        .service(notifications::update_notification)
        .service(notifications::delete_notification);
}
