//! Bearer-token request extractor.
//!
//! Resolves the `Authorization` header into a verified [`Caller`] before a
//! handler body runs. The token is taken as the substring after the last
//! space, so both `Bearer <token>` and a bare token are accepted.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use tracing::warn;

use crate::domain::ownership::NOT_AUTHORIZED;
use crate::domain::{Caller, Error, UserId};
use crate::inbound::http::state::HttpState;

/// Verified caller identity, extracted per request.
#[derive(Debug, Clone)]
pub struct BearerCaller(pub Caller);

impl BearerCaller {
    pub fn into_inner(self) -> Caller {
        self.0
    }
}

impl FromRequest for BearerCaller {
    type Error = Error;
    type Future = Ready<Result<Self, Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_caller(req))
    }
}

fn extract_caller(req: &HttpRequest) -> Result<BearerCaller, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("HTTP state is not configured"))?;

    let raw = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| Error::unauthorized(NOT_AUTHORIZED))?;

    let token = raw.rsplit(' ').next().unwrap_or(raw);
    let claims = state.tokens.verify(token).map_err(|_| {
        warn!("rejected invalid or expired bearer token");
        Error::unauthorized(NOT_AUTHORIZED)
    })?;

    Ok(BearerCaller(Caller {
        id: UserId::new(claims.id),
        email: claims.email,
    }))
}
