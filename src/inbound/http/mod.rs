//! HTTP inbound adapter exposing REST endpoints.

pub mod auth;
pub mod bearer;
pub mod error;
pub mod health;
pub mod motos;
pub mod notifications;
pub mod revisions;
pub mod routes;
pub mod schemas;
pub mod state;
pub mod users;

pub use bearer::BearerCaller;
pub use error::ApiResult;
pub use routes::configure;
pub use state::{HttpState, HttpStatePorts};
