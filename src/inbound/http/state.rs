//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on domain services and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    MotoRepository, NotificationRepository, RevisionRepository, UserRepository,
};
use crate::domain::{
    AccountService, GarageService, NotificationService, RevisionService, SecretHasher,
    TokenService,
};

/// Parameter object bundling the port implementations behind the services.
pub struct HttpStatePorts {
    pub users: Arc<dyn UserRepository>,
    pub motos: Arc<dyn MotoRepository>,
    pub revisions: Arc<dyn RevisionRepository>,
    pub notifications: Arc<dyn NotificationRepository>,
    pub hasher: Arc<dyn SecretHasher>,
    pub tokens: TokenService,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: AccountService,
    pub garage: GarageService,
    pub revisions: RevisionService,
    pub notifications: NotificationService,
    pub tokens: TokenService,
}

impl HttpState {
    /// Wire the domain services from a ports bundle.
    pub fn assemble(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            motos,
            revisions,
            notifications,
            hasher,
            tokens,
        } = ports;
        Self {
            accounts: AccountService::new(users, hasher, tokens.clone()),
            garage: GarageService::new(Arc::clone(&motos)),
            revisions: RevisionService::new(Arc::clone(&revisions), motos),
            notifications: NotificationService::new(notifications, revisions),
            tokens,
        }
    }
}
