//! Domain model for the maintenance tracker.
//!
//! Everything in this module is transport and storage agnostic. Inbound
//! adapters translate HTTP requests into the payload types defined here;
//! outbound adapters implement the repository ports under [`ports`].

pub mod account_service;
pub mod auth;
pub mod error;
pub mod garage_service;
pub mod moto;
pub mod notification;
pub mod notification_service;
pub mod ownership;
pub mod password;
pub mod ports;
pub mod revision;
pub mod revision_service;
pub mod status;
pub mod token;
pub mod user;

pub use account_service::{AccountService, AuthenticatedAccount};
pub use auth::{CredentialValidationError, LoginPayload, RegisterPayload};
pub use error::{Error, ErrorCode};
pub use garage_service::GarageService;
pub use moto::{Moto, MotoChanges, MotoDraft, MotoId, NewMoto};
pub use notification::{
    NewNotification, Notification, NotificationChanges, NotificationDraft, NotificationId,
};
pub use notification_service::NotificationService;
pub use ownership::{Caller, Owned, authorize_owner, authorize_self};
pub use password::{Argon2SecretHasher, SecretHashError, SecretHasher};
pub use revision::{NewRevision, Revision, RevisionChanges, RevisionDraft, RevisionId};
pub use revision_service::RevisionService;
pub use status::{ParseWorkStatusError, WorkStatus};
pub use token::{Claims, TokenConfig, TokenError, TokenService};
pub use user::{NewUser, User, UserChanges, UserId, UserPatch};
