//! Repository ports for the hexagonal boundary.
//!
//! Each owned resource kind has one port. Adapters live under
//! `outbound::persistence`; the domain services only ever see these traits.

mod macros;
pub(crate) use macros::define_port_error;

mod moto_repository;
mod notification_repository;
mod revision_repository;
mod user_repository;

pub use moto_repository::{MotoPersistenceError, MotoRepository};
pub use notification_repository::{NotificationPersistenceError, NotificationRepository};
pub use revision_repository::{RevisionPersistenceError, RevisionRepository};
pub use user_repository::{UserPersistenceError, UserRepository};
