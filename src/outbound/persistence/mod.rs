//! PostgreSQL persistence adapters using Diesel, plus an in-memory store.
//!
//! Repository implementations only translate between Diesel models and domain
//! types; no business logic lives here. Diesel row structs (`models.rs`) and
//! schema definitions (`schema.rs`) are internal implementation details, never
//! exposed to the domain layer. Connections are managed via `bb8` pools with
//! async integration through `diesel-async`.

mod diesel_moto_repository;
mod diesel_notification_repository;
mod diesel_revision_repository;
mod diesel_user_repository;
mod memory;
mod models;
mod pool;
mod schema;

pub use diesel_moto_repository::DieselMotoRepository;
pub use diesel_notification_repository::DieselNotificationRepository;
pub use diesel_revision_repository::DieselRevisionRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use memory::MemoryStore;
pub use pool::{DbPool, PoolConfig, PoolError};
