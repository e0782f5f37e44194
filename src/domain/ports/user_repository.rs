//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::user::{NewUser, User, UserChanges, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The email uniqueness constraint was violated.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(value: UserPersistenceError) -> Self {
        match value {
            UserPersistenceError::DuplicateEmail { .. } => {
                Error::conflict("email already registered")
            }
            other => Error::internal(other.to_string()),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account, assigning id and creation timestamp.
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user by lowercased email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError>;

    /// Apply a partial update, returning the updated row if it exists.
    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Delete the user and every resource they own (motos, revisions,
    /// notifications) in one transaction. Returns false when no such user
    /// exists.
    async fn delete_cascade(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
