//! Port abstraction for motorcycle persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::moto::{Moto, MotoChanges, MotoId, NewMoto};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by moto repository adapters.
    pub enum MotoPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "moto repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "moto repository query failed: {message}",
    }
}

impl From<MotoPersistenceError> for Error {
    fn from(value: MotoPersistenceError) -> Self {
        Error::internal(value.to_string())
    }
}

#[async_trait]
pub trait MotoRepository: Send + Sync {
    /// Insert a new moto, assigning its id.
    async fn insert(&self, moto: NewMoto) -> Result<Moto, MotoPersistenceError>;

    /// List every moto owned by the given user.
    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Moto>, MotoPersistenceError>;

    /// Fetch a moto by identifier regardless of owner.
    async fn find_by_id(&self, id: MotoId) -> Result<Option<Moto>, MotoPersistenceError>;

    /// Apply a partial update, returning the updated row if it exists.
    async fn update(
        &self,
        id: MotoId,
        changes: MotoChanges,
    ) -> Result<Option<Moto>, MotoPersistenceError>;

    /// Delete a moto. Returns false when no such moto exists.
    async fn delete(&self, id: MotoId) -> Result<bool, MotoPersistenceError>;
}
