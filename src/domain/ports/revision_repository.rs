//! Port abstraction for revision persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::revision::{NewRevision, Revision, RevisionChanges, RevisionId};
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by revision repository adapters.
    pub enum RevisionPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "revision repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "revision repository query failed: {message}",
    }
}

impl From<RevisionPersistenceError> for Error {
    fn from(value: RevisionPersistenceError) -> Self {
        Error::internal(value.to_string())
    }
}

#[async_trait]
pub trait RevisionRepository: Send + Sync {
    /// Insert a new revision, assigning its id.
    async fn insert(&self, revision: NewRevision) -> Result<Revision, RevisionPersistenceError>;

    /// List every revision owned by the given user.
    async fn list_by_owner(&self, owner: UserId)
    -> Result<Vec<Revision>, RevisionPersistenceError>;

    /// Fetch a revision by identifier regardless of owner.
    async fn find_by_id(&self, id: RevisionId)
    -> Result<Option<Revision>, RevisionPersistenceError>;

    /// Apply a partial update, returning the updated row if it exists.
    async fn update(
        &self,
        id: RevisionId,
        changes: RevisionChanges,
    ) -> Result<Option<Revision>, RevisionPersistenceError>;

    /// Delete a revision together with every notification referencing it, in
    /// one transaction. Returns false when no such revision exists.
    async fn delete_cascade(&self, id: RevisionId) -> Result<bool, RevisionPersistenceError>;
}
