//! Port abstraction for notification persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::notification::{
    NewNotification, Notification, NotificationChanges, NotificationId,
};
use crate::domain::revision::RevisionId;
use crate::domain::status::WorkStatus;
use crate::domain::user::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by notification repository adapters.
    pub enum NotificationPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "notification repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "notification repository query failed: {message}",
    }
}

impl From<NotificationPersistenceError> for Error {
    fn from(value: NotificationPersistenceError) -> Self {
        Error::internal(value.to_string())
    }
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Insert a new notification, assigning id and creation timestamp.
    async fn insert(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, NotificationPersistenceError>;

    /// List every notification owned by the given user.
    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Notification>, NotificationPersistenceError>;

    /// Fetch a notification by identifier regardless of owner.
    async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> Result<Option<Notification>, NotificationPersistenceError>;

    /// Apply a partial update, returning the updated row if it exists.
    async fn update(
        &self,
        id: NotificationId,
        changes: NotificationChanges,
    ) -> Result<Option<Notification>, NotificationPersistenceError>;

    /// Delete a notification. Returns false when no such notification exists.
    async fn delete(&self, id: NotificationId) -> Result<bool, NotificationPersistenceError>;

    /// Delete every notification referencing the given revision. Returns the
    /// number of rows removed.
    async fn delete_by_revision(
        &self,
        revision: RevisionId,
    ) -> Result<u64, NotificationPersistenceError>;

    /// Set the status of every notification referencing the given revision.
    /// Returns the number of rows updated.
    async fn set_status_by_revision(
        &self,
        revision: RevisionId,
        status: WorkStatus,
    ) -> Result<u64, NotificationPersistenceError>;
}
