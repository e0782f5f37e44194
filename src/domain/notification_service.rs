//! Notification operations, including the by-revision bulk forms.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::notification::{
    NewNotification, Notification, NotificationChanges, NotificationDraft, NotificationId,
};
use crate::domain::ownership::{Caller, authorize_owner};
use crate::domain::ports::{NotificationRepository, RevisionRepository};
use crate::domain::revision::RevisionId;
use crate::domain::status::WorkStatus;

const KIND: &str = "notification";

/// Orchestrates notification operations.
///
/// The revision repository backs the bulk-by-revision operations: both verify
/// that the named revision exists and belongs to the caller before touching
/// any rows.
#[derive(Clone)]
pub struct NotificationService {
    notifications: Arc<dyn NotificationRepository>,
    revisions: Arc<dyn RevisionRepository>,
}

impl NotificationService {
    pub fn new(
        notifications: Arc<dyn NotificationRepository>,
        revisions: Arc<dyn RevisionRepository>,
    ) -> Self {
        Self {
            notifications,
            revisions,
        }
    }

    /// Create a notification for the caller.
    ///
    /// The optional moto and revision references are stored as given; they
    /// are informational and carry no referential guarantees.
    pub async fn create(
        &self,
        caller: &Caller,
        draft: NotificationDraft,
    ) -> Result<Notification, Error> {
        if draft.title.trim().is_empty() {
            return Err(Error::invalid_request("title must not be empty"));
        }

        let notification = self
            .notifications
            .insert(NewNotification {
                draft,
                owner_id: caller.id,
            })
            .await?;
        Ok(notification)
    }

    /// List every notification the caller owns.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<Notification>, Error> {
        Ok(self.notifications.list_by_owner(caller.id).await?)
    }

    /// Fetch one of the caller's notifications.
    pub async fn get(&self, caller: &Caller, id: NotificationId) -> Result<Notification, Error> {
        let notification = self.notifications.find_by_id(id).await?;
        authorize_owner(caller, notification, KIND)
    }

    /// Apply a partial update to one of the caller's notifications.
    pub async fn update(
        &self,
        caller: &Caller,
        id: NotificationId,
        changes: NotificationChanges,
    ) -> Result<Notification, Error> {
        let notification = self.notifications.find_by_id(id).await?;
        authorize_owner(caller, notification, KIND)?;

        if changes.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }

        self.notifications
            .update(id, changes)
            .await?
            .ok_or_else(|| Error::not_found("notification not found"))
    }

    /// Delete one of the caller's notifications.
    pub async fn delete(&self, caller: &Caller, id: NotificationId) -> Result<(), Error> {
        let notification = self.notifications.find_by_id(id).await?;
        authorize_owner(caller, notification, KIND)?;

        if !self.notifications.delete(id).await? {
            return Err(Error::not_found("notification not found"));
        }
        Ok(())
    }

    /// Delete every notification attached to one of the caller's revisions.
    /// Returns the number of notifications removed.
    pub async fn delete_by_revision(
        &self,
        caller: &Caller,
        revision: RevisionId,
    ) -> Result<u64, Error> {
        self.authorize_revision(caller, revision).await?;
        Ok(self.notifications.delete_by_revision(revision).await?)
    }

    /// Set the status of every notification attached to one of the caller's
    /// revisions. Returns the number of notifications updated.
    pub async fn set_status_by_revision(
        &self,
        caller: &Caller,
        revision: RevisionId,
        status: WorkStatus,
    ) -> Result<u64, Error> {
        self.authorize_revision(caller, revision).await?;
        Ok(self
            .notifications
            .set_status_by_revision(revision, status)
            .await?)
    }

    async fn authorize_revision(&self, caller: &Caller, id: RevisionId) -> Result<(), Error> {
        let revision = self.revisions.find_by_id(id).await?;
        authorize_owner(caller, revision, "revision")?;
        Ok(())
    }
}
