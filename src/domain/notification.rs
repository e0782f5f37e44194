//! Notification entity and its mutation payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::moto::MotoId;
use crate::domain::ownership::Owned;
use crate::domain::revision::RevisionId;
use crate::domain::status::WorkStatus;
use crate::domain::user::UserId;

/// Stable numeric notification identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(i64);

impl NotificationId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification shown to a user, optionally tied to a moto or revision.
///
/// The moto/revision references are not validated against the owner at
/// creation time; only `owner_id` governs access. Notifications referencing a
/// revision are cascade-deleted with it and are the target of the
/// bulk-by-revision operations.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub moto_id: Option<MotoId>,
    pub revision_id: Option<RevisionId>,
    pub title: String,
    pub description: Option<String>,
    pub status: WorkStatus,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Notification {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Caller-supplied fields for creating a notification.
#[derive(Debug, Clone)]
pub struct NotificationDraft {
    pub moto_id: Option<MotoId>,
    pub revision_id: Option<RevisionId>,
    pub title: String,
    pub description: Option<String>,
    pub status: WorkStatus,
}

/// Full insert payload assembled by the service.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub draft: NotificationDraft,
    pub owner_id: UserId,
}

/// Partial update for a notification. The owner reference is deliberately
/// absent.
#[derive(Debug, Clone, Default)]
pub struct NotificationChanges {
    pub moto_id: Option<MotoId>,
    pub revision_id: Option<RevisionId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<WorkStatus>,
}

impl NotificationChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.moto_id.is_none()
            && self.revision_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
    }
}
