//! Maintenance revision entity and its mutation payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::moto::MotoId;
use crate::domain::ownership::Owned;
use crate::domain::status::WorkStatus;
use crate::domain::user::UserId;

/// Stable numeric revision identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RevisionId(i64);

impl RevisionId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RevisionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maintenance service record for a motorcycle.
///
/// ## Invariants
/// - `owner_id` equals the referenced moto's owner at creation time; the
///   service refuses to create a revision for somebody else's moto.
/// - `status` starts as [`WorkStatus::Pending`].
///
/// The auto-reminder fields are stored but no scheduler acts on them.
#[derive(Debug, Clone, PartialEq)]
pub struct Revision {
    pub id: RevisionId,
    pub moto_id: MotoId,
    pub title: String,
    pub service: String,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<String>,
    pub status: WorkStatus,
    pub owner_id: UserId,
}

impl Owned for Revision {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Caller-supplied fields for scheduling a revision.
#[derive(Debug, Clone)]
pub struct RevisionDraft {
    pub moto_id: MotoId,
    pub title: String,
    pub service: String,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<String>,
}

/// Full insert payload assembled by the service after the ownership-chain
/// check. Status is always pending at creation.
#[derive(Debug, Clone)]
pub struct NewRevision {
    pub draft: RevisionDraft,
    pub owner_id: UserId,
}

/// Partial update for a revision. The owner and moto references are
/// deliberately absent: a revision cannot be moved between motos or owners.
#[derive(Debug, Clone, Default)]
pub struct RevisionChanges {
    pub title: Option<String>,
    pub service: Option<String>,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: Option<bool>,
    pub auto_reminder_interval: Option<String>,
    pub status: Option<WorkStatus>,
}

impl RevisionChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.service.is_none()
            && self.details.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.km.is_none()
            && self.auto_reminder_enabled.is_none()
            && self.auto_reminder_interval.is_none()
            && self.status.is_none()
    }
}
