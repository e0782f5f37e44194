//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use tracing::warn;

use crate::domain::{
    Moto, MotoChanges, MotoId, NewMoto, NewNotification, NewRevision, NewUser, Notification,
    NotificationChanges, NotificationId, Revision, RevisionChanges, RevisionId, User, UserChanges,
    UserId, WorkStatus,
};

use super::schema::{motos, notifications, revisions, users};

/// Parse a stored status string, defaulting to pending for unrecognised
/// values rather than failing the whole query.
fn parse_status(value: &str, table: &str, id: i64) -> WorkStatus {
    value.parse().unwrap_or_else(|_| {
        warn!(value, table, id, "unrecognised status value, defaulting to pending");
        WorkStatus::Pending
    })
}

// ---------------------------------------------------------------------------
// User models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            avatar_url: row.avatar_url,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub avatar_url: Option<&'a str>,
}

impl<'a> NewUserRow<'a> {
    pub fn from_domain(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            password_hash: &user.password_hash,
            avatar_url: user.avatar_url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserUpdateRow {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<UserChanges> for UserUpdateRow {
    fn from(changes: UserChanges) -> Self {
        Self {
            name: changes.name,
            email: changes.email,
            password_hash: changes.password_hash,
            avatar_url: changes.avatar_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Moto models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = motos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MotoRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
    pub owner_id: i64,
}

impl From<MotoRow> for Moto {
    fn from(row: MotoRow) -> Self {
        Self {
            id: MotoId::new(row.id),
            name: row.name,
            brand: row.brand,
            model: row.model,
            year: row.year,
            km: row.km,
            plate: row.plate,
            color: row.color,
            next_revision_date: row.next_revision_date,
            owner_id: UserId::new(row.owner_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = motos)]
pub(crate) struct NewMotoRow<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub model: Option<&'a str>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<&'a str>,
    pub color: Option<&'a str>,
    pub next_revision_date: Option<DateTime<Utc>>,
    pub owner_id: i64,
}

impl<'a> NewMotoRow<'a> {
    pub fn from_domain(moto: &'a NewMoto) -> Self {
        Self {
            name: &moto.draft.name,
            brand: &moto.draft.brand,
            model: moto.draft.model.as_deref(),
            year: moto.draft.year,
            km: moto.draft.km,
            plate: moto.draft.plate.as_deref(),
            color: moto.draft.color.as_deref(),
            next_revision_date: moto.draft.next_revision_date,
            owner_id: moto.owner_id.value(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = motos)]
pub(crate) struct MotoUpdateRow {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
}

impl From<MotoChanges> for MotoUpdateRow {
    fn from(changes: MotoChanges) -> Self {
        Self {
            name: changes.name,
            brand: changes.brand,
            model: changes.model,
            year: changes.year,
            km: changes.km,
            plate: changes.plate,
            color: changes.color,
            next_revision_date: changes.next_revision_date,
        }
    }
}

// ---------------------------------------------------------------------------
// Revision models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = revisions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RevisionRow {
    pub id: i64,
    pub moto_id: i64,
    pub title: String,
    pub service: String,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<String>,
    pub status: String,
    pub owner_id: i64,
}

impl From<RevisionRow> for Revision {
    fn from(row: RevisionRow) -> Self {
        let status = parse_status(&row.status, "revisions", row.id);
        Self {
            id: RevisionId::new(row.id),
            moto_id: MotoId::new(row.moto_id),
            title: row.title,
            service: row.service,
            details: row.details,
            date: row.date,
            time: row.time,
            km: row.km,
            auto_reminder_enabled: row.auto_reminder_enabled,
            auto_reminder_interval: row.auto_reminder_interval,
            status,
            owner_id: UserId::new(row.owner_id),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = revisions)]
pub(crate) struct NewRevisionRow<'a> {
    pub moto_id: i64,
    pub title: &'a str,
    pub service: &'a str,
    pub details: Option<&'a str>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<&'a str>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<&'a str>,
    pub status: &'a str,
    pub owner_id: i64,
}

impl<'a> NewRevisionRow<'a> {
    /// New revisions always start pending.
    pub fn from_domain(revision: &'a NewRevision) -> Self {
        Self {
            moto_id: revision.draft.moto_id.value(),
            title: &revision.draft.title,
            service: &revision.draft.service,
            details: revision.draft.details.as_deref(),
            date: revision.draft.date,
            time: revision.draft.time.as_deref(),
            km: revision.draft.km,
            auto_reminder_enabled: revision.draft.auto_reminder_enabled,
            auto_reminder_interval: revision.draft.auto_reminder_interval.as_deref(),
            status: WorkStatus::Pending.as_str(),
            owner_id: revision.owner_id.value(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = revisions)]
pub(crate) struct RevisionUpdateRow {
    pub title: Option<String>,
    pub service: Option<String>,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: Option<bool>,
    pub auto_reminder_interval: Option<String>,
    pub status: Option<String>,
}

impl From<RevisionChanges> for RevisionUpdateRow {
    fn from(changes: RevisionChanges) -> Self {
        Self {
            title: changes.title,
            service: changes.service,
            details: changes.details,
            date: changes.date,
            time: changes.time,
            km: changes.km,
            auto_reminder_enabled: changes.auto_reminder_enabled,
            auto_reminder_interval: changes.auto_reminder_interval,
            status: changes.status.map(|status| status.as_str().to_owned()),
        }
    }
}

// ---------------------------------------------------------------------------
// Notification models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = notifications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct NotificationRow {
    pub id: i64,
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        let status = parse_status(&row.status, "notifications", row.id);
        Self {
            id: NotificationId::new(row.id),
            moto_id: row.moto_id.map(MotoId::new),
            revision_id: row.revision_id.map(RevisionId::new),
            title: row.title,
            description: row.description,
            status,
            owner_id: UserId::new(row.owner_id),
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = notifications)]
pub(crate) struct NewNotificationRow<'a> {
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub status: &'a str,
    pub owner_id: i64,
}

impl<'a> NewNotificationRow<'a> {
    pub fn from_domain(notification: &'a NewNotification) -> Self {
        Self {
            moto_id: notification.draft.moto_id.map(MotoId::value),
            revision_id: notification.draft.revision_id.map(RevisionId::value),
            title: &notification.draft.title,
            description: notification.draft.description.as_deref(),
            status: notification.draft.status.as_str(),
            owner_id: notification.owner_id.value(),
        }
    }
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = notifications)]
pub(crate) struct NotificationUpdateRow {
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

impl From<NotificationChanges> for NotificationUpdateRow {
    fn from(changes: NotificationChanges) -> Self {
        Self {
            moto_id: changes.moto_id.map(MotoId::value),
            revision_id: changes.revision_id.map(RevisionId::value),
            title: changes.title,
            description: changes.description,
            status: changes.status.map(|status| status.as_str().to_owned()),
        }
    }
}
