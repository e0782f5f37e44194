//! Response projections shared across handler modules.
//!
//! Entity ids serialize as strings while reference ids stay numeric, and
//! timestamps serialize as ISO-8601 or null. Sensitive fields (password hash,
//! owner id) never appear here.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Moto, Notification, Revision, User, WorkStatus};

fn iso8601(value: Option<DateTime<Utc>>) -> Option<String> {
    value.map(|ts| ts.to_rfc3339_opts(SecondsFormat::Secs, true))
}

/// Public projection of a user account.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    #[schema(example = "1")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
        }
    }
}

/// Public projection of a motorcycle.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MotoDto {
    #[schema(example = "1")]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<String>,
}

impl From<Moto> for MotoDto {
    fn from(moto: Moto) -> Self {
        Self {
            id: moto.id.to_string(),
            name: moto.name,
            brand: moto.brand,
            model: moto.model,
            year: moto.year,
            km: moto.km,
            plate: moto.plate,
            color: moto.color,
            next_revision_date: iso8601(moto.next_revision_date),
        }
    }
}

/// Public projection of a maintenance revision.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevisionDto {
    #[schema(example = "1")]
    pub id: String,
    pub moto_id: i64,
    pub title: String,
    pub service: String,
    pub details: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub km: Option<i32>,
    pub auto_reminder_enabled: bool,
    pub auto_reminder_interval: Option<String>,
    pub status: WorkStatus,
}

impl From<Revision> for RevisionDto {
    fn from(revision: Revision) -> Self {
        Self {
            id: revision.id.to_string(),
            moto_id: revision.moto_id.value(),
            title: revision.title,
            service: revision.service,
            details: revision.details,
            date: iso8601(revision.date),
            time: revision.time,
            km: revision.km,
            auto_reminder_enabled: revision.auto_reminder_enabled,
            auto_reminder_interval: revision.auto_reminder_interval,
            status: revision.status,
        }
    }
}

/// Public projection of a notification.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    #[schema(example = "1")]
    pub id: String,
    pub moto_id: Option<i64>,
    pub revision_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: WorkStatus,
    pub created_at: Option<String>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            moto_id: notification.moto_id.map(|id| id.value()),
            revision_id: notification.revision_id.map(|id| id.value()),
            title: notification.title,
            description: notification.description,
            status: notification.status,
            created_at: iso8601(Some(notification.created_at)),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone as _;
    use rstest::rstest;
    use serde_json::Value;

    use crate::domain::{MotoId, NotificationId, UserId};

    #[rstest]
    fn moto_serializes_string_id_and_camel_case() {
        let moto = Moto {
            id: MotoId::new(7),
            name: "Tracer".to_owned(),
            brand: "Yamaha".to_owned(),
            model: Some("MT-09".to_owned()),
            year: Some(2021),
            km: Some(12_000),
            plate: None,
            color: None,
            next_revision_date: Some(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()),
            owner_id: UserId::new(1),
        };
        let value = serde_json::to_value(MotoDto::from(moto)).expect("serialize");
        assert_eq!(value.get("id").and_then(Value::as_str), Some("7"));
        assert_eq!(
            value.get("nextRevisionDate").and_then(Value::as_str),
            Some("2026-03-01T09:00:00Z")
        );
        assert!(value.get("ownerId").is_none());
        assert!(value.get("owner_id").is_none());
    }

    #[rstest]
    fn notification_keeps_reference_ids_numeric() {
        let notification = Notification {
            id: NotificationId::new(3),
            moto_id: Some(MotoId::new(7)),
            revision_id: None,
            title: "Oil change due".to_owned(),
            description: None,
            status: WorkStatus::Pending,
            owner_id: UserId::new(1),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        };
        let value = serde_json::to_value(NotificationDto::from(notification)).expect("serialize");
        assert_eq!(value.get("id").and_then(Value::as_str), Some("3"));
        assert_eq!(value.get("motoId").and_then(Value::as_i64), Some(7));
        assert!(value.get("revisionId").expect("present").is_null());
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("pending")
        );
    }
}
