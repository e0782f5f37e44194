//! Motorcycle entity and its mutation payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ownership::Owned;
use crate::domain::user::UserId;

/// Stable numeric motorcycle identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotoId(i64);

impl MotoId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Motorcycle registered by a user.
///
/// Owned exclusively by `owner_id`; only the owner may read or mutate it.
#[derive(Debug, Clone, PartialEq)]
pub struct Moto {
    pub id: MotoId,
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
    pub owner_id: UserId,
}

impl Owned for Moto {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Caller-supplied fields for registering a motorcycle. The owner is never
/// part of this payload; services set it from the verified caller.
#[derive(Debug, Clone)]
pub struct MotoDraft {
    pub name: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
}

/// Full insert payload assembled by the service.
#[derive(Debug, Clone)]
pub struct NewMoto {
    pub draft: MotoDraft,
    pub owner_id: UserId,
}

/// Partial update for a motorcycle. Enumerates exactly the mutable fields;
/// the owner reference is deliberately absent.
#[derive(Debug, Clone, Default)]
pub struct MotoChanges {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub km: Option<i32>,
    pub plate: Option<String>,
    pub color: Option<String>,
    pub next_revision_date: Option<DateTime<Utc>>,
}

impl MotoChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.km.is_none()
            && self.plate.is_none()
            && self.color.is_none()
            && self.next_revision_date.is_none()
    }
}
