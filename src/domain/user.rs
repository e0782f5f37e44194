//! User account entity and its mutation payloads.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable numeric user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registered user account.
///
/// ## Invariants
/// - `email` is stored lowercased and is unique across accounts.
/// - `password_hash` is a one-way argon2 hash; the plaintext secret is never
///   stored and the hash never leaves the domain boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to persist a new account. The repository assigns the id
/// and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar_url: Option<String>,
}

/// Validated partial update for a user profile.
///
/// The secret, when present, has already been re-hashed by the service; no
/// field here can change the account's identity beyond what the caller is
/// permitted to touch.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserChanges {
    /// True when no field would be written.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password_hash.is_none()
            && self.avatar_url.is_none()
    }
}

/// Unvalidated profile patch as accepted from the caller.
///
/// `secret` carries the plaintext replacement secret; an empty string is
/// ignored rather than rejected, matching the profile-update contract.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub secret: Option<String>,
}
