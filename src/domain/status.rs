//! Work status shared by revisions and notifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Completion status of a revision or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkStatus {
    Pending,
    Done,
}

impl WorkStatus {
    /// Wire representation used by JSON payloads and the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Done => "done",
        }
    }
}

impl Default for WorkStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a status string is neither `pending` nor `done`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("status must be pending or done, got {value:?}")]
pub struct ParseWorkStatusError {
    pub value: String,
}

impl FromStr for WorkStatus {
    type Err = ParseWorkStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "done" => Ok(Self::Done),
            other => Err(ParseWorkStatusError {
                value: other.to_owned(),
            }),
        }
    }
}
