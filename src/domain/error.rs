//! Domain-level error type.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! status codes and JSON envelopes.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed, is missing, or the caller does not own the
    /// resource. Ownership failures deliberately share this code so a
    /// non-owner cannot probe for resource existence.
    Unauthorized,
    /// A uniqueness constraint was violated.
    Conflict,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    #[schema(example = "invalid_request")]
    code: ErrorCode,
    #[schema(example = "Something went wrong")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error. Empty messages are a programming mistake and are
    /// replaced with the code's name so serialization never emits a blank.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = format!("{code:?}");
        }
        Self {
            code,
            message,
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorCode::InvalidRequest, "bad input")]
    #[case(ErrorCode::Conflict, "duplicate")]
    #[case(ErrorCode::NotFound, "missing")]
    fn constructors_preserve_code_and_message(#[case] code: ErrorCode, #[case] message: &str) {
        let err = Error::new(code, message);
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
    }

    #[rstest]
    fn blank_messages_are_replaced() {
        let err = Error::new(ErrorCode::NotFound, "   ");
        assert!(!err.message().trim().is_empty());
    }

    #[rstest]
    fn details_round_trip() {
        let err = Error::invalid_request("bad").with_details(serde_json::json!({"field": "name"}));
        let details = err.details().and_then(Value::as_object).expect("details");
        assert_eq!(details.get("field").and_then(Value::as_str), Some("name"));
    }

    #[rstest]
    fn serializes_snake_case_code() {
        let err = Error::unauthorized("not authorized");
        let value = serde_json::to_value(&err).expect("serialize");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("unauthorized")
        );
        assert!(value.get("details").is_none());
    }
}
