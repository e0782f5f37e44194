//! Authentication payloads with validated constructors.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a service.

use std::fmt;

use zeroize::Zeroizing;

/// Minimum trimmed length for a display name at registration.
pub const NAME_MIN: usize = 3;
/// Minimum length for a secret.
pub const SECRET_MIN: usize = 4;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialValidationError {
    /// Name was shorter than [`NAME_MIN`] once trimmed.
    NameTooShort { min: usize },
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Secret was blank.
    EmptySecret,
    /// Secret was shorter than [`SECRET_MIN`].
    SecretTooShort { min: usize },
}

impl fmt::Display for CredentialValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort { min } => {
                write!(f, "name must be at least {min} characters")
            }
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptySecret => write!(f, "password must not be empty"),
            Self::SecretTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
        }
    }
}

impl std::error::Error for CredentialValidationError {}

impl From<CredentialValidationError> for crate::domain::error::Error {
    fn from(value: CredentialValidationError) -> Self {
        Self::invalid_request(value.to_string())
    }
}

fn normalize_email(email: &str) -> Result<String, CredentialValidationError> {
    let normalized = email.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(CredentialValidationError::EmptyEmail);
    }
    Ok(normalized)
}

pub(crate) fn validate_secret(secret: &str) -> Result<(), CredentialValidationError> {
    if secret.is_empty() {
        return Err(CredentialValidationError::EmptySecret);
    }
    if secret.chars().count() < SECRET_MIN {
        return Err(CredentialValidationError::SecretTooShort { min: SECRET_MIN });
    }
    Ok(())
}

/// Validated registration payload.
///
/// ## Invariants
/// - `name` is trimmed and at least [`NAME_MIN`] characters.
/// - `email` is trimmed and lowercased.
/// - `secret` is at least [`SECRET_MIN`] characters and retains
///   caller-provided whitespace to avoid surprising credential comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterPayload {
    name: String,
    email: String,
    secret: Zeroizing<String>,
}

impl RegisterPayload {
    /// Construct a payload from raw inputs.
    pub fn try_from_parts(
        name: &str,
        email: &str,
        secret: &str,
    ) -> Result<Self, CredentialValidationError> {
        let name = name.trim();
        if name.chars().count() < NAME_MIN {
            return Err(CredentialValidationError::NameTooShort { min: NAME_MIN });
        }
        let email = normalize_email(email)?;
        validate_secret(secret)?;

        Ok(Self {
            name: name.to_owned(),
            email,
            secret: Zeroizing::new(secret.to_owned()),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Lowercased email suitable for storage and lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }
}

/// Validated login payload.
///
/// The secret-length check runs before any store lookup. It is a fast-reject
/// for inputs that could never match, not a security measure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPayload {
    email: String,
    secret: Zeroizing<String>,
}

impl LoginPayload {
    /// Construct a payload from raw inputs.
    pub fn try_from_parts(email: &str, secret: &str) -> Result<Self, CredentialValidationError> {
        let email = normalize_email(email)?;
        validate_secret(secret)?;

        Ok(Self {
            email,
            secret: Zeroizing::new(secret.to_owned()),
        })
    }

    /// Lowercased email suitable for lookups.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }
}
