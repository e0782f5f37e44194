//! Identity token service.
//!
//! Issues and verifies compact HS256 tokens carrying `{id, email, exp}`.
//! Tokens are ephemeral: nothing is persisted, and verification is a pure
//! computation over the shared secret and the current time.
//!
//! Verification failures are opaque by contract: malformed input, a bad
//! signature, and an expired token all collapse into [`TokenError::Invalid`]
//! so callers cannot distinguish the sub-cases.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::domain::user::UserId;

type HmacSha256 = Hmac<Sha256>;

/// Default validity window for issued tokens.
const DEFAULT_TTL_HOURS: i64 = 2;

/// Signing configuration injected at process start.
///
/// The secret is deployment configuration, never a source literal.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenConfig {
    /// Build a configuration with the default two-hour validity window.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::hours(DEFAULT_TTL_HOURS),
        }
    }

    /// Override the validity window.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never log the secret.
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Claim set embedded in each token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub email: String,
    /// Expiry as a unix timestamp in seconds.
    pub exp: i64,
}

/// Opaque verification failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// Malformed token, bad signature, or expired token.
    #[error("invalid token")]
    Invalid,
    /// Token could not be produced.
    #[error("failed to sign token")]
    Signing,
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {
    alg: String,
    typ: String,
}

/// Issues and verifies signed identity assertions.
#[derive(Debug, Clone)]
pub struct TokenService {
    config: TokenConfig,
}

impl TokenService {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }

    /// Sign a claim set for the given identity, expiring `ttl` from now.
    pub fn issue(&self, id: UserId, email: &str) -> Result<String, TokenError> {
        self.issue_at(id, email, Utc::now())
    }

    /// Clock-injected variant of [`TokenService::issue`].
    pub fn issue_at(
        &self,
        id: UserId,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            id: id.value(),
            email: email.to_owned(),
            exp: (now + self.config.ttl).timestamp(),
        };
        let header = Header {
            alg: "HS256".to_owned(),
            typ: "JWT".to_owned(),
        };

        let header_json = serde_json::to_vec(&header).map_err(|_| TokenError::Signing)?;
        let claims_json = serde_json::to_vec(&claims).map_err(|_| TokenError::Signing)?;
        let signing_input = format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(header_json),
            URL_SAFE_NO_PAD.encode(claims_json)
        );

        let mut mac = HmacSha256::new_from_slice(&self.config.secret)
            .map_err(|_| TokenError::Signing)?;
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();

        Ok(format!(
            "{signing_input}.{}",
            URL_SAFE_NO_PAD.encode(signature)
        ))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Clock-injected variant of [`TokenService::verify`].
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(TokenError::Invalid)?;
        let claims_b64 = parts.next().ok_or(TokenError::Invalid)?;
        let sig_b64 = parts.next().ok_or(TokenError::Invalid)?;
        if parts.next().is_some() {
            return Err(TokenError::Invalid);
        }

        let header_raw = URL_SAFE_NO_PAD
            .decode(header_b64)
            .map_err(|_| TokenError::Invalid)?;
        let header: Header =
            serde_json::from_slice(&header_raw).map_err(|_| TokenError::Invalid)?;
        if header.alg != "HS256" || !header.typ.eq_ignore_ascii_case("JWT") {
            return Err(TokenError::Invalid);
        }

        let signature = URL_SAFE_NO_PAD
            .decode(sig_b64)
            .map_err(|_| TokenError::Invalid)?;
        let mut mac = HmacSha256::new_from_slice(&self.config.secret)
            .map_err(|_| TokenError::Invalid)?;
        mac.update(format!("{header_b64}.{claims_b64}").as_bytes());
        mac.verify_slice(&signature).map_err(|_| TokenError::Invalid)?;

        let claims_raw = URL_SAFE_NO_PAD
            .decode(claims_b64)
            .map_err(|_| TokenError::Invalid)?;
        let claims: Claims =
            serde_json::from_slice(&claims_raw).map_err(|_| TokenError::Invalid)?;

        if claims.exp <= now.timestamp() {
            return Err(TokenError::Invalid);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn service() -> TokenService {
        TokenService::new(TokenConfig::new(b"test-signing-secret".to_vec()))
    }

    #[rstest]
    fn issued_token_verifies_with_same_secret() {
        let service = service();
        let token = service
            .issue(UserId::new(42), "rider@example.com")
            .expect("issue");
        let claims = service.verify(&token).expect("verify");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "rider@example.com");
    }

    #[rstest]
    fn token_expires_after_two_hours() {
        let service = service();
        let issued = Utc::now();
        let token = service
            .issue_at(UserId::new(1), "rider@example.com", issued)
            .expect("issue");

        let just_before = issued + Duration::hours(2) - Duration::seconds(1);
        assert!(service.verify_at(&token, just_before).is_ok());

        let just_after = issued + Duration::hours(2) + Duration::seconds(1);
        assert_eq!(
            service.verify_at(&token, just_after),
            Err(TokenError::Invalid)
        );
    }

    #[rstest]
    fn tampered_signature_is_rejected() {
        let service = service();
        let token = service
            .issue(UserId::new(1), "rider@example.com")
            .expect("issue");
        let mut tampered = token.clone();
        let last = tampered.pop().expect("non-empty token");
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        assert_eq!(service.verify(&tampered), Err(TokenError::Invalid));
    }

    #[rstest]
    fn foreign_secret_is_rejected() {
        let token = service()
            .issue(UserId::new(1), "rider@example.com")
            .expect("issue");
        let other = TokenService::new(TokenConfig::new(b"another-secret".to_vec()));
        assert_eq!(other.verify(&token), Err(TokenError::Invalid));
    }

    #[rstest]
    #[case("")]
    #[case("not-a-token")]
    #[case("a.b")]
    #[case("a.b.c.d")]
    #[case("!!!.###.$$$")]
    fn malformed_tokens_are_rejected(#[case] token: &str) {
        assert_eq!(service().verify(token), Err(TokenError::Invalid));
    }
}
