//! Account lifecycle: registration, login, profile maintenance, deletion.

use std::sync::Arc;

use crate::domain::auth::{LoginPayload, RegisterPayload, validate_secret};
use crate::domain::error::Error;
use crate::domain::ownership::{Caller, NOT_AUTHORIZED, authorize_self};
use crate::domain::password::SecretHasher;
use crate::domain::ports::UserRepository;
use crate::domain::token::{TokenError, TokenService};
use crate::domain::user::{NewUser, User, UserChanges, UserId, UserPatch};

/// Uniform message for every login failure.
///
/// Unknown email and wrong secret deliberately produce the same text so the
/// endpoint cannot be used to enumerate accounts.
const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Result of a successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub user: User,
    pub token: String,
}

/// Orchestrates account operations over the user repository.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn SecretHasher>,
    tokens: TokenService,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn SecretHasher>,
        tokens: TokenService,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Create an account and sign the caller in.
    ///
    /// The repository enforces email uniqueness; a duplicate surfaces as a
    /// conflict regardless of the original email's casing because payload
    /// construction lowercases it.
    pub async fn register(&self, payload: RegisterPayload) -> Result<AuthenticatedAccount, Error> {
        let password_hash = self
            .hasher
            .hash(payload.secret())
            .map_err(|err| Error::internal(err.to_string()))?;

        let user = self
            .users
            .insert(NewUser {
                name: payload.name().to_owned(),
                email: payload.email().to_owned(),
                password_hash,
                avatar_url: None,
            })
            .await?;

        let token = self.issue_token(&user)?;
        tracing::info!(user_id = %user.id, "account registered");
        Ok(AuthenticatedAccount { user, token })
    }

    /// Verify credentials and issue a fresh token.
    pub async fn login(&self, payload: LoginPayload) -> Result<AuthenticatedAccount, Error> {
        let user = self
            .users
            .find_by_email(payload.email())
            .await?
            .ok_or_else(|| Error::unauthorized(INVALID_CREDENTIALS))?;

        if !self.hasher.verify(payload.secret(), &user.password_hash) {
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        }

        let token = self.issue_token(&user)?;
        Ok(AuthenticatedAccount { user, token })
    }

    /// Apply a profile patch to the caller's own account.
    ///
    /// A blank replacement secret is ignored rather than rejected; any other
    /// secret is validated and re-hashed before storage.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        target: UserId,
        patch: UserPatch,
    ) -> Result<User, Error> {
        authorize_self(caller, target)?;

        let changes = self.validate_patch(patch)?;
        if changes.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }

        self.users
            .update(target, changes)
            .await?
            .ok_or_else(|| Error::not_found("user not found"))
    }

    /// Delete the caller's own account together with every owned resource.
    pub async fn delete_account(&self, caller: &Caller, target: UserId) -> Result<(), Error> {
        authorize_self(caller, target)?;

        if !self.users.delete_cascade(target).await? {
            return Err(Error::not_found("user not found"));
        }
        tracing::info!(user_id = %target, "account deleted");
        Ok(())
    }

    fn validate_patch(&self, patch: UserPatch) -> Result<UserChanges, Error> {
        let mut changes = UserChanges {
            avatar_url: patch.avatar_url,
            ..UserChanges::default()
        };

        if let Some(name) = patch.name {
            let name = name.trim().to_owned();
            if name.is_empty() {
                return Err(Error::invalid_request("name must not be empty"));
            }
            changes.name = Some(name);
        }

        if let Some(email) = patch.email {
            let email = email.trim().to_lowercase();
            if email.is_empty() {
                return Err(Error::invalid_request("email must not be empty"));
            }
            changes.email = Some(email);
        }

        if let Some(secret) = patch.secret
            && !secret.is_empty()
        {
            validate_secret(&secret).map_err(Error::from)?;
            changes.password_hash = Some(
                self.hasher
                    .hash(&secret)
                    .map_err(|err| Error::internal(err.to_string()))?,
            );
        }

        Ok(changes)
    }

    fn issue_token(&self, user: &User) -> Result<String, Error> {
        self.tokens
            .issue(user.id, &user.email)
            .map_err(|err| match err {
                TokenError::Invalid => Error::unauthorized(NOT_AUTHORIZED),
                TokenError::Signing => Error::internal("failed to sign token"),
            })
    }
}
