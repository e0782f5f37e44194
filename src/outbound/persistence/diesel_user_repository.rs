//! PostgreSQL-backed `UserRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserChanges, UserId};

use super::models::{NewUserRow, UserRow, UserUpdateRow};
use super::pool::{DbPool, PoolError};
use super::schema::{motos, notifications, revisions, users};

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(email: &str, error: diesel::result::Error) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
        if matches!(kind, DatabaseErrorKind::UniqueViolation) {
            return UserPersistenceError::duplicate_email(email);
        }
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: UserRow = diesel::insert_into(users::table)
            .values(NewUserRow::from_domain(&user))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(&user.email, err))?;

        Ok(User::from(row))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .find(id.value())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error("", err))?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(email, err))?;

        Ok(row.map(User::from))
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let email = changes.email.clone().unwrap_or_default();

        let row: Option<UserRow> = diesel::update(users::table.find(id.value()))
            .set(UserUpdateRow::from(changes))
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(&email, err))?;

        Ok(row.map(User::from))
    }

    async fn delete_cascade(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let owner = id.value();

        // Everything the user owns goes with the account, in one transaction.
        let deleted = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(notifications::table.filter(notifications::owner_id.eq(owner)))
                        .execute(conn)
                        .await?;
                    diesel::delete(revisions::table.filter(revisions::owner_id.eq(owner)))
                        .execute(conn)
                        .await?;
                    diesel::delete(motos::table.filter(motos::owner_id.eq(owner)))
                        .execute(conn)
                        .await?;
                    diesel::delete(users::table.find(owner)).execute(conn).await
                }
                .scope_boxed()
            })
            .await
            .map_err(|err| map_diesel_error("", err))?;

        Ok(deleted > 0)
    }
}
