//! PostgreSQL-backed `RevisionRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection as _, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{RevisionPersistenceError, RevisionRepository};
use crate::domain::{NewRevision, Revision, RevisionChanges, RevisionId, UserId};

use super::models::{NewRevisionRow, RevisionRow, RevisionUpdateRow};
use super::pool::{DbPool, PoolError};
use super::schema::{notifications, revisions};

/// Diesel-backed implementation of the `RevisionRepository` port.
#[derive(Clone)]
pub struct DieselRevisionRepository {
    pool: DbPool,
}

impl DieselRevisionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RevisionPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RevisionPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> RevisionPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RevisionPersistenceError::connection("database connection error")
        }
        _ => RevisionPersistenceError::query("database error"),
    }
}

#[async_trait]
impl RevisionRepository for DieselRevisionRepository {
    async fn insert(&self, revision: NewRevision) -> Result<Revision, RevisionPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: RevisionRow = diesel::insert_into(revisions::table)
            .values(NewRevisionRow::from_domain(&revision))
            .returning(RevisionRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Revision::from(row))
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Revision>, RevisionPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RevisionRow> = revisions::table
            .filter(revisions::owner_id.eq(owner.value()))
            .order_by(revisions::id)
            .select(RevisionRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Revision::from).collect())
    }

    async fn find_by_id(
        &self,
        id: RevisionId,
    ) -> Result<Option<Revision>, RevisionPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RevisionRow> = revisions::table
            .find(id.value())
            .select(RevisionRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Revision::from))
    }

    async fn update(
        &self,
        id: RevisionId,
        changes: RevisionChanges,
    ) -> Result<Option<Revision>, RevisionPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<RevisionRow> = diesel::update(revisions::table.find(id.value()))
            .set(RevisionUpdateRow::from(changes))
            .returning(RevisionRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Revision::from))
    }

    async fn delete_cascade(&self, id: RevisionId) -> Result<bool, RevisionPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let revision = id.value();

        // The revision and its dependent notifications go together or not at
        // all.
        let deleted = conn
            .transaction(|conn| {
                async move {
                    diesel::delete(
                        notifications::table.filter(notifications::revision_id.eq(revision)),
                    )
                    .execute(conn)
                    .await?;
                    diesel::delete(revisions::table.find(revision))
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}
