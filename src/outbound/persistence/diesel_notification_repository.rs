//! PostgreSQL-backed `NotificationRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{NotificationPersistenceError, NotificationRepository};
use crate::domain::{
    NewNotification, Notification, NotificationChanges, NotificationId, RevisionId, UserId,
    WorkStatus,
};

use super::models::{NewNotificationRow, NotificationRow, NotificationUpdateRow};
use super::pool::{DbPool, PoolError};
use super::schema::notifications;

/// Diesel-backed implementation of the `NotificationRepository` port.
#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NotificationPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            NotificationPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> NotificationPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            NotificationPersistenceError::connection("database connection error")
        }
        _ => NotificationPersistenceError::query("database error"),
    }
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn insert(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: NotificationRow = diesel::insert_into(notifications::table)
            .values(NewNotificationRow::from_domain(&notification))
            .returning(NotificationRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Notification::from(row))
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Notification>, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<NotificationRow> = notifications::table
            .filter(notifications::owner_id.eq(owner.value()))
            .order_by(notifications::id)
            .select(NotificationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> Result<Option<Notification>, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NotificationRow> = notifications::table
            .find(id.value())
            .select(NotificationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Notification::from))
    }

    async fn update(
        &self,
        id: NotificationId,
        changes: NotificationChanges,
    ) -> Result<Option<Notification>, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<NotificationRow> = diesel::update(notifications::table.find(id.value()))
            .set(NotificationUpdateRow::from(changes))
            .returning(NotificationRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Notification::from))
    }

    async fn delete(&self, id: NotificationId) -> Result<bool, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(notifications::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }

    async fn delete_by_revision(
        &self,
        revision: RevisionId,
    ) -> Result<u64, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            notifications::table.filter(notifications::revision_id.eq(revision.value())),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(deleted as u64)
    }

    async fn set_status_by_revision(
        &self,
        revision: RevisionId,
        status: WorkStatus,
    ) -> Result<u64, NotificationPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let updated = diesel::update(
            notifications::table.filter(notifications::revision_id.eq(revision.value())),
        )
        .set(notifications::status.eq(status.as_str()))
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;

        Ok(updated as u64)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::checkout("connection refused"));
        assert!(matches!(
            err,
            NotificationPersistenceError::Connection { .. }
        ));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, NotificationPersistenceError::Query { .. }));
    }
}
