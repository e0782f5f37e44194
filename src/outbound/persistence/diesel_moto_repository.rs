//! PostgreSQL-backed `MotoRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{MotoPersistenceError, MotoRepository};
use crate::domain::{Moto, MotoChanges, MotoId, NewMoto, UserId};

use super::models::{MotoRow, MotoUpdateRow, NewMotoRow};
use super::pool::{DbPool, PoolError};
use super::schema::motos;

/// Diesel-backed implementation of the `MotoRepository` port.
#[derive(Clone)]
pub struct DieselMotoRepository {
    pool: DbPool,
}

impl DieselMotoRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MotoPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            MotoPersistenceError::connection(message)
        }
    }
}

fn map_diesel_error(error: diesel::result::Error) -> MotoPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MotoPersistenceError::connection("database connection error")
        }
        _ => MotoPersistenceError::query("database error"),
    }
}

#[async_trait]
impl MotoRepository for DieselMotoRepository {
    async fn insert(&self, moto: NewMoto) -> Result<Moto, MotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: MotoRow = diesel::insert_into(motos::table)
            .values(NewMotoRow::from_domain(&moto))
            .returning(MotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(Moto::from(row))
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Moto>, MotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<MotoRow> = motos::table
            .filter(motos::owner_id.eq(owner.value()))
            .order_by(motos::id)
            .select(MotoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(Moto::from).collect())
    }

    async fn find_by_id(&self, id: MotoId) -> Result<Option<Moto>, MotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MotoRow> = motos::table
            .find(id.value())
            .select(MotoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Moto::from))
    }

    async fn update(
        &self,
        id: MotoId,
        changes: MotoChanges,
    ) -> Result<Option<Moto>, MotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<MotoRow> = diesel::update(motos::table.find(id.value()))
            .set(MotoUpdateRow::from(changes))
            .returning(MotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(Moto::from))
    }

    async fn delete(&self, id: MotoId) -> Result<bool, MotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(motos::table.find(id.value()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let err = map_pool_error(PoolError::build("bad url"));
        assert!(matches!(err, MotoPersistenceError::Connection { .. }));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, MotoPersistenceError::Query { .. }));
    }
}
