//! Garage operations: the caller's motorcycles.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::moto::{Moto, MotoChanges, MotoDraft, MotoId, NewMoto};
use crate::domain::ownership::{Caller, authorize_owner};
use crate::domain::ports::MotoRepository;

const KIND: &str = "moto";

/// Orchestrates motorcycle operations over the moto repository.
#[derive(Clone)]
pub struct GarageService {
    motos: Arc<dyn MotoRepository>,
}

impl GarageService {
    pub fn new(motos: Arc<dyn MotoRepository>) -> Self {
        Self { motos }
    }

    /// Register a motorcycle for the caller.
    pub async fn create(&self, caller: &Caller, draft: MotoDraft) -> Result<Moto, Error> {
        if draft.name.trim().is_empty() {
            return Err(Error::invalid_request("name must not be empty"));
        }
        if draft.brand.trim().is_empty() {
            return Err(Error::invalid_request("brand must not be empty"));
        }

        let moto = self
            .motos
            .insert(NewMoto {
                draft,
                owner_id: caller.id,
            })
            .await?;
        tracing::debug!(moto_id = %moto.id, owner_id = %caller.id, "moto created");
        Ok(moto)
    }

    /// List every motorcycle the caller owns.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<Moto>, Error> {
        Ok(self.motos.list_by_owner(caller.id).await?)
    }

    /// Fetch one of the caller's motorcycles.
    pub async fn get(&self, caller: &Caller, id: MotoId) -> Result<Moto, Error> {
        let moto = self.motos.find_by_id(id).await?;
        authorize_owner(caller, moto, KIND)
    }

    /// Apply a partial update to one of the caller's motorcycles.
    pub async fn update(
        &self,
        caller: &Caller,
        id: MotoId,
        changes: MotoChanges,
    ) -> Result<Moto, Error> {
        let moto = self.motos.find_by_id(id).await?;
        authorize_owner(caller, moto, KIND)?;

        if changes.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }

        self.motos
            .update(id, changes)
            .await?
            .ok_or_else(|| Error::not_found("moto not found"))
    }

    /// Delete one of the caller's motorcycles.
    ///
    /// Existing revisions keep their moto reference; they are not removed.
    pub async fn delete(&self, caller: &Caller, id: MotoId) -> Result<(), Error> {
        let moto = self.motos.find_by_id(id).await?;
        authorize_owner(caller, moto, KIND)?;

        if !self.motos.delete(id).await? {
            return Err(Error::not_found("moto not found"));
        }
        Ok(())
    }
}
