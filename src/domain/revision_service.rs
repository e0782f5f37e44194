//! Maintenance revision operations.

use std::sync::Arc;

use crate::domain::error::Error;
use crate::domain::ownership::{Caller, authorize_owner};
use crate::domain::ports::{MotoRepository, RevisionRepository};
use crate::domain::revision::{NewRevision, Revision, RevisionChanges, RevisionDraft, RevisionId};

const KIND: &str = "revision";

/// Orchestrates revision operations over the revision and moto repositories.
///
/// The moto repository is only consulted at creation time, to verify that the
/// target moto exists and belongs to the caller before a revision is attached
/// to it.
#[derive(Clone)]
pub struct RevisionService {
    revisions: Arc<dyn RevisionRepository>,
    motos: Arc<dyn MotoRepository>,
}

impl RevisionService {
    pub fn new(revisions: Arc<dyn RevisionRepository>, motos: Arc<dyn MotoRepository>) -> Self {
        Self { revisions, motos }
    }

    /// Schedule a revision for one of the caller's motos.
    ///
    /// A missing moto is a not-found; somebody else's moto is an
    /// authorization failure. New revisions always start pending.
    pub async fn create(&self, caller: &Caller, draft: RevisionDraft) -> Result<Revision, Error> {
        if draft.title.trim().is_empty() {
            return Err(Error::invalid_request("title must not be empty"));
        }
        if draft.service.trim().is_empty() {
            return Err(Error::invalid_request("service must not be empty"));
        }

        let moto = self.motos.find_by_id(draft.moto_id).await?;
        authorize_owner(caller, moto, "moto")?;

        let revision = self
            .revisions
            .insert(NewRevision {
                draft,
                owner_id: caller.id,
            })
            .await?;
        tracing::debug!(revision_id = %revision.id, owner_id = %caller.id, "revision created");
        Ok(revision)
    }

    /// List every revision the caller owns, across all their motos.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<Revision>, Error> {
        Ok(self.revisions.list_by_owner(caller.id).await?)
    }

    /// Fetch one of the caller's revisions.
    pub async fn get(&self, caller: &Caller, id: RevisionId) -> Result<Revision, Error> {
        let revision = self.revisions.find_by_id(id).await?;
        authorize_owner(caller, revision, KIND)
    }

    /// Apply a partial update to one of the caller's revisions.
    pub async fn update(
        &self,
        caller: &Caller,
        id: RevisionId,
        changes: RevisionChanges,
    ) -> Result<Revision, Error> {
        let revision = self.revisions.find_by_id(id).await?;
        authorize_owner(caller, revision, KIND)?;

        if changes.is_empty() {
            return Err(Error::invalid_request("no fields to update"));
        }

        self.revisions
            .update(id, changes)
            .await?
            .ok_or_else(|| Error::not_found("revision not found"))
    }

    /// Delete one of the caller's revisions along with every notification
    /// referencing it.
    pub async fn delete(&self, caller: &Caller, id: RevisionId) -> Result<(), Error> {
        let revision = self.revisions.find_by_id(id).await?;
        authorize_owner(caller, revision, KIND)?;

        if !self.revisions.delete_cascade(id).await? {
            return Err(Error::not_found("revision not found"));
        }
        Ok(())
    }
}
