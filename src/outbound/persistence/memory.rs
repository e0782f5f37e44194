//! In-memory implementations of every repository port.
//!
//! Backs the integration tests and DB-less development runs. One store
//! instance implements all four ports so a single `Arc` can be cloned into
//! each service, sharing the same data set.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    MotoPersistenceError, MotoRepository, NotificationPersistenceError, NotificationRepository,
    RevisionPersistenceError, RevisionRepository, UserPersistenceError, UserRepository,
};
use crate::domain::{
    Moto, MotoChanges, MotoId, NewMoto, NewNotification, NewRevision, NewUser, Notification,
    NotificationChanges, NotificationId, Revision, RevisionChanges, RevisionId, User, UserChanges,
    UserId, WorkStatus,
};

#[derive(Debug, Default)]
struct StoreState {
    users: Vec<User>,
    motos: Vec<Moto>,
    revisions: Vec<Revision>,
    notifications: Vec<Notification>,
    next_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared in-memory store implementing all repository ports.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, UserPersistenceError> {
        let mut state = self.lock();
        if state.users.iter().any(|existing| existing.email == user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email));
        }
        let id = state.next_id();
        let user = User {
            id: UserId::new(id),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            avatar_url: user.avatar_url,
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock().users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|user| user.email == email)
            .cloned())
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut state = self.lock();
        if let Some(email) = &changes.email
            && state
                .users
                .iter()
                .any(|existing| existing.email == *email && existing.id != id)
        {
            return Err(UserPersistenceError::duplicate_email(email.clone()));
        }

        let Some(user) = state.users.iter_mut().find(|user| user.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(password_hash) = changes.password_hash {
            user.password_hash = password_hash;
        }
        if let Some(avatar_url) = changes.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        Ok(Some(user.clone()))
    }

    async fn delete_cascade(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        let mut state = self.lock();
        let before = state.users.len();
        state.users.retain(|user| user.id != id);
        if state.users.len() == before {
            return Ok(false);
        }
        state.motos.retain(|moto| moto.owner_id != id);
        state.revisions.retain(|revision| revision.owner_id != id);
        state
            .notifications
            .retain(|notification| notification.owner_id != id);
        Ok(true)
    }
}

#[async_trait]
impl MotoRepository for MemoryStore {
    async fn insert(&self, moto: NewMoto) -> Result<Moto, MotoPersistenceError> {
        let mut state = self.lock();
        let id = state.next_id();
        let moto = Moto {
            id: MotoId::new(id),
            name: moto.draft.name,
            brand: moto.draft.brand,
            model: moto.draft.model,
            year: moto.draft.year,
            km: moto.draft.km,
            plate: moto.draft.plate,
            color: moto.draft.color,
            next_revision_date: moto.draft.next_revision_date,
            owner_id: moto.owner_id,
        };
        state.motos.push(moto.clone());
        Ok(moto)
    }

    async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Moto>, MotoPersistenceError> {
        Ok(self
            .lock()
            .motos
            .iter()
            .filter(|moto| moto.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: MotoId) -> Result<Option<Moto>, MotoPersistenceError> {
        Ok(self.lock().motos.iter().find(|moto| moto.id == id).cloned())
    }

    async fn update(
        &self,
        id: MotoId,
        changes: MotoChanges,
    ) -> Result<Option<Moto>, MotoPersistenceError> {
        let mut state = self.lock();
        let Some(moto) = state.motos.iter_mut().find(|moto| moto.id == id) else {
            return Ok(None);
        };
        if let Some(name) = changes.name {
            moto.name = name;
        }
        if let Some(brand) = changes.brand {
            moto.brand = brand;
        }
        if let Some(model) = changes.model {
            moto.model = Some(model);
        }
        if let Some(year) = changes.year {
            moto.year = Some(year);
        }
        if let Some(km) = changes.km {
            moto.km = Some(km);
        }
        if let Some(plate) = changes.plate {
            moto.plate = Some(plate);
        }
        if let Some(color) = changes.color {
            moto.color = Some(color);
        }
        if let Some(date) = changes.next_revision_date {
            moto.next_revision_date = Some(date);
        }
        Ok(Some(moto.clone()))
    }

    async fn delete(&self, id: MotoId) -> Result<bool, MotoPersistenceError> {
        let mut state = self.lock();
        let before = state.motos.len();
        state.motos.retain(|moto| moto.id != id);
        Ok(state.motos.len() != before)
    }
}

#[async_trait]
impl RevisionRepository for MemoryStore {
    async fn insert(&self, revision: NewRevision) -> Result<Revision, RevisionPersistenceError> {
        let mut state = self.lock();
        let id = state.next_id();
        let revision = Revision {
            id: RevisionId::new(id),
            moto_id: revision.draft.moto_id,
            title: revision.draft.title,
            service: revision.draft.service,
            details: revision.draft.details,
            date: revision.draft.date,
            time: revision.draft.time,
            km: revision.draft.km,
            auto_reminder_enabled: revision.draft.auto_reminder_enabled,
            auto_reminder_interval: revision.draft.auto_reminder_interval,
            status: WorkStatus::Pending,
            owner_id: revision.owner_id,
        };
        state.revisions.push(revision.clone());
        Ok(revision)
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Revision>, RevisionPersistenceError> {
        Ok(self
            .lock()
            .revisions
            .iter()
            .filter(|revision| revision.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: RevisionId,
    ) -> Result<Option<Revision>, RevisionPersistenceError> {
        Ok(self
            .lock()
            .revisions
            .iter()
            .find(|revision| revision.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: RevisionId,
        changes: RevisionChanges,
    ) -> Result<Option<Revision>, RevisionPersistenceError> {
        let mut state = self.lock();
        let Some(revision) = state.revisions.iter_mut().find(|revision| revision.id == id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            revision.title = title;
        }
        if let Some(service) = changes.service {
            revision.service = service;
        }
        if let Some(details) = changes.details {
            revision.details = Some(details);
        }
        if let Some(date) = changes.date {
            revision.date = Some(date);
        }
        if let Some(time) = changes.time {
            revision.time = Some(time);
        }
        if let Some(km) = changes.km {
            revision.km = Some(km);
        }
        if let Some(enabled) = changes.auto_reminder_enabled {
            revision.auto_reminder_enabled = enabled;
        }
        if let Some(interval) = changes.auto_reminder_interval {
            revision.auto_reminder_interval = Some(interval);
        }
        if let Some(status) = changes.status {
            revision.status = status;
        }
        Ok(Some(revision.clone()))
    }

    async fn delete_cascade(&self, id: RevisionId) -> Result<bool, RevisionPersistenceError> {
        let mut state = self.lock();
        let before = state.revisions.len();
        state.revisions.retain(|revision| revision.id != id);
        if state.revisions.len() == before {
            return Ok(false);
        }
        state
            .notifications
            .retain(|notification| notification.revision_id != Some(id));
        Ok(true)
    }
}

#[async_trait]
impl NotificationRepository for MemoryStore {
    async fn insert(
        &self,
        notification: NewNotification,
    ) -> Result<Notification, NotificationPersistenceError> {
        let mut state = self.lock();
        let id = state.next_id();
        let notification = Notification {
            id: NotificationId::new(id),
            moto_id: notification.draft.moto_id,
            revision_id: notification.draft.revision_id,
            title: notification.draft.title,
            description: notification.draft.description,
            status: notification.draft.status,
            owner_id: notification.owner_id,
            created_at: Utc::now(),
        };
        state.notifications.push(notification.clone());
        Ok(notification)
    }

    async fn list_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<Notification>, NotificationPersistenceError> {
        Ok(self
            .lock()
            .notifications
            .iter()
            .filter(|notification| notification.owner_id == owner)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        id: NotificationId,
    ) -> Result<Option<Notification>, NotificationPersistenceError> {
        Ok(self
            .lock()
            .notifications
            .iter()
            .find(|notification| notification.id == id)
            .cloned())
    }

    async fn update(
        &self,
        id: NotificationId,
        changes: NotificationChanges,
    ) -> Result<Option<Notification>, NotificationPersistenceError> {
        let mut state = self.lock();
        let Some(notification) = state
            .notifications
            .iter_mut()
            .find(|notification| notification.id == id)
        else {
            return Ok(None);
        };
        if let Some(moto_id) = changes.moto_id {
            notification.moto_id = Some(moto_id);
        }
        if let Some(revision_id) = changes.revision_id {
            notification.revision_id = Some(revision_id);
        }
        if let Some(title) = changes.title {
            notification.title = title;
        }
        if let Some(description) = changes.description {
            notification.description = Some(description);
        }
        if let Some(status) = changes.status {
            notification.status = status;
        }
        Ok(Some(notification.clone()))
    }

    async fn delete(&self, id: NotificationId) -> Result<bool, NotificationPersistenceError> {
        let mut state = self.lock();
        let before = state.notifications.len();
        state.notifications.retain(|notification| notification.id != id);
        Ok(state.notifications.len() != before)
    }

    async fn delete_by_revision(
        &self,
        revision: RevisionId,
    ) -> Result<u64, NotificationPersistenceError> {
        let mut state = self.lock();
        let before = state.notifications.len();
        state
            .notifications
            .retain(|notification| notification.revision_id != Some(revision));
        Ok((before - state.notifications.len()) as u64)
    }

    async fn set_status_by_revision(
        &self,
        revision: RevisionId,
        status: WorkStatus,
    ) -> Result<u64, NotificationPersistenceError> {
        let mut state = self.lock();
        let mut updated = 0;
        for notification in state
            .notifications
            .iter_mut()
            .filter(|notification| notification.revision_id == Some(revision))
        {
            notification.status = status;
            updated += 1;
        }
        Ok(updated)
    }
}
