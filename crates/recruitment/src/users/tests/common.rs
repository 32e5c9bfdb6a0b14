use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::repository::RepositoryError;
use crate::users::domain::{NewUser, Role, User, UserId};
use crate::users::repository::UserRepository;
use crate::users::service::UserRegistrationService;

#[derive(Default, Clone)]
pub(crate) struct MemoryUsers {
    pub(crate) records: Arc<Mutex<BTreeMap<UserId, User>>>,
    next_id: Arc<AtomicU64>,
}

impl MemoryUsers {
    pub(crate) fn with_user(name: &str, role: Role) -> (Self, User) {
        let users = Self::default();
        let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
        let user = users
            .insert(NewUser::registered(name, email, role))
            .expect("seed user");
        (users, user)
    }
}

impl UserRepository for MemoryUsers {
    fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let next = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = user.into_user(UserId(next));
        guard.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn insert_all(&self, users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError> {
        users.into_iter().map(|user| self.insert(user)).collect()
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn find_by_role(&self, role: Role) -> Result<Vec<User>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().filter(|u| u.role == role).cloned().collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.len() as u64)
    }
}

pub(crate) struct UnavailableUsers;

impl UserRepository for UnavailableUsers {
    fn insert(&self, _user: NewUser) -> Result<User, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn insert_all(&self, _users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_id(&self, _id: UserId) -> Result<Option<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn find_by_role(&self, _role: Role) -> Result<Vec<User>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (UserRegistrationService<MemoryUsers>, Arc<MemoryUsers>) {
    let repository = Arc::new(MemoryUsers::default());
    let service = UserRegistrationService::new(repository.clone());
    (service, repository)
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
