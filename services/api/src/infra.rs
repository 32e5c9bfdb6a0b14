use metrics_exporter_prometheus::PrometheusHandle;
use recruitment::interviews::{Interview, InterviewId, InterviewRepository, NewInterview};
use recruitment::repository::RepositoryError;
use recruitment::users::{NewUser, Role, User, UserId, UserRepository};
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Records keyed by id plus the next id to hand out. Ids are never reused, even after deletes.
struct Table<K, V> {
    next_id: u64,
    rows: BTreeMap<K, V>,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

impl<K, V> Table<K, V> {
    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("store lock poisoned".to_string()))
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryUserRepository {
    table: Arc<Mutex<Table<UserId, User>>>,
}

impl UserRepository for InMemoryUserRepository {
    fn insert(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut guard = lock(&self.table)?;
        let stored = user.into_user(UserId(guard.allocate()));
        guard.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn insert_all(&self, users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError> {
        let mut guard = lock(&self.table)?;
        let mut stored = Vec::with_capacity(users.len());
        for user in users {
            let user = user.into_user(UserId(guard.allocate()));
            guard.rows.insert(user.id, user.clone());
            stored.push(user);
        }
        Ok(stored)
    }

    fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    fn find_by_role(&self, role: Role) -> Result<Vec<User>, RepositoryError> {
        let guard = lock(&self.table)?;
        Ok(guard
            .rows
            .values()
            .filter(|user| user.role == role)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(lock(&self.table)?.rows.len() as u64)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryInterviewRepository {
    table: Arc<Mutex<Table<InterviewId, Interview>>>,
}

impl InterviewRepository for InMemoryInterviewRepository {
    fn insert(&self, interview: NewInterview) -> Result<Interview, RepositoryError> {
        let mut guard = lock(&self.table)?;
        let stored = interview.into_interview(InterviewId(guard.allocate()));
        guard.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn insert_all(&self, interviews: Vec<NewInterview>) -> Result<Vec<Interview>, RepositoryError> {
        let mut guard = lock(&self.table)?;
        let mut stored = Vec::with_capacity(interviews.len());
        for interview in interviews {
            let interview = interview.into_interview(InterviewId(guard.allocate()));
            guard.rows.insert(interview.id, interview.clone());
            stored.push(interview);
        }
        Ok(stored)
    }

    fn save(&self, interview: Interview) -> Result<Interview, RepositoryError> {
        let mut guard = lock(&self.table)?;
        match guard.rows.get_mut(&interview.id) {
            Some(row) => {
                *row = interview.clone();
                Ok(interview)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn find_by_id(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        Ok(lock(&self.table)?.rows.get(&id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Interview>, RepositoryError> {
        let guard = lock(&self.table)?;
        Ok(guard
            .rows
            .values()
            .filter(|interview| interview.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Interview>, RepositoryError> {
        Ok(lock(&self.table)?.rows.values().cloned().collect())
    }

    fn delete_by_id(&self, id: InterviewId) -> Result<(), RepositoryError> {
        lock(&self.table)?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        Ok(lock(&self.table)?.rows.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_stay_monotonic_across_deletes() {
        let repository = InMemoryInterviewRepository::default();
        let first = repository
            .insert(NewInterview::unscored(UserId(1), "Backend Developer"))
            .expect("insert");
        repository.delete_by_id(first.id).expect("delete");

        let second = repository
            .insert(NewInterview::unscored(UserId(1), "Backend Developer"))
            .expect("insert");
        assert!(second.id > first.id);
        assert_eq!(repository.count().expect("count"), 1);
    }

    #[test]
    fn save_requires_existing_record() {
        let repository = InMemoryInterviewRepository::default();
        let ghost = NewInterview::unscored(UserId(1), "QA").into_interview(InterviewId(9));
        assert_eq!(repository.save(ghost), Err(RepositoryError::NotFound));
        assert_eq!(
            repository.delete_by_id(InterviewId(9)),
            Err(RepositoryError::NotFound)
        );
    }

    #[test]
    fn bulk_insert_assigns_consecutive_ids_and_filters_by_role() {
        let repository = InMemoryUserRepository::default();
        let stored = repository
            .insert_all(vec![
                NewUser::candidate("Jane Smith", "jane@example.com", "Developer", "Rust"),
                NewUser::staff("Rick Jones", "rick@example.com", Role::Recruiter, "HR"),
                NewUser::candidate("Bo Kim", "bo@example.com", "Designer", "Figma"),
            ])
            .expect("bulk insert");

        let ids: Vec<u64> = stored.iter().map(|user| user.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let candidates = repository.find_by_role(Role::Candidate).expect("by role");
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|user| user.cv.is_some()));
        assert_eq!(repository.find_by_role(Role::Admin).expect("by role"), vec![]);
    }
}
