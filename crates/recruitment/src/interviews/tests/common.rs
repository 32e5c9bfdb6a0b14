use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::interviews::domain::{Interview, InterviewId, NewInterview};
use crate::interviews::repository::InterviewRepository;
use crate::interviews::service::InterviewService;
use crate::repository::RepositoryError;
use crate::users::tests::common::MemoryUsers;
use crate::users::{Role, User, UserId};

pub(super) use crate::users::tests::common::read_json_body;

#[derive(Default, Clone)]
pub(super) struct MemoryInterviews {
    records: Arc<Mutex<BTreeMap<InterviewId, Interview>>>,
    next_id: Arc<AtomicU64>,
}

impl InterviewRepository for MemoryInterviews {
    fn insert(&self, interview: NewInterview) -> Result<Interview, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let next = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = interview.into_interview(InterviewId(next));
        guard.insert(stored.id, stored.clone());
        Ok(stored)
    }

    fn insert_all(&self, interviews: Vec<NewInterview>) -> Result<Vec<Interview>, RepositoryError> {
        interviews
            .into_iter()
            .map(|interview| self.insert(interview))
            .collect()
    }

    fn save(&self, interview: Interview) -> Result<Interview, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        match guard.get_mut(&interview.id) {
            Some(slot) => {
                *slot = interview.clone();
                Ok(interview)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn find_by_id(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Interview>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|interview| interview.user_id == user_id)
            .cloned()
            .collect())
    }

    fn find_all(&self) -> Result<Vec<Interview>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    fn delete_by_id(&self, id: InterviewId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.len() as u64)
    }
}

/// Store that loses every write, as if another caller deleted the record first.
pub(super) struct VanishingInterviews(pub(super) MemoryInterviews);

impl InterviewRepository for VanishingInterviews {
    fn insert(&self, interview: NewInterview) -> Result<Interview, RepositoryError> {
        self.0.insert(interview)
    }

    fn insert_all(&self, interviews: Vec<NewInterview>) -> Result<Vec<Interview>, RepositoryError> {
        self.0.insert_all(interviews)
    }

    fn save(&self, _interview: Interview) -> Result<Interview, RepositoryError> {
        Err(RepositoryError::NotFound)
    }

    fn find_by_id(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        self.0.find_by_id(id)
    }

    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Interview>, RepositoryError> {
        self.0.find_by_user_id(user_id)
    }

    fn find_all(&self) -> Result<Vec<Interview>, RepositoryError> {
        self.0.find_all()
    }

    fn delete_by_id(&self, _id: InterviewId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        self.0.count()
    }
}

pub(super) struct Fixture {
    pub(super) service: InterviewService<MemoryInterviews, MemoryUsers>,
    pub(super) interviews: Arc<MemoryInterviews>,
    pub(super) users: Arc<MemoryUsers>,
    pub(super) candidate: User,
}

pub(super) fn fixture() -> Fixture {
    let (users, candidate) = MemoryUsers::with_user("Jane Smith", Role::Candidate);
    let users = Arc::new(users);
    let interviews = Arc::new(MemoryInterviews::default());
    let service = InterviewService::new(interviews.clone(), users.clone());
    Fixture {
        service,
        interviews,
        users,
        candidate,
    }
}

pub(super) fn register(users: &MemoryUsers, name: &str) -> User {
    use crate::users::{NewUser, UserRepository};

    users
        .insert(NewUser::registered(name, "someone@example.com", Role::Candidate))
        .expect("user stored")
}
