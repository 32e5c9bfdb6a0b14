use super::domain::{Interview, InterviewId, NewInterview};
use crate::repository::RepositoryError;
use crate::users::UserId;

/// Storage abstraction for interviews so the service can be exercised in isolation.
pub trait InterviewRepository: Send + Sync {
    /// Persist a new interview, assigning the next id.
    fn insert(&self, interview: NewInterview) -> Result<Interview, RepositoryError>;
    fn insert_all(&self, interviews: Vec<NewInterview>) -> Result<Vec<Interview>, RepositoryError>;
    /// Overwrite an existing interview. Fails with [`RepositoryError::NotFound`] when the id is unknown.
    fn save(&self, interview: Interview) -> Result<Interview, RepositoryError>;
    fn find_by_id(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError>;
    fn find_by_user_id(&self, user_id: UserId) -> Result<Vec<Interview>, RepositoryError>;
    /// All interviews in primary-key order.
    fn find_all(&self) -> Result<Vec<Interview>, RepositoryError>;
    fn delete_by_id(&self, id: InterviewId) -> Result<(), RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}
