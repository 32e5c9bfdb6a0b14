use super::domain::{NewUser, Role, User, UserId};
use crate::repository::RepositoryError;

/// Storage abstraction for users. Implementations assign monotonic ids on insert.
pub trait UserRepository: Send + Sync {
    fn insert(&self, user: NewUser) -> Result<User, RepositoryError>;
    fn insert_all(&self, users: Vec<NewUser>) -> Result<Vec<User>, RepositoryError>;
    fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError>;
    fn find_by_role(&self, role: Role) -> Result<Vec<User>, RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}
