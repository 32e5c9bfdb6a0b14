use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{InvalidRole, NewUser, Role, User, UserRegistration, ValidationError};
use super::repository::UserRepository;
use crate::repository::RepositoryError;

/// Creates users of a requested role from registration input.
pub struct UserRegistrationService<R> {
    repository: Arc<R>,
}

impl<R> UserRegistrationService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a user under the role named by `role`.
    ///
    /// The role token is resolved before the payload is validated. Duplicate e-mail addresses are
    /// accepted.
    pub fn register_user(
        &self,
        registration: UserRegistration,
        role: &str,
    ) -> Result<User, RegistrationError> {
        let role: Role = role.parse()?;
        registration.validate()?;
        debug!(role = role.label(), "registration input accepted");

        let UserRegistration { name, email } = registration;
        let user = self
            .repository
            .insert(NewUser::registered(name, email, role))?;

        info!(user_id = %user.id, role = user.role.label(), "registered user");
        Ok(user)
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    InvalidRole(#[from] InvalidRole),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
