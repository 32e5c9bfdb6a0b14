//! User registration: role parsing, input validation, and persistence through [`UserRepository`].

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use domain::{
    is_valid_email, InvalidRole, NewUser, Role, User, UserId, UserRegistration, ValidationError,
};
pub use repository::UserRepository;
pub use router::registration_router;
pub use service::{RegistrationError, UserRegistrationService};
