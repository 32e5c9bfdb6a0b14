use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned surrogate key for users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of roles a user can hold. Roles never change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_CANDIDATE", alias = "CANDIDATE")]
    Candidate,
    #[serde(rename = "ROLE_RECRUITER", alias = "RECRUITER")]
    Recruiter,
    #[serde(rename = "ROLE_ADMIN", alias = "ADMIN")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Candidate, Role::Recruiter, Role::Admin];

    pub fn label(&self) -> &'static str {
        match self {
            Role::Candidate => "ROLE_CANDIDATE",
            Role::Recruiter => "ROLE_RECRUITER",
            Role::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a role token does not name one of the recognized roles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized role '{0}'")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    /// Matching is exact and case-sensitive; both `CANDIDATE` and `ROLE_CANDIDATE` are accepted.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "CANDIDATE" | "ROLE_CANDIDATE" => Ok(Role::Candidate),
            "RECRUITER" | "ROLE_RECRUITER" => Ok(Role::Recruiter),
            "ADMIN" | "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub info: Option<String>,
    pub cv: Option<String>,
}

/// User awaiting persistence. The constructors guarantee only candidates carry a CV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    role: Role,
    info: Option<String>,
    cv: Option<String>,
}

impl NewUser {
    /// Minimal record produced by self-registration: no info, no CV.
    pub fn registered(name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role,
            info: None,
            cv: None,
        }
    }

    pub fn candidate(
        name: impl Into<String>,
        email: impl Into<String>,
        info: impl Into<String>,
        cv: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: Role::Candidate,
            info: Some(info.into()),
            cv: Some(cv.into()),
        }
    }

    /// Recruiter or admin profile. Staff never carry a CV.
    pub fn staff(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        info: impl Into<String>,
    ) -> Self {
        debug_assert_ne!(role, Role::Candidate, "candidates are built with NewUser::candidate");
        Self {
            name: name.into(),
            email: email.into(),
            role,
            info: Some(info.into()),
            cv: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    pub fn cv(&self) -> Option<&str> {
        self.cv.as_deref()
    }

    /// Attach the store-assigned id.
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            role: self.role,
            info: self.info,
            cv: self.cv,
        }
    }
}

/// Registration payload accepted at the HTTP boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl UserRegistration {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::BlankEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::MalformedEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Validation errors raised for malformed registration input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is required")]
    BlankName,
    #[error("email is required")]
    BlankEmail,
    #[error("email '{0}' is not a valid address")]
    MalformedEmail(String),
}

const LOCAL_PART_MAX: usize = 64;
const DOMAIN_MAX: usize = 255;
const DOMAIN_LABEL_MAX: usize = 63;
const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~-";

/// Structural address check: dot-separated atoms before the `@`, hostname labels after it.
/// Non-ASCII characters are allowed on both sides so internationalized addresses pass.
pub fn is_valid_email(candidate: &str) -> bool {
    match candidate.rsplit_once('@') {
        Some((local, domain)) => is_valid_local_part(local) && is_valid_domain(domain),
        None => false,
    }
}

fn is_valid_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.len() <= LOCAL_PART_MAX
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom.chars().all(|c| {
                    c.is_ascii_alphanumeric() || !c.is_ascii() || LOCAL_PART_SYMBOLS.contains(c)
                })
        })
}

fn is_valid_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain.len() <= DOMAIN_MAX
        && domain.split('.').all(|label| {
            !label.is_empty()
                && label.len() <= DOMAIN_LABEL_MAX
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || !c.is_ascii() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_short_and_symbolic_tokens() {
        assert_eq!("CANDIDATE".parse::<Role>(), Ok(Role::Candidate));
        assert_eq!("ROLE_RECRUITER".parse::<Role>(), Ok(Role::Recruiter));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
    }

    #[test]
    fn role_parsing_is_case_sensitive() {
        assert_eq!(
            "candidate".parse::<Role>(),
            Err(InvalidRole("candidate".to_string()))
        );
        assert!("SUPERUSER".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn role_serializes_with_symbolic_names() {
        let json = serde_json::to_string(&Role::Recruiter).expect("serializes");
        assert_eq!(json, "\"ROLE_RECRUITER\"");
        let parsed: Role = serde_json::from_str("\"ADMIN\"").expect("alias accepted");
        assert_eq!(parsed, Role::Admin);
    }

    #[test]
    fn staff_profiles_never_carry_cv() {
        let recruiter = NewUser::staff("Ann Lee", "ann@example.com", Role::Recruiter, "HR");
        assert_eq!(recruiter.cv(), None);
        assert_eq!(recruiter.info(), Some("HR"));

        let candidate = NewUser::candidate("Bo Kim", "bo@example.com", "Developer", "Rust");
        assert_eq!(candidate.role(), Role::Candidate);
        assert_eq!(candidate.cv(), Some("Rust"));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "candidates are built with NewUser::candidate")]
    fn staff_constructor_refuses_candidate_role() {
        let _ = NewUser::staff("Bo Kim", "bo@example.com", Role::Candidate, "Developer");
    }

    #[test]
    fn email_check_accepts_common_addresses() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("dev+hiring@mail.company.io"));
        assert!(is_valid_email("root@localhost"));
    }

    #[test]
    fn email_check_accepts_internationalized_addresses() {
        assert!(is_valid_email("josé@example.com"));
        assert!(is_valid_email("jane@bücher.de"));
        assert!(is_valid_email("用户@例子.中国"));
        assert!(!is_valid_email("josé@bü cher.de"));
    }

    #[test]
    fn email_check_rejects_malformed_addresses() {
        for address in [
            "not-an-email",
            "@example.com",
            "jane@",
            "jane..doe@example.com",
            "jane doe@example.com",
            "jane@-example.com",
            "jane@example..com",
            "a@b@c.com",
        ] {
            assert!(!is_valid_email(address), "{address} should be rejected");
        }
    }

    #[test]
    fn registration_validation_orders_checks() {
        assert_eq!(
            UserRegistration::new("  ", "").validate(),
            Err(ValidationError::BlankName)
        );
        assert_eq!(
            UserRegistration::new("Jane", " ").validate(),
            Err(ValidationError::BlankEmail)
        );
        assert!(matches!(
            UserRegistration::new("Jane", "jane").validate(),
            Err(ValidationError::MalformedEmail(_))
        ));
        assert!(UserRegistration::new("Jane", "jane@example.com")
            .validate()
            .is_ok());
    }
}
