//! Interview lifecycle: creation against existing users, lookup, full replace, rescoring and
//! deletion.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Interview, InterviewId, NewInterview, ScoreState, UNSCORED};
pub use repository::InterviewRepository;
pub use router::{interview_router, ScoreParams};
pub use service::{InterviewService, InterviewServiceError};
