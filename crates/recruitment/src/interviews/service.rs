use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Interview, InterviewId, NewInterview};
use super::repository::InterviewRepository;
use crate::repository::RepositoryError;
use crate::users::{UserId, UserRepository};

/// Interview lifecycle operations backed by the interview and user stores.
pub struct InterviewService<I, U> {
    interviews: Arc<I>,
    users: Arc<U>,
}

impl<I, U> InterviewService<I, U>
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    pub fn new(interviews: Arc<I>, users: Arc<U>) -> Self {
        Self { interviews, users }
    }

    /// Persist a new interview for an existing user.
    pub fn create_interview(
        &self,
        interview: NewInterview,
    ) -> Result<Interview, InterviewServiceError> {
        self.ensure_user_exists(interview.user_id)?;
        let stored = self.interviews.insert(interview)?;
        info!(
            interview_id = %stored.id,
            user_id = %stored.user_id,
            score = stored.score,
            "created interview"
        );
        Ok(stored)
    }

    pub fn get_all_interviews(&self) -> Result<Vec<Interview>, InterviewServiceError> {
        Ok(self.interviews.find_all()?)
    }

    pub fn get_interview_by_id(&self, id: InterviewId) -> Result<Interview, InterviewServiceError> {
        self.interviews
            .find_by_id(id)?
            .ok_or(InterviewServiceError::NotFound(id))
    }

    /// Interviews referencing `user_id`; empty when the user has none or does not exist.
    pub fn get_interviews_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Interview>, InterviewServiceError> {
        Ok(self.interviews.find_by_user_id(user_id)?)
    }

    /// Replace user, position and score of an existing interview.
    pub fn update_interview(
        &self,
        id: InterviewId,
        replacement: NewInterview,
    ) -> Result<Interview, InterviewServiceError> {
        let mut interview = self.get_interview_by_id(id)?;
        self.ensure_user_exists(replacement.user_id)?;
        interview.replace_with(replacement);

        let stored = self.save(interview)?;
        info!(interview_id = %id, "updated interview");
        Ok(stored)
    }

    /// Overwrite only the score. The value is stored as given.
    pub fn update_score(
        &self,
        id: InterviewId,
        score: i32,
    ) -> Result<Interview, InterviewServiceError> {
        let mut interview = self.get_interview_by_id(id)?;
        let previous = interview.score;
        interview.score = score;

        let stored = self.save(interview)?;
        info!(interview_id = %id, previous, score, "rescored interview");
        Ok(stored)
    }

    pub fn delete_interview(&self, id: InterviewId) -> Result<(), InterviewServiceError> {
        self.get_interview_by_id(id)?;
        self.interviews
            .delete_by_id(id)
            .map_err(|err| InterviewServiceError::for_interview(id, err))?;
        info!(interview_id = %id, "deleted interview");
        Ok(())
    }

    fn save(&self, interview: Interview) -> Result<Interview, InterviewServiceError> {
        let id = interview.id;
        self.interviews
            .save(interview)
            .map_err(|err| InterviewServiceError::for_interview(id, err))
    }

    fn ensure_user_exists(&self, user_id: UserId) -> Result<(), InterviewServiceError> {
        match self.users.find_by_id(user_id)? {
            Some(_) => Ok(()),
            None => {
                debug!(%user_id, "interview references unknown user");
                Err(InterviewServiceError::UnknownUser(user_id))
            }
        }
    }
}

/// Error raised by the interview service.
#[derive(Debug, thiserror::Error)]
pub enum InterviewServiceError {
    #[error("interview {0} not found")]
    NotFound(InterviewId),
    #[error("user {0} does not exist")]
    UnknownUser(UserId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl InterviewServiceError {
    /// A record that vanished between lookup and write is reported as missing.
    fn for_interview(id: InterviewId, error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}
