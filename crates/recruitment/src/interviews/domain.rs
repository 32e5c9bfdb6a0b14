use std::fmt;

use serde::{Deserialize, Serialize};

use crate::users::UserId;

/// Score value meaning "not yet evaluated".
pub const UNSCORED: i32 = 0;

/// Store-assigned surrogate key for interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(pub u64);

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Interview contents supplied by callers on create and on full replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInterview {
    pub user_id: UserId,
    pub position: String,
    #[serde(default)]
    pub score: i32,
}

impl NewInterview {
    pub fn unscored(user_id: UserId, position: impl Into<String>) -> Self {
        Self::scored(user_id, position, UNSCORED)
    }

    pub fn scored(user_id: UserId, position: impl Into<String>, score: i32) -> Self {
        Self {
            user_id,
            position: position.into(),
            score,
        }
    }

    pub fn into_interview(self, id: InterviewId) -> Interview {
        Interview {
            id,
            user_id: self.user_id,
            position: self.position,
            score: self.score,
        }
    }
}

/// Persisted interview linking a candidate to a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub user_id: UserId,
    pub position: String,
    pub score: i32,
}

/// Evaluation state derived from the score; zero doubles as "unscored".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreState {
    Unscored,
    Scored(i32),
}

impl Interview {
    pub fn state(&self) -> ScoreState {
        match self.score {
            UNSCORED => ScoreState::Unscored,
            score => ScoreState::Scored(score),
        }
    }

    pub fn is_scored(&self) -> bool {
        matches!(self.state(), ScoreState::Scored(_))
    }

    /// Full replace: every caller-supplied field overwrites the stored one.
    pub fn replace_with(&mut self, replacement: NewInterview) {
        self.user_id = replacement.user_id;
        self.position = replacement.position;
        self.score = replacement.score;
    }
}
