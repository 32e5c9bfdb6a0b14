use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

use super::domain::{InterviewId, NewInterview};
use super::repository::InterviewRepository;
use super::service::{InterviewService, InterviewServiceError};
use crate::repository::RepositoryError;
use crate::users::{UserId, UserRepository};

type SharedService<I, U> = State<Arc<InterviewService<I, U>>>;

/// Query string accepted by the rescoring endpoint.
#[derive(Debug, Deserialize)]
pub struct ScoreParams {
    pub score: i32,
}

/// Router builder exposing CRUD and rescoring endpoints for interviews.
pub fn interview_router<I, U>(service: Arc<InterviewService<I, U>>) -> Router
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    Router::new()
        .route(
            "/api/interviews",
            post(create_handler::<I, U>).get(list_handler::<I, U>),
        )
        .route(
            "/api/interviews/:id",
            get(get_handler::<I, U>)
                .put(update_handler::<I, U>)
                .delete(delete_handler::<I, U>),
        )
        .route("/api/interviews/:id/score", patch(score_handler::<I, U>))
        .route(
            "/api/interviews/user/:user_id",
            get(by_user_handler::<I, U>),
        )
        .with_state(service)
}

pub(crate) async fn create_handler<I, U>(
    State(service): SharedService<I, U>,
    axum::Json(interview): axum::Json<NewInterview>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.create_interview(interview) {
        Ok(created) => (StatusCode::CREATED, axum::Json(created)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<I, U>(State(service): SharedService<I, U>) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.get_all_interviews() {
        Ok(interviews) => (StatusCode::OK, axum::Json(interviews)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<I, U>(
    State(service): SharedService<I, U>,
    Path(id): Path<InterviewId>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.get_interview_by_id(id) {
        Ok(interview) => (StatusCode::OK, axum::Json(interview)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn by_user_handler<I, U>(
    State(service): SharedService<I, U>,
    Path(user_id): Path<UserId>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.get_interviews_by_user_id(user_id) {
        Ok(interviews) => (StatusCode::OK, axum::Json(interviews)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<I, U>(
    State(service): SharedService<I, U>,
    Path(id): Path<InterviewId>,
    axum::Json(replacement): axum::Json<NewInterview>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.update_interview(id, replacement) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn score_handler<I, U>(
    State(service): SharedService<I, U>,
    Path(id): Path<InterviewId>,
    Query(params): Query<ScoreParams>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.update_score(id, params.score) {
        Ok(updated) => (StatusCode::OK, axum::Json(updated)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<I, U>(
    State(service): SharedService<I, U>,
    Path(id): Path<InterviewId>,
) -> Response
where
    I: InterviewRepository + 'static,
    U: UserRepository + 'static,
{
    match service.delete_interview(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: InterviewServiceError) -> Response {
    let status = match &error {
        InterviewServiceError::NotFound(_)
        | InterviewServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        InterviewServiceError::UnknownUser(_) => StatusCode::UNPROCESSABLE_ENTITY,
        InterviewServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    if status.is_server_error() {
        warn!(%error, "interview request failed");
    }

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
