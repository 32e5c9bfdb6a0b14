use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::UserRegistration;
use super::repository::UserRepository;
use super::service::{RegistrationError, UserRegistrationService};

/// Router exposing self-registration for every role.
pub fn registration_router<R>(service: Arc<UserRegistrationService<R>>) -> Router
where
    R: UserRepository + 'static,
{
    Router::new()
        .route("/api/register/:role", post(register_handler::<R>))
        .with_state(service)
}

pub(crate) async fn register_handler<R>(
    State(service): State<Arc<UserRegistrationService<R>>>,
    Path(role): Path<String>,
    axum::Json(registration): axum::Json<UserRegistration>,
) -> Response
where
    R: UserRepository + 'static,
{
    match service.register_user(registration, &role) {
        Ok(user) => (StatusCode::CREATED, axum::Json(user)).into_response(),
        Err(error @ (RegistrationError::InvalidRole(_) | RegistrationError::Validation(_))) => {
            warn!(%role, %error, "registration rejected");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(error) => {
            warn!(%role, %error, "registration failed");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
