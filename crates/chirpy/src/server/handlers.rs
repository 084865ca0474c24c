//! Axum request handlers for all service endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use bytes::Bytes;
use common::{
    protocol::{ChirpRequest, CleanedChirp, CreateUserRequest, UserResponse},
    ServiceError,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, warn};

use super::response::{respond_with_error, respond_with_json, ApiError};
use super::state::AppState;
use crate::chirp;
use crate::users::UserStore;

/// `GET /api/healthz`: liveness check.
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}

/// `GET /admin/metrics`: operator page showing the `/app/` hit count.
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    let hits = state.hits.report();
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    \
         <p>Chirpy has been visited {hits} times!</p>\n  </body>\n</html>\n"
    ))
}

/// `POST /admin/reset`: zero the hit counter and delete every user.
///
/// Only allowed on the development platform; elsewhere it answers `403` and
/// leaves all state untouched.
pub async fn reset(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    if !state.is_dev() {
        warn!(platform = %state.platform, "reset refused outside dev platform");
        return Err(ServiceError::Forbidden.into());
    }

    state.hits.reset();
    state.users.delete_all_users().await.map_err(|e| {
        error!(kind = e.kind(), "failed to delete users during reset");
        ServiceError::Persistence(format!("Users were not deleted with error {e}"))
    })?;

    info!("hits and users reset");
    Ok(StatusCode::OK)
}

/// `POST /api/validate_chirp`: validate a chirp and return it censored.
pub async fn validate_chirp(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: ChirpRequest = decode_json(&body)?;
    let cleaned_body = chirp::moderate(&req.body, &state.denylist).map_err(|e| {
        debug!(len = req.body.len(), reason = %e, "chirp rejected");
        e
    })?;
    Ok(respond_with_json(StatusCode::OK, &CleanedChirp { cleaned_body }))
}

/// `POST /api/users`: register a user by email.
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let req: CreateUserRequest = decode_json(&body)?;
    if req.email.is_empty() {
        return Err(ServiceError::EmptyEmail.into());
    }

    let user = state.users.create_user(&req.email).await.map_err(|e| {
        error!(kind = e.kind(), "failed to create user");
        ServiceError::Persistence(format!("User was not created with error {e}"))
    })?;

    info!(user_id = %user.id, "user created");
    Ok(respond_with_json(StatusCode::CREATED, &UserResponse::from(user)))
}

/// Catch-all 404 handler.
pub async fn not_found() -> Response {
    respond_with_error(StatusCode::NOT_FOUND, "not found")
}

/// Decode the first JSON value in `body`, ignoring any trailing bytes.
///
/// The content type is not checked.
fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ServiceError> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(Ok(value)) => Ok(value),
        Some(Err(e)) => {
            // serde_json messages can quote the input, so log position only.
            warn!(
                category = ?e.classify(),
                line = e.line(),
                column = e.column(),
                "failed to decode request body"
            );
            Err(ServiceError::Decode)
        }
        None => {
            warn!("request body is empty");
            Err(ServiceError::Decode)
        }
    }
}
