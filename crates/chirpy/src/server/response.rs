//! JSON response envelopes.
//!
//! Every handler outcome goes through [`respond_with_json`] or
//! [`respond_with_error`]. Both always produce exactly one response: if the
//! body cannot be serialised the failure is logged and a bare `500` with an
//! empty body is returned instead.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use common::{protocol::ErrorResponse, ServiceError};
use serde::Serialize;
use tracing::error;

/// Serialise `payload` as the JSON body of a `status` response.
pub fn respond_with_json<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(body) => json_response(status, body),
        Err(e) => {
            error!(error = %e, status = status.as_u16(), "failed to encode response payload");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Respond with `{"error": message}` and `status`.
pub fn respond_with_error(status: StatusCode, message: impl Into<String>) -> Response {
    match serde_json::to_vec(&ErrorResponse::new(message)) {
        Ok(body) => json_response(status, body),
        Err(e) => {
            error!(error = %e, status = status.as_u16(), "failed to encode error envelope");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn json_response(status: StatusCode, body: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        Bytes::from(body),
    )
        .into_response()
}

/// Handler error that renders as an error envelope.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        respond_with_error(status, self.0.to_string())
    }
}
