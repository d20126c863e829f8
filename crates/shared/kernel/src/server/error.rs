use crate::security::IdError;
use crate::server::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::fmt;
use tln_derive::api_model;
use tln_domain::error::{Classify, ErrorKind};
use tracing::{debug, error};

/// Error payload returned by every endpoint.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ErrorBody {
    /// Stable classification code, e.g. `NOT_FOUND`.
    pub code: String,
    /// Human-readable description.
    pub message: String,
}

/// Transport-level error: a classification plus the message shown to the client.
///
/// The HTTP status is derived from the classification only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Converts any classified error, keeping its kind and rendered message.
    pub fn classified<E>(err: &E) -> Self
    where
        E: Classify + fmt::Display,
    {
        Self::new(err.kind(), err.to_string())
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        status_for(self.kind)
    }
}

/// Maps a classification to its HTTP status.
///
/// `Conflict` is reported as `400 Bad Request`, matching what existing clients expect.
#[must_use]
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::BAD_REQUEST,
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Forbidden => StatusCode::FORBIDDEN,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<IdError> for ApiError {
    fn from(err: IdError) -> Self {
        Self::classified(&err)
    }
}

impl From<ApiStateError> for ApiError {
    fn from(err: ApiStateError) -> Self {
        Self::new(ErrorKind::Internal, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.kind.is_client_error() {
            debug!(kind = %self.kind, status = status.as_u16(), message = %self.message, "Request rejected");
        } else {
            error!(status = status.as_u16(), message = %self.message, "Request failed");
        }

        let body = ErrorBody { code: self.kind.code().to_owned(), message: self.message };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::IdGuard;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn every_kind_has_a_status() {
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Conflict), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(status_for(ErrorKind::Unauthorized), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::Internal), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn response_carries_code_and_message() {
        let response = ApiError::new(ErrorKind::NotFound, "Provider not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_of(response).await;
        assert_eq!(body, ErrorBody { code: "NOT_FOUND".into(), message: "Provider not found".into() });
    }

    #[tokio::test]
    async fn invalid_id_is_unprocessable() {
        let err: ApiError = IdGuard::verify("a:b", "market").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_of(response).await.code, "VALIDATION");
    }
}
