//! HTTP error mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};
use tracing::{error, warn};

/// Error returned by handlers, rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum ApiError {
    Internal(cinelog_core::Error),
    NotFound(String),
    BadRequest(String),
    Conflict(String),
}

impl From<cinelog_core::Error> for ApiError {
    fn from(err: cinelog_core::Error) -> Self {
        match err {
            cinelog_core::Error::NotFound(msg) => ApiError::NotFound(msg),
            cinelog_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            cinelog_core::Error::Conflict(msg) => ApiError::Conflict(msg),
            other => ApiError::Internal(other),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::Internal(err) => {
                error!(subsystem = "api", error = %err, "Request failed");
                err.client_message()
            }
            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Conflict(msg) => {
                warn!(
                    subsystem = "api",
                    status = status.as_u16(),
                    error = %msg,
                    "Request rejected"
                );
                msg
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinelog_core::Error;

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ApiError = Error::InvalidInput("bad rating".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_error_is_conflict() {
        let err: ApiError = Error::Conflict("taken".into()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_error_is_not_found() {
        let err: ApiError = Error::NotFound("gone".into()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let err: ApiError = Error::Config("bad".into()).into();
        assert!(matches!(err, ApiError::Internal(Error::Config(_))));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: ApiError = Error::Database(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, ApiError::Internal(Error::Database(_))));

        let err: ApiError = Error::Internal("boom".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_carries_status() {
        let response =
            ApiError::Conflict("This movie is already registered.".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }
}
