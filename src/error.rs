use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy shared by every handler.
///
/// Validation failures are raised before any storage access. Storage
/// failures are propagated unchanged and never retried.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    /// Machine-readable kind, used as the `error` field of the response body
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation",
            ApiError::NotFound(_) => "not_found",
            ApiError::Conflict(_) => "conflict",
            ApiError::Storage(_) => "storage_failure",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Driver details stay in the log, not in the response
        let message = match &self {
            ApiError::Storage(e) => {
                tracing::error!("Storage failure: {:?}", e);
                String::from("The request could not be completed.")
            }
            other => other.to_string(),
        };

        (
            status,
            Json(json!({
                "error": self.kind(),
                "message": message
            })),
        )
            .into_response()
    }
}

/// True when the error is a unique-constraint violation reported by the store
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("gone".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Conflict("dup".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Storage(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ApiError::validation("x").kind(), "validation");
        assert_eq!(ApiError::NotFound("x".into()).kind(), "not_found");
        assert_eq!(ApiError::Conflict("x".into()).kind(), "conflict");
        assert_eq!(ApiError::Storage(sqlx::Error::PoolTimedOut).kind(), "storage_failure");
    }

    #[test]
    fn test_row_not_found_is_not_unique_violation() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
    }
}
