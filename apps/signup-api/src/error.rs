use activity_directory::DirectoryError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients as `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),

    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Directory(DirectoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Directory(_) => StatusCode::BAD_REQUEST,
            Self::MissingParameter(_) | Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let not_found = ApiError::from(DirectoryError::NotFound {
            activity: "Knitting".to_string(),
        });
        let duplicate = ApiError::from(DirectoryError::AlreadyRegistered {
            activity: "Chess Club".to_string(),
            email: "a@mergington.edu".to_string(),
        });
        let full = ApiError::from(DirectoryError::ActivityFull {
            activity: "Chess Club".to_string(),
            max_participants: 12,
        });

        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
        assert_eq!(full.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MissingParameter("email").status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[tokio::test]
    async fn invalid_query_renders_json_detail() {
        let response = ApiError::InvalidQuery("Failed to deserialize query string".to_string())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["detail"], "Failed to deserialize query string");
    }

    #[test]
    fn detail_uses_domain_message() {
        let err = ApiError::from(DirectoryError::NotFound {
            activity: "Knitting".to_string(),
        });
        assert_eq!(err.to_string(), "Activity not found");
    }
}
