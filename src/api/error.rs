use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::HisaabError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid asOf date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Statement(#[from] HisaabError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidDate(_) => StatusCode::BAD_REQUEST,
            ApiError::Statement(err) => match err {
                HisaabError::UserNotFound { .. } => StatusCode::NOT_FOUND,
                HisaabError::MalformedRecord { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                HisaabError::Validation(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "statement request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "statement request rejected");
        }

        let body = Json(json!({
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::from(HisaabError::user_not_found("u1")),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(HisaabError::malformed_budget("bad month")),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::InvalidDate("2024-13-01".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(HisaabError::Storage("disk gone".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{}", err);
        }
    }

    #[test]
    fn test_transparent_message() {
        let err = ApiError::from(HisaabError::user_not_found("u1"));
        assert_eq!(err.to_string(), "User not found: u1");
    }
}
