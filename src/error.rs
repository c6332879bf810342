use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Application-level error type that maps to the service's JSON error bodies.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request payload failed validation; carries the itemized reasons.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// No route matched the request.
    #[error("Endpoint not found")]
    NotFound,

    /// Unexpected failure. The message is the client-facing text; the
    /// underlying cause is logged where the error is raised.
    #[error("{0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = match &self {
            AppError::Validation(details) => json!({
                "error": "Validation failed",
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = AppError::Validation(vec!["Salary is required".to_string()]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            AppError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn internal_maps_to_500() {
        let err = AppError::Internal("Failed to fetch jobs".to_string());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
