use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mockapetris_domain::DomainError;
use serde_json::json;

pub enum ApiError {
    Domain(DomainError),
    /// Body could not be decoded into the expected request shape.
    BadRequest(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            ApiError::Domain(err @ DomainError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }

            ApiError::Domain(
                err @ (DomainError::InvalidDomainName(_) | DomainError::InvalidIpAddress(_)),
            ) => (StatusCode::BAD_REQUEST, err.to_string()),

            ApiError::Domain(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
