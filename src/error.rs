use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("invalid authorization token")]
    InvalidAuthToken,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Each credential failure advertises the scheme it expected.
        let (status, challenge, body) = match &self {
            ApiError::InvalidApiKey => (
                StatusCode::UNAUTHORIZED,
                Some("ApiKey"),
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: self.to_string(),
                },
            ),
            ApiError::InvalidAuthToken => (
                StatusCode::UNAUTHORIZED,
                Some("Bearer"),
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: self.to_string(),
                },
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };

        let mut resp = (status, Json(ApiErrorResponse { error: body })).into_response();
        if let Some(scheme) = challenge {
            resp.headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static(scheme));
        }
        resp
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
