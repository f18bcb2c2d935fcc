use axum::http::header::RETRY_AFTER;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use signatures::{StoreError, Tier};

pub type ServerResult<T> = Result<T, ServerError>;

pub const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later.";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid category. Choose from: unbothered, unhinged, unleashed")]
    InvalidCategory(String),

    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimitExceeded { retry_after_secs: u64 },

    #[error("Not found")]
    NotFound,

    #[error("Signature store error: {0}")]
    Store(#[from] StoreError),
}

/// API error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_categories: Option<Vec<String>>,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidCategory(_) => StatusCode::BAD_REQUEST,
            ServerError::RateLimitExceeded { .. } => StatusCode::TOO_MANY_REQUESTS,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ServerError::InvalidCategory(raw) => {
                tracing::debug!(category = %raw, "rejected category")
            }
            ServerError::Store(err) => tracing::error!(error = %err, "signature store failure"),
            _ => {}
        }

        let body = ErrorResponse {
            error: self.to_string(),
            valid_categories: match &self {
                ServerError::InvalidCategory(_) => {
                    Some(Tier::names().into_iter().map(String::from).collect())
                }
                _ => None,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if let ServerError::RateLimitExceeded { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }
        response
    }
}
