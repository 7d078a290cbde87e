//! HTTP error mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use recruitbot_domain::RecruitbotError;
use tracing::warn;

/// Wrapper turning domain errors into HTTP responses.
///
/// The body is the serde-tagged form of [`RecruitbotError`], so clients get
/// `{"type": "...", "message": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub RecruitbotError);

impl From<RecruitbotError> for ApiError {
    fn from(err: RecruitbotError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RecruitbotError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RecruitbotError::NotFound(_) => StatusCode::NOT_FOUND,
            RecruitbotError::Auth(_) => StatusCode::UNAUTHORIZED,
            RecruitbotError::Network(_)
            | RecruitbotError::Calendar(_)
            | RecruitbotError::Generation(_) => StatusCode::BAD_GATEWAY,
            RecruitbotError::Config(_) | RecruitbotError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        warn!(status = %status, error = %self.0, "request failed");
        (status, Json(self.0)).into_response()
    }
}
