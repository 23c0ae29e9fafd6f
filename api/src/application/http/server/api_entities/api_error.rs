use axum::{
    Json,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

use zad_core::domain::{common::entities::app_errors::CoreError, screen::entities::Tool};

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Not found")]
    NotFound,

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Map a core failure raised by an analysis operation. Transport and
    /// schema failures collapse to the same user-facing message; the caller's
    /// only reaction is to show it and offer a retry.
    pub fn from_analysis(error: CoreError, tool: Tool) -> Self {
        let message = error.user_message(tool);
        match error {
            CoreError::Invalid(_) | CoreError::LocationRequired => ApiError::BadRequest(message),
            CoreError::AnalysisPending => ApiError::Conflict(message),
            CoreError::ExternalServiceError(_) | CoreError::MalformedResponse(_) => {
                ApiError::BadGateway(message)
            }
            CoreError::NotFound => ApiError::NotFound,
            CoreError::InternalServerError => ApiError::InternalServerError(message),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::LocationRequired => ApiError::BadRequest(error.to_string()),
            CoreError::AnalysisPending => ApiError::Conflict(error.to_string()),
            CoreError::NotFound => ApiError::NotFound,
            CoreError::ExternalServiceError(message) | CoreError::MalformedResponse(message) => {
                ApiError::BadGateway(message)
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("internal server error".to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ApiErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// JSON extractor that runs `validator` rules before the handler sees the
/// payload.
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        value
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;

        Ok(ValidateJson(value))
    }
}
