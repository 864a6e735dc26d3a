use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::models::DatasetError;
use crate::query::FilterError;

/// Every way a request can fail, each mapped to one HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error(transparent)]
    Dataset(#[from] DatasetError)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Dataset(DatasetError::NotLoaded) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Dataset(_) => StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Validation(detail) => ErrorBody {
                error: "ValidationError",
                message: "Invalid request parameters".to_string(),
                detail: Some(detail.clone())
            },
            ApiError::NotFound(_) => ErrorBody {
                error: "NotFound",
                message: self.to_string(),
                detail: None
            },
            ApiError::Dataset(DatasetError::NotLoaded) => ErrorBody {
                error: "ServiceUnavailable",
                message: self.to_string(),
                detail: None
            },
            ApiError::Dataset(cause) => ErrorBody {
                error: "InternalServerError",
                message: "An unexpected error occurred".to_string(),
                detail: Some(cause.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!("Request failed with {status}: {self}");
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<FilterError> for ApiError {
    fn from(error: FilterError) -> Self {
        ApiError::Validation(error.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}
