use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::uploads::UploadError;
use crate::application::validation::{FieldError, ValidationError};

/// HTTP-facing error taxonomy. Validation failures carry per-field
/// detail; ownership failures and genuinely missing rows share the same
/// not-found shape; internal errors are logged server-side and flattened
/// to a generic message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request data")]
    Validation(Vec<FieldError>),
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error("{0}")]
    BadRequest(&'static str),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<ValidationError>() {
            Ok(validation) => ApiError::Validation(validation.errors),
            Err(err) => match err.downcast::<UploadError>() {
                Ok(upload) => ApiError::Upload(upload),
                Err(err) => ApiError::Internal(err),
            },
        }
    }
}

impl ApiError {
    /// A multipart read failure caused by the transport body cap is still
    /// an over-limit upload; everything else is a malformed request.
    pub(crate) fn from_multipart(err: axum::extract::multipart::MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::Upload(UploadError::TooLarge)
        } else {
            ApiError::BadRequest("malformed multipart payload")
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorBody {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    message: "Invalid request data".into(),
                    errors: Some(errors),
                },
            ),
            ApiError::NotFound => (StatusCode::NOT_FOUND, ErrorBody::message("Not found")),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorBody::message("Unauthorized"),
            ),
            ApiError::Upload(err @ UploadError::UnsupportedType) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ErrorBody::message(err.to_string()),
            ),
            ApiError::Upload(err @ UploadError::TooLarge) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                ErrorBody::message(err.to_string()),
            ),
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorBody::message(message))
            }
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "internal_error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("Internal server error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_field_detail() {
        let err: ApiError = anyhow::Error::new(ValidationError {
            errors: vec![FieldError {
                field: "title",
                message: "is required".into(),
            }],
        })
        .into();
        assert!(matches!(err, ApiError::Validation(ref e) if e.len() == 1));
    }

    #[test]
    fn upload_errors_survive_anyhow_round_trip() {
        let err: ApiError = anyhow::Error::new(UploadError::TooLarge).into();
        assert!(matches!(err, ApiError::Upload(UploadError::TooLarge)));
    }

    #[test]
    fn unknown_errors_become_internal() {
        let err: ApiError = anyhow::anyhow!("db exploded").into();
        assert!(matches!(err, ApiError::Internal(_)));
    }

    #[test]
    fn over_limit_upload_answers_413() {
        let resp = ApiError::Upload(UploadError::TooLarge).into_response();
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn non_image_upload_answers_415() {
        let resp = ApiError::Upload(UploadError::UnsupportedType).into_response();
        assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
