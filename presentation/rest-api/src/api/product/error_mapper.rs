use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, FieldViolationDto, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_input",
            ),
            ProductError::MissingImage => (
                StatusCode::BAD_REQUEST,
                "MissingImage",
                "product.image_required",
            ),
            ProductError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", "product.forbidden"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::UploadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "product.upload_failed",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        let violations = self.violations();
        let details = (!violations.is_empty())
            .then(|| violations.iter().map(FieldViolationDto::from).collect());

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
                details,
            }),
        )
    }
}
