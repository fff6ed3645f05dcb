use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::product::validation::FieldViolation;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// One entry per failing field, present on validation errors only
    #[oai(skip_serializing_if_is_none)]
    pub details: Option<Vec<FieldViolationDto>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            details: None,
        }
    }
}

#[derive(Object, Debug, Clone)]
pub struct FieldViolationDto {
    pub field: String,
    pub code: String,
}

impl From<&FieldViolation> for FieldViolationDto {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.clone(),
            code: violation.code.clone(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
