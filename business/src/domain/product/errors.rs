use super::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.invalid_input")]
    InvalidInput(Vec<FieldViolation>),
    #[error("product.image_required")]
    MissingImage,
    #[error("product.not_found")]
    NotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("product.upload_failed")]
    UploadFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl ProductError {
    /// Shorthand for a single-field `InvalidInput`.
    pub fn invalid_field(field: &str, code: &str) -> Self {
        ProductError::InvalidInput(vec![FieldViolation::new(field, code)])
    }

    /// Violations carried by `InvalidInput`, empty for every other kind.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            ProductError::InvalidInput(violations) => violations,
            _ => &[],
        }
    }
}

/// Converts a repository failure into a product error, surfacing missing
/// records as `NotFound`.
pub fn from_repository(error: crate::domain::errors::RepositoryError) -> ProductError {
    match error {
        crate::domain::errors::RepositoryError::NotFound => ProductError::NotFound,
        other => ProductError::Repository(other),
    }
}
