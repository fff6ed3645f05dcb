use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{ImageFile, Product};
use crate::domain::product::validation::ProductPayload;
use crate::domain::shared::value_objects::Role;

pub struct UpdateProductParams {
    pub id: Uuid,
    pub role: Role,
    pub payload: ProductPayload,
    /// Replacement URL supplied by the caller. Ignored when `image` is present.
    pub image_url: Option<String>,
    pub image: Option<ImageFile>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
