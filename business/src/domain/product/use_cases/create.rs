use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{ImageFile, Product};
use crate::domain::product::validation::ProductPayload;

pub struct CreateProductParams {
    pub payload: ProductPayload,
    pub image: Option<ImageFile>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
