use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct AppendReviewParams {
    pub id: Uuid,
    pub comment: Option<String>,
}

#[async_trait]
pub trait AppendReviewUseCase: Send + Sync {
    async fn execute(&self, params: AppendReviewParams) -> Result<Product, ProductError>;
}
