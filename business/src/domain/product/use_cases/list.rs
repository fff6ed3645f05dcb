use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::ProductPage;

/// Raw listing parameters as received from the query string.
#[derive(Debug, Clone, Default)]
pub struct ListProductsParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub price_sort: Option<String>,
}

#[async_trait]
pub trait ListProductsUseCase: Send + Sync {
    async fn execute(&self, params: ListProductsParams) -> Result<ProductPage, ProductError>;
}
