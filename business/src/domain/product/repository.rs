use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::listing::ProductFilter;
use super::model::{NewProduct, Product, ProductChanges};
use super::value_objects::PriceSort;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: Option<PriceSort>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Product>, RepositoryError>;
    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
    /// Applies only the supplied fields and returns the record after the update.
    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError>;
    /// Appends to the review list in a single store-side operation.
    async fn append_review(&self, id: Uuid, comment: &str) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
