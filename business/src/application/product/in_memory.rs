use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::product::listing::ProductFilter;
use crate::domain::product::model::{NewProduct, Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::PriceSort;

/// Store-backed fake: every operation runs under one lock, like a
/// single-document update in a real store.
#[derive(Default)]
pub struct InMemoryProductRepo {
    products: tokio::sync::Mutex<Vec<Product>>,
}

impl InMemoryProductRepo {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: tokio::sync::Mutex::new(products),
        }
    }

    pub async fn len(&self) -> usize {
        self.products.lock().await.len()
    }

    /// Copy of the stored products in insertion order.
    pub async fn snapshot(&self) -> Vec<Product> {
        self.products.lock().await.clone()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepo {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: Option<PriceSort>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.lock().await;
        let mut matching: Vec<Product> = products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        match sort {
            Some(PriceSort::Asc) => matching.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Some(PriceSort::Desc) => matching.sort_by(|a, b| b.price.total_cmp(&a.price)),
            None => {}
        }
        Ok(matching
            .into_iter()
            .skip(skip as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, filter: &ProductFilter) -> Result<u64, RepositoryError> {
        let products = self.products.lock().await;
        Ok(products.iter().filter(|p| filter.matches(p)).count() as u64)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let products = self.products.lock().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError> {
        let stored = Product::from_repository(
            Uuid::new_v4(),
            product.name.clone(),
            product.description.clone(),
            product.price,
            product.image_url.clone(),
            product.category,
            vec![],
        );
        self.products.lock().await.push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        if let Some(name) = &changes.name {
            product.name = name.clone();
        }
        if let Some(description) = &changes.description {
            product.description = description.clone();
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(image_url) = &changes.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        Ok(product.clone())
    }

    async fn append_review(&self, id: Uuid, comment: &str) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().await;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        product.reviews.push(comment.to_string());
        Ok(product.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut products = self.products.lock().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
