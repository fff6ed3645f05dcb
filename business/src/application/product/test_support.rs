use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::ProductFilter;
use crate::domain::product::model::{ImageFile, NewProduct, Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageUploaderService;
use crate::domain::product::validation::ProductPayload;
use crate::domain::product::value_objects::{PriceSort, ProductCategory};

pub use super::in_memory::InMemoryProductRepo;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
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
        async fn update(&self, id: Uuid, changes: &ProductChanges) -> Result<Product, RepositoryError>;
        async fn append_review(&self, id: Uuid, comment: &str) -> Result<Product, RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub Uploader {}

    #[async_trait]
    impl ImageUploaderService for Uploader {
        async fn upload(&self, image: &ImageFile) -> Result<String, ProductError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn valid_payload() -> ProductPayload {
    ProductPayload {
        name: Some("Mechanical Keyboard".to_string()),
        description: Some("Tenkeyless keyboard with brown switches".to_string()),
        price: Some("89.90".to_string()),
        category: Some("electronics".to_string()),
    }
}

pub fn sample_image() -> ImageFile {
    ImageFile::new("keyboard.png", Some("image/png".to_string()), vec![0x89, 0x50, 0x4e, 0x47])
}

pub fn stored_product(id: Uuid) -> Product {
    Product::from_repository(
        id,
        "Mechanical Keyboard".to_string(),
        "Tenkeyless keyboard with brown switches".to_string(),
        89.9,
        "https://res.cloudinary.test/products/keyboard.png".to_string(),
        ProductCategory::Electronics,
        vec![],
    )
}
