use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageUploaderService;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::validation::validate;

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub uploader: Arc<dyn ImageUploaderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {:?}", params.payload.name));

        let valid = validate(&params.payload).map_err(|violations| {
            self.logger.warn(&format!(
                "Rejected product payload with {} violation(s)",
                violations.len()
            ));
            ProductError::InvalidInput(violations)
        })?;

        let image = params.image.ok_or(ProductError::MissingImage)?;

        // Nothing is persisted unless the upload succeeded.
        let image_url = self.uploader.upload(&image).await.inspect_err(|e| {
            self.logger
                .error(&format!("Image upload failed for {}: {}", image.file_name, e));
        })?;

        let product = self
            .repository
            .insert(&NewProduct::new(valid, image_url))
            .await?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        InMemoryProductRepo, MockProductRepo, MockUploader, mock_logger, sample_image,
        stored_product, valid_payload,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::repository::ProductRepository;
    use crate::domain::product::validation::{FieldViolation, ProductPayload};
    use crate::domain::product::value_objects::ProductCategory;
    use uuid::Uuid;

    fn uploader_returning(url: &'static str) -> MockUploader {
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .times(1)
            .returning(move |_| Ok(url.to_string()));
        uploader
    }

    #[tokio::test]
    async fn should_create_product_with_uploaded_image_url() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|product| {
                product.name == "Mechanical Keyboard"
                    && product.price == 89.9
                    && product.category == ProductCategory::Electronics
                    && product.image_url == "https://cdn.test/keyboard.png"
            })
            .times(1)
            .returning(|_| {
                let mut product = stored_product(Uuid::new_v4());
                product.image_url = "https://cdn.test/keyboard.png".to_string();
                Ok(product)
            });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            uploader: Arc::new(uploader_returning("https://cdn.test/keyboard.png")),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: valid_payload(),
                image: Some(sample_image()),
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.image_url, "https://cdn.test/keyboard.png");
        assert!(product.reviews.is_empty());
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_without_uploading_or_persisting() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();
        let mut uploader = MockUploader::new();
        uploader.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            uploader: Arc::new(uploader),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: ProductPayload {
                    price: Some("-5".to_string()),
                    ..valid_payload()
                },
                image: Some(sample_image()),
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::InvalidInput(_)));
        assert_eq!(
            err.violations(),
            &[FieldViolation::new("price", "product.price_not_positive")]
        );
    }

    #[tokio::test]
    async fn should_require_image_file() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();
        let mut uploader = MockUploader::new();
        uploader.expect_upload().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            uploader: Arc::new(uploader),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: valid_payload(),
                image: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::MissingImage));
    }

    #[tokio::test]
    async fn should_not_persist_when_upload_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();
        let mut uploader = MockUploader::new();
        uploader
            .expect_upload()
            .returning(|_| Err(ProductError::UploadFailed));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            uploader: Arc::new(uploader),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: valid_payload(),
                image: Some(sample_image()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::UploadFailed));
    }

    #[tokio::test]
    async fn should_surface_persistence_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            uploader: Arc::new(uploader_returning("https://cdn.test/keyboard.png")),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: valid_payload(),
                image: Some(sample_image()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }

    #[tokio::test]
    async fn should_read_back_created_product_by_id() {
        let repository = Arc::new(InMemoryProductRepo::default());
        let use_case = CreateProductUseCaseImpl {
            repository: repository.clone(),
            uploader: Arc::new(uploader_returning("https://cdn.test/keyboard.png")),
            logger: mock_logger(),
        };

        let created = use_case
            .execute(CreateProductParams {
                payload: valid_payload(),
                image: Some(sample_image()),
            })
            .await
            .unwrap();

        let fetched = repository.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Mechanical Keyboard");
        assert_eq!(fetched.description, "Tenkeyless keyboard with brown switches");
        assert_eq!(fetched.price, 89.9);
        assert!(!fetched.image_url.is_empty());
    }

    #[tokio::test]
    async fn should_leave_store_unchanged_when_payload_invalid() {
        let repository = Arc::new(InMemoryProductRepo::default());
        let use_case = CreateProductUseCaseImpl {
            repository: repository.clone(),
            uploader: Arc::new(MockUploader::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                payload: ProductPayload {
                    category: Some("furniture".to_string()),
                    ..valid_payload()
                },
                image: Some(sample_image()),
            })
            .await;

        assert!(result.is_err());
        assert_eq!(repository.len().await, 0);
    }
}
