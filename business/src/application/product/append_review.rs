use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, from_repository};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::append_review::{AppendReviewParams, AppendReviewUseCase};

pub struct AppendReviewUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AppendReviewUseCase for AppendReviewUseCaseImpl {
    async fn execute(&self, params: AppendReviewParams) -> Result<Product, ProductError> {
        let comment = params
            .comment
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(|| ProductError::invalid_field("comment", "product.comment_required"))?;

        self.logger
            .info(&format!("Appending review to product: {}", params.id));

        // The append happens inside the store, never as read-modify-write here.
        let product = self
            .repository
            .append_review(params.id, comment)
            .await
            .map_err(from_repository)?;

        self.logger.info(&format!(
            "Product {} now has {} review(s)",
            product.id,
            product.reviews.len()
        ));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        InMemoryProductRepo, MockProductRepo, mock_logger, stored_product,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductCategory;
    use uuid::Uuid;

    #[tokio::test]
    async fn should_append_trimmed_comment() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();
        mock_repo
            .expect_append_review()
            .withf(move |id, comment| *id == product_id && comment.to_string() == "Great sound")
            .times(1)
            .returning(|id, comment| {
                let mut product = stored_product(id);
                product.reviews.push(comment.to_string());
                Ok(product)
            });

        let use_case = AppendReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AppendReviewParams {
                id: product_id,
                comment: Some("  Great sound ".to_string()),
            })
            .await;

        assert_eq!(result.unwrap().reviews, vec!["Great sound".to_string()]);
    }

    #[tokio::test]
    async fn should_reject_missing_comment() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_append_review().never();

        let use_case = AppendReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        for comment in [None, Some(String::new()), Some("   ".to_string())] {
            let result = use_case
                .execute(AppendReviewParams {
                    id: Uuid::new_v4(),
                    comment,
                })
                .await;

            let err = result.unwrap_err();
            assert_eq!(err.violations()[0].field, "comment");
        }
    }

    #[tokio::test]
    async fn should_return_not_found_when_product_missing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_append_review()
            .returning(|_, _| Err(RepositoryError::NotFound));

        let use_case = AppendReviewUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AppendReviewParams {
                id: Uuid::new_v4(),
                comment: Some("Nice".to_string()),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_every_review_when_appended_concurrently() {
        let repository = Arc::new(InMemoryProductRepo::default());
        let stored = repository
            .insert(&NewProduct {
                name: "Denim Jacket".to_string(),
                description: "Classic fit denim jacket".to_string(),
                price: 80.0,
                image_url: "https://cdn.test/jacket.png".to_string(),
                category: ProductCategory::Clothing,
            })
            .await
            .unwrap();
        let product_id = stored.id;

        let use_case = Arc::new(AppendReviewUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        });

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let use_case = use_case.clone();
                tokio::spawn(async move {
                    use_case
                        .execute(AppendReviewParams {
                            id: product_id,
                            comment: Some(format!("review {i}")),
                        })
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let product = repository.get_by_id(product_id).await.unwrap();
        assert_eq!(product.reviews.len(), 20);
        for i in 0..20 {
            assert!(product.reviews.contains(&format!("review {i}")));
        }
    }
}
