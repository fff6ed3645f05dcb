use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, from_repository};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        if !params.role.is_admin() {
            self.logger.warn(&format!(
                "Rejected delete of {} for role '{}'",
                params.id, params.role
            ));
            return Err(ProductError::Forbidden);
        }

        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Hard delete; the repository reports NotFound when nothing matched.
        self.repository
            .delete(params.id)
            .await
            .map_err(from_repository)?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_support::{
        InMemoryProductRepo, MockProductRepo, mock_logger,
    };
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::NewProduct;
    use crate::domain::product::value_objects::ProductCategory;
    use crate::domain::shared::value_objects::Role;
    use uuid::Uuid;

    fn new_book() -> NewProduct {
        NewProduct {
            name: "The Pragmatic Programmer".to_string(),
            description: "From journeyman to master, 20th anniversary".to_string(),
            price: 42.0,
            image_url: "https://cdn.test/book.png".to_string(),
            category: ProductCategory::Books,
        }
    }

    #[tokio::test]
    async fn should_delete_product_when_admin() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .withf(move |id| *id == product_id)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: product_id,
                role: Role::Admin,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: Uuid::new_v4(),
                role: Role::Admin,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_keep_product_when_role_is_not_admin() {
        let repository = Arc::new(InMemoryProductRepo::default());
        let stored = repository.insert(&new_book()).await.unwrap();

        let use_case = DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams {
                id: stored.id,
                role: Role::from_header(Some("user")),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Forbidden));
        assert!(repository.get_by_id(stored.id).await.is_ok());
    }

    #[tokio::test]
    async fn should_not_find_product_after_delete() {
        let repository = Arc::new(InMemoryProductRepo::default());
        let stored = repository.insert(&new_book()).await.unwrap();

        let use_case = DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(DeleteProductParams {
                id: stored.id,
                role: Role::Admin,
            })
            .await
            .unwrap();

        assert!(matches!(
            repository.get_by_id(stored.id).await,
            Err(RepositoryError::NotFound)
        ));
    }
}
