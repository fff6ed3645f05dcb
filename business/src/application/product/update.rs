use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{ProductError, from_repository};
use crate::domain::product::model::{Product, ProductChanges};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageUploaderService;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::validation::validate;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub uploader: Arc<dyn ImageUploaderService>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProductUseCaseImpl {
    /// Uploaded file first, then a caller-supplied URL, otherwise keep what is stored.
    async fn resolve_image_url(
        &self,
        params: &UpdateProductParams,
    ) -> Result<Option<String>, ProductError> {
        if let Some(image) = &params.image {
            let url = self.uploader.upload(image).await.inspect_err(|e| {
                self.logger.error(&format!(
                    "Image upload failed while updating {}: {}",
                    params.id, e
                ));
            })?;
            return Ok(Some(url));
        }

        match params.image_url.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Url::parse(raw)
                .map(|_| Some(raw.to_string()))
                .map_err(|_| ProductError::invalid_field("imageUrl", "product.image_url_invalid")),
        }
    }
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        if !params.role.is_admin() {
            self.logger.warn(&format!(
                "Rejected update of {} for role '{}'",
                params.id, params.role
            ));
            return Err(ProductError::Forbidden);
        }

        self.logger
            .info(&format!("Updating product: {}", params.id));

        let valid = validate(&params.payload).map_err(ProductError::InvalidInput)?;
        let image_url = self.resolve_image_url(&params).await?;

        let updated_product = self
            .repository
            .update(params.id, &ProductChanges::from_valid(valid, image_url))
            .await
            .map_err(from_repository)?;

        self.logger
            .info(&format!("Product updated: {}", updated_product.id));
        Ok(updated_product)
    }
}
