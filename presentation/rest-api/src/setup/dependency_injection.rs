use std::sync::Arc;

use logger::TracingLogger;
use media::client::CloudinaryClient;
use media::image_uploader::ImageUploaderCloudinary;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::append_review::AppendReviewUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::list::ListProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::media_config::MediaConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, media: &MediaConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool));
        let cloudinary_client = CloudinaryClient::new(
            media.cloud_name.clone(),
            media.api_key.clone(),
            media.api_secret.clone(),
            media.folder.clone(),
        );
        let image_uploader = Arc::new(ImageUploaderCloudinary::new(cloudinary_client));

        // Product use cases
        let list_use_case = Arc::new(ListProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            uploader: image_uploader.clone(),
            logger: logger.clone(),
        });
        let append_review_use_case = Arc::new(AppendReviewUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            uploader: image_uploader,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            list_use_case,
            get_by_id_use_case,
            create_use_case,
            append_review_use_case,
            update_use_case,
            delete_use_case,
        );

        Self {
            health_api,
            product_api,
        }
    }
}
