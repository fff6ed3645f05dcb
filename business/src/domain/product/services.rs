use async_trait::async_trait;

use super::errors::ProductError;
use super::model::ImageFile;

/// Service port for the external media host.
///
/// Uploads the file and returns the durable public URL it is served from.
/// Failures surface as [`ProductError::UploadFailed`] and are not retried.
#[async_trait]
pub trait ImageUploaderService: Send + Sync {
    async fn upload(&self, image: &ImageFile) -> Result<String, ProductError>;
}
