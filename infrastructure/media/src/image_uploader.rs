use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::ImageFile;
use business::domain::product::services::ImageUploaderService;

use crate::client::CloudinaryClient;

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadErrorBody>,
}

#[derive(Deserialize)]
struct UploadErrorBody {
    message: String,
}

pub struct ImageUploaderCloudinary {
    client: CloudinaryClient,
}

impl ImageUploaderCloudinary {
    pub fn new(client: CloudinaryClient) -> Self {
        Self { client }
    }

    fn file_part(image: &ImageFile) -> Part {
        let part = Part::bytes(image.bytes.clone()).file_name(image.file_name.clone());
        match image.content_type.as_deref() {
            Some(content_type) => match part.mime_str(content_type) {
                Ok(part) => part,
                // Unparseable content types are dropped; Cloudinary sniffs the bytes.
                Err(_) => Part::bytes(image.bytes.clone()).file_name(image.file_name.clone()),
            },
            None => part,
        }
    }

    fn build_form(&self, image: &ImageFile, timestamp: String) -> Form {
        let signature = self.client.sign(&[
            ("folder", self.client.folder.clone()),
            ("timestamp", timestamp.clone()),
        ]);

        Form::new()
            .text("api_key", self.client.api_key.clone())
            .text("folder", self.client.folder.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", Self::file_part(image))
    }

    fn parse_upload_response(body: &str) -> Result<String, ProductError> {
        let parsed: UploadResponse = serde_json::from_str(body).map_err(|e| {
            tracing::error!(error = %e, "unreadable upload response");
            ProductError::UploadFailed
        })?;

        if let Some(error) = parsed.error {
            tracing::error!(message = %error.message, "upload rejected by media host");
            return Err(ProductError::UploadFailed);
        }

        parsed
            .secure_url
            .filter(|url| !url.is_empty())
            .ok_or(ProductError::UploadFailed)
    }
}

#[async_trait]
impl ImageUploaderService for ImageUploaderCloudinary {
    async fn upload(&self, image: &ImageFile) -> Result<String, ProductError> {
        let form = self.build_form(image, Utc::now().timestamp().to_string());

        let response = self
            .client
            .client
            .post(self.client.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, file = %image.file_name, "upload request failed");
                ProductError::UploadFailed
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!(error = %e, "failed to read upload response");
            ProductError::UploadFailed
        })?;

        if !status.is_success() {
            tracing::error!(%status, "media host returned an error status");
            return Err(ProductError::UploadFailed);
        }

        let url = Self::parse_upload_response(&body)?;
        tracing::debug!(file = %image.file_name, %url, "image uploaded");
        Ok(url)
    }
}
