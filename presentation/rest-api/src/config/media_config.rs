use anyhow::Context;
use std::env;

const DEFAULT_FOLDER: &str = "products";

/// Cloudinary credentials for product image uploads
///
/// Environment variables:
/// - CLOUDINARY_CLOUD_NAME, CLOUDINARY_API_KEY, CLOUDINARY_API_SECRET (required)
/// - CLOUDINARY_FOLDER: Upload folder (default: "products")
pub struct MediaConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

impl MediaConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_API_SECRET")?,
            folder: env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.to_string()),
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

impl std::fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .field("folder", &self.folder)
            .finish()
    }
}
