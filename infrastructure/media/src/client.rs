use reqwest::Client;
use sha2::{Digest, Sha256};

/// Shared Cloudinary HTTP client configuration.
pub struct CloudinaryClient {
    pub client: Client,
    pub cloud_name: String,
    pub api_key: String,
    api_secret: String,
    pub folder: String,
    pub base_url: String,
}

impl CloudinaryClient {
    pub fn new(cloud_name: String, api_key: String, api_secret: String, folder: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            cloud_name,
            api_key,
            api_secret,
            folder,
            base_url: "https://api.cloudinary.com/v1_1".to_string(),
        }
    }

    /// Points the client at another host (used against local fakes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the image upload endpoint URL.
    pub fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", self.base_url, self.cloud_name)
    }

    /// Signs the upload parameters.
    ///
    /// Parameters are sorted by name, joined as `k=v&k=v`, suffixed with the
    /// API secret and hashed with SHA-256 (`signature_algorithm=sha256`).
    pub fn sign(&self, params: &[(&str, String)]) -> String {
        let mut sorted: Vec<&(&str, String)> = params.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let to_sign = sorted
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.api_secret.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> CloudinaryClient {
        CloudinaryClient::new(
            "demo".to_string(),
            "key".to_string(),
            "secret".to_string(),
            "products".to_string(),
        )
    }

    #[test]
    fn should_build_upload_url_from_cloud_name() {
        assert_eq!(
            client().upload_url(),
            "https://api.cloudinary.com/v1_1/demo/image/upload"
        );
    }

    #[test]
    fn should_sign_parameters_in_alphabetical_order() {
        let client = client();

        let shuffled = client.sign(&[
            ("timestamp", "1700000000".to_string()),
            ("folder", "products".to_string()),
        ]);
        let ordered = client.sign(&[
            ("folder", "products".to_string()),
            ("timestamp", "1700000000".to_string()),
        ]);

        let mut hasher = Sha256::new();
        hasher.update(b"folder=products&timestamp=1700000000secret");
        let expected = format!("{:x}", hasher.finalize());

        assert_eq!(shuffled, ordered);
        assert_eq!(ordered, expected);
        assert_eq!(ordered.len(), 64);
    }

    #[test]
    fn should_change_signature_when_secret_changes() {
        let params = [("folder", "products".to_string())];
        let other = CloudinaryClient::new(
            "demo".to_string(),
            "key".to_string(),
            "other-secret".to_string(),
            "products".to_string(),
        );

        assert_ne!(client().sign(&params), other.sign(&params));
    }
}
