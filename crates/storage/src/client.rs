//! HTTP client for the Supabase Storage object endpoints.

use std::path::Path;

use uuid::Uuid;

/// HTTP client for a single Supabase project's storage API.
///
/// Authenticates with the service-role key, so it must only ever run
/// server-side.
pub struct StorageClient {
    client: reqwest::Client,
    base_url: String,
    service_role_key: String,
}

/// Errors from the storage API layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage API returned a non-2xx status code.
    #[error("Storage API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl StorageClient {
    /// Create a new storage client.
    ///
    /// * `base_url` - The Supabase project URL, e.g. `https://xyz.supabase.co`.
    /// * `service_role_key` - The project's service-role API key.
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            service_role_key: service_role_key.into(),
        }
    }

    /// Upload an object to a bucket.
    ///
    /// Sends `POST /storage/v1/object/{bucket}/{key}` with the raw bytes
    /// as the body. Fails with [`StorageError::Api`] if an object with
    /// the same key already exists.
    pub async fn upload(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<(), StorageError> {
        let response = self
            .client
            .post(self.object_url(bucket, key))
            .bearer_auth(&self.service_role_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(data)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Delete an object from a bucket.
    pub async fn delete(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let response = self
            .client
            .delete(self.object_url(bucket, key))
            .bearer_auth(&self.service_role_key)
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Build the public download URL for an object.
    pub fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/public/{bucket}/{key}", self.base_url)
    }

    /// Recover the object key from a public URL produced by
    /// [`Self::public_url`]. Returns `None` for URLs that point at a
    /// different project or bucket.
    pub fn key_from_public_url<'a>(&self, bucket: &str, url: &'a str) -> Option<&'a str> {
        let prefix = format!("{}/storage/v1/object/public/{bucket}/", self.base_url);
        url.strip_prefix(prefix.as_str()).filter(|key| !key.is_empty())
    }

    // ---- private helpers ----

    fn object_url(&self, bucket: &str, key: &str) -> String {
        format!("{}/storage/v1/object/{bucket}/{key}", self.base_url)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), StorageError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Generate a unique object key for an uploaded file, keeping a
/// sanitized version of its extension (defaults to `jpg`).
pub fn object_key(filename: &str) -> String {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "jpg".to_string());

    format!("{}.{ext}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> StorageClient {
        StorageClient::new("https://example.supabase.co/", "service-key")
    }

    #[test]
    fn public_url_includes_bucket_and_key() {
        let client = test_client();
        assert_eq!(
            client.public_url("events", "abc123.png"),
            "https://example.supabase.co/storage/v1/object/public/events/abc123.png"
        );
    }

    #[test]
    fn key_round_trips_through_public_url() {
        let client = test_client();
        let url = client.public_url("seminars", "abc123.webp");
        assert_eq!(client.key_from_public_url("seminars", &url), Some("abc123.webp"));
    }

    #[test]
    fn key_from_foreign_url_is_none() {
        let client = test_client();
        assert_eq!(
            client.key_from_public_url("events", "https://elsewhere.example/img.png"),
            None
        );
        // Same project, different bucket.
        let url = client.public_url("events", "abc.png");
        assert_eq!(client.key_from_public_url("webinar", &url), None);
    }

    #[test]
    fn object_key_keeps_known_extension() {
        assert!(object_key("photo.PNG").ends_with(".png"));
        assert!(object_key("archive.tar.gz").ends_with(".gz"));
    }

    #[test]
    fn object_key_defaults_extension() {
        assert!(object_key("no-extension").ends_with(".jpg"));
        assert!(object_key("weird.@@@").ends_with(".jpg"));
    }

    #[test]
    fn object_keys_are_unique() {
        assert_ne!(object_key("a.png"), object_key("a.png"));
    }
}
