//! Image store client (OpenAI Files API).

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{UploadError, UploadResult};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the file store client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// API key used as a bearer token.
    pub api_key: String,
    /// API base URL (no trailing slash).
    pub base_url: String,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> UploadResult<Self> {
        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .map_err(|_| UploadError::config_error("OPENAI_API_KEY not set"))?,
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}

/// Narrow capability for uploading an image and getting back an
/// identifier the downstream request can reference.
///
/// Keeping this a trait lets the payload encoder stay unit-testable
/// without network access.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload raw bytes under a filename; returns the store's file id.
    async fn upload(&self, content: &[u8], filename: &str) -> UploadResult<String>;
}

/// File store client backed by the OpenAI Files API.
#[derive(Clone)]
pub struct FileStoreClient {
    client: Client,
    config: StoreConfig,
}

#[derive(Debug, Deserialize)]
struct FileObject {
    id: Option<String>,
}

impl FileStoreClient {
    /// Create a new client from configuration.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> UploadResult<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }
}

#[async_trait]
impl ImageStore for FileStoreClient {
    async fn upload(&self, content: &[u8], filename: &str) -> UploadResult<String> {
        debug!("Uploading {} ({} bytes)", filename, content.len());

        // The store wants the basename, not the manifest-relative path.
        let basename = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(filename)
            .to_string();

        let part = Part::bytes(content.to_vec())
            .file_name(basename)
            .mime_str("image/png")?;
        let form = Form::new().text("purpose", "user_data").part("file", part);

        let response = self
            .client
            .post(format!("{}/files", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(UploadError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let file: FileObject = response.json().await?;
        let file_id = file.id.ok_or(UploadError::MissingFileId)?;

        info!("Uploaded image {} -> {}", filename, file_id);
        Ok(file_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> FileStoreClient {
        FileStoreClient::new(StoreConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
        })
    }

    #[tokio::test]
    async fn test_upload_returns_file_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/files"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"id": "file-abc", "object": "file"})),
            )
            .mount(&server)
            .await;

        let id = client_for(&server)
            .upload(b"png-bytes", "views/toaster_front.png")
            .await
            .unwrap();
        assert_eq!(id, "file-abc");
    }

    #[tokio::test]
    async fn test_api_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/files"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload(b"png-bytes", "front.png")
            .await
            .unwrap_err();
        match err {
            UploadError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("rate limited"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_missing_id_is_a_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/files"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"object": "file"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload(b"png-bytes", "front.png")
            .await
            .unwrap_err();
        assert!(matches!(err, UploadError::MissingFileId));
    }
}
