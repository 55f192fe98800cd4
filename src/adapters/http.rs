use crate::domain::ports::ImageSource;
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

/// Downloads images over HTTP(S) with a request timeout and a size cap.
#[derive(Debug, Clone)]
pub struct HttpImageSource {
    client: Client,
    max_bytes: usize,
}

impl HttpImageSource {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("lynalyze-analyzer/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, max_bytes })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let url = validate_url("image_url", url)?;

        let mut response = self.client.get(url.clone()).send().await?;
        tracing::debug!("Image response status: {}", response.status());

        if !response.status().is_success() {
            return Err(AnalyzerError::UpstreamStatusError {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes as u64 {
                return Err(AnalyzerError::PayloadTooLargeError {
                    limit: self.max_bytes,
                });
            }
        }

        // Content-Length 可能不存在或不可信，逐塊累計檢查
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > self.max_bytes {
                return Err(AnalyzerError::PayloadTooLargeError {
                    limit: self.max_bytes,
                });
            }
            body.extend_from_slice(&chunk);
        }

        Ok(body)
    }
}
