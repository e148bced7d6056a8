/// HTTP client for the Pinata pinning service
///
/// One POST pins the selected file and returns its content identifier;
/// one GET fetches the optimized rendition from the gateway. The bearer
/// credential is injected through `Config` at construction time.

use std::time::Duration;

use log::{debug, error};
use reqwest::multipart;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;

/// Path of the pin endpoint, relative to the API base
const PIN_ENDPOINT: &str = "/pinning/pinFileToIPFS";

/// Cap on a single request so a dead network resolves as a failure
/// instead of leaving the UI busy indefinitely
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from talking to the pinning service or the gateway.
///
/// Variants carry strings rather than source errors so they can travel
/// inside the application's message enum, which must be `Clone`.
#[derive(Debug, Clone, Error)]
pub enum UploadError {
    /// The request could not be assembled
    #[error("invalid request: {0}")]
    Request(String),
    /// Transport-level failure (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(String),
    /// The service answered with a non-success status
    #[error("unexpected status {0}")]
    Status(u16),
    /// The service answered 2xx but the body was not what it promises
    #[error("malformed response: {0}")]
    Response(String),
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            UploadError::Status(status.as_u16())
        } else {
            UploadError::Network(err.to_string())
        }
    }
}

/// Successful pin response; only the content identifier is used
#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Client for the pinning API
#[derive(Debug, Clone)]
pub struct PinataClient {
    http: reqwest::Client,
    api_base: String,
    jwt: String,
}

impl PinataClient {
    /// Build a client from the resolved configuration.
    ///
    /// Panics if the TLS-backed HTTP client cannot be constructed; the
    /// app cannot do anything without one.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to construct HTTP client");

        PinataClient {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            jwt: config.pinata_jwt.clone(),
        }
    }

    /// Pin a file and return its content identifier.
    ///
    /// The file is sent as multipart form field `file` with the bearer
    /// credential attached. Any non-2xx status is a failure regardless of
    /// the body; the body is logged for diagnostics only.
    pub async fn pin_file(
        &self,
        name: String,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<String, UploadError> {
        let part = multipart::Part::bytes(bytes)
            .file_name(name)
            .mime_str(mime)
            .map_err(|e| UploadError::Request(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}{}", self.api_base, PIN_ENDPOINT))
            .bearer_auth(&self.jwt)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("pin request rejected: status {}, body: {}", status, body);
            return Err(UploadError::Status(status.as_u16()));
        }

        let parsed: PinResponse = response
            .json()
            .await
            .map_err(|e| UploadError::Response(e.to_string()))?;

        debug!("pinned as {}", parsed.ipfs_hash);
        Ok(parsed.ipfs_hash)
    }

    /// Fetch the optimized rendition from the gateway.
    ///
    /// This is the explicit counterpart of the browser loading the image
    /// element: the transform request reaches the gateway here, and the
    /// bytes feed the optimized preview.
    pub async fn fetch_optimized(&self, url: &str) -> Result<Vec<u8>, UploadError> {
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }
}
