//! Page downloader
//!
//! Fetches the page that is about to be analyzed. Only a `200 OK` answer is
//! accepted; a 404 is reported separately so callers can tell a missing page
//! from any other failure.

use crate::config::AnalyzerConfig;
use crate::DownloadError;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Builds the HTTP client used to download pages
///
/// # Arguments
///
/// * `user_agent` - Value of the User-Agent header
/// * `timeout` - Overall time budget for one download
pub fn build_download_client(user_agent: &str, timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Downloads raw page content over HTTP
#[derive(Debug, Clone)]
pub struct PageDownloader {
    client: Client,
}

impl PageDownloader {
    /// Creates a downloader around an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a downloader from the analyzer configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, reqwest::Error> {
        let client = build_download_client(&config.user_agent, config.download_timeout())?;
        Ok(Self::new(client))
    }

    /// Fetches `url` and returns the response body
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - Body of a `200 OK` response
    /// * `Err(DownloadError::NotFound)` - The server answered 404
    /// * `Err(DownloadError::Status)` - Any other non-200 status
    /// * `Err(DownloadError::Http)` - The request or body transfer failed
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, DownloadError> {
        let http_error = |source| DownloadError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(DownloadError::NotFound {
                url: url.to_string(),
            });
        }

        if status != StatusCode::OK {
            return Err(DownloadError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        tracing::debug!("Downloaded {} ({} bytes)", url, body.len());

        Ok(body.to_vec())
    }
}
