//! Link reachability probing
//!
//! This module checks whether links are reachable by sending one HEAD request
//! per link, all concurrently, and counts the ones that are not.
//!
//! | Outcome | Counted as |
//! |---------|------------|
//! | HTTP 403, 404, 500, 502, 503, 504 | Inaccessible |
//! | Any other HTTP status (incl. 3xx, 401, 429) | Accessible |
//! | Invalid URL / unsupported scheme | Inaccessible |
//! | Timeout, connection, DNS or TLS error | Inaccessible |
//! | Cancelled before completion | Inaccessible |
//!
//! Probes are never retried.

use crate::config::AnalyzerConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

/// Default time budget for a single probe
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Status codes that mark a link as inaccessible
pub const INACCESSIBLE_STATUS_CODES: [StatusCode; 6] = [
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
    StatusCode::GATEWAY_TIMEOUT,
];

/// Reasons a single probe judged a link inaccessible
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("cancelled")]
    Cancelled,

    #[error("responded with HTTP {0}")]
    Status(StatusCode),
}

/// Returns true if the status code marks a link as inaccessible
pub fn is_inaccessible_status(status: StatusCode) -> bool {
    INACCESSIBLE_STATUS_CODES.contains(&status)
}

/// Builds the HTTP client used for probing
///
/// Redirects are not followed: a 3xx answer is the link's own status.
pub fn build_probe_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .redirect(Policy::none())
        .build()
}

/// Concurrent reachability checker
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    timeout: Duration,
}

impl Prober {
    /// Creates a prober from an existing client and a per-link timeout
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Creates a prober from the analyzer configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, reqwest::Error> {
        let client = build_probe_client(&config.user_agent)?;
        Ok(Self::new(client, config.probe_timeout()))
    }

    /// The per-link time budget
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probes every link and returns how many are inaccessible
    ///
    /// One task is spawned per link; the call returns once every task has
    /// finished, timed out or observed `cancel`. A task that panics counts as
    /// inaccessible. This function never fails.
    ///
    /// # Arguments
    ///
    /// * `links` - Absolute URLs to probe
    /// * `cancel` - Shared cancellation signal, usually tied to a request deadline
    pub async fn count_inaccessible(&self, links: &[String], cancel: &CancellationToken) -> usize {
        let inaccessible = Arc::new(Mutex::new(0usize));
        let mut tasks = JoinSet::new();

        for link in links {
            let client = self.client.clone();
            let link = link.clone();
            let cancel = cancel.clone();
            let inaccessible = Arc::clone(&inaccessible);
            let timeout = self.timeout;

            tasks.spawn(async move {
                if let Err(e) = probe_link(&client, &link, timeout, &cancel).await {
                    tracing::debug!("Link {} is inaccessible: {}", link, e);
                    *inaccessible.lock().await += 1;
                }
            });
        }

        let mut failed_tasks = 0;
        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("Probe task failed: {}", e);
                failed_tasks += 1;
            }
        }

        let count = *inaccessible.lock().await + failed_tasks;
        tracing::debug!(
            "Probed {} link(s), {} inaccessible",
            links.len(),
            count
        );
        count
    }
}

/// Sends one HEAD request and judges the answer
///
/// # Returns
///
/// * `Ok(StatusCode)` - The link answered with an accessible status
/// * `Err(ProbeError)` - The link is inaccessible, and why
pub async fn probe_link(
    client: &Client,
    link: &str,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<StatusCode, ProbeError> {
    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(ProbeError::Cancelled),
        result = tokio::time::timeout(timeout, client.head(link).send()) => {
            result.map_err(|_| ProbeError::Timeout(timeout))??
        }
    };

    let status = response.status();
    if is_inaccessible_status(status) {
        return Err(ProbeError::Status(status));
    }

    Ok(status)
}
