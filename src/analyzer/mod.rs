//! Page analysis orchestration
//!
//! This module ties the engine together. For one `(page URL, HTML bytes)` pair
//! it:
//! 1. Extracts page facts (the only step whose failure aborts the analysis)
//! 2. Resolves and classifies links (an invalid page URL leaves no links)
//! 3. Probes every link for reachability
//! 4. Assembles the result

use crate::config::AnalyzerConfig;
use crate::extract::{extract, HtmlVersion};
use crate::links::{resolve_and_classify, ClassifiedLink};
use crate::probe::Prober;
use crate::AnalysisError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Everything learned about one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub html_version: HtmlVersion,
    pub title: String,
    /// Heading texts keyed by tag (`h1`..`h6`)
    pub headings: BTreeMap<String, Vec<String>>,
    pub has_login_form: bool,
    pub internal_links: Vec<String>,
    pub external_links: Vec<String>,
    /// How many of the internal and external links failed their probe
    pub inaccessible_link_count: usize,
}

impl AnalysisResult {
    /// Number of links that were resolved and classified
    pub fn total_links(&self) -> usize {
        self.internal_links.len() + self.external_links.len()
    }
}

/// Splits classified links into internal and external URLs, keeping order
fn partition_links(links: Vec<ClassifiedLink>) -> (Vec<String>, Vec<String>) {
    let (internal, external): (Vec<_>, Vec<_>) =
        links.into_iter().partition(|link| link.is_internal);

    (
        internal.into_iter().map(|link| link.url).collect(),
        external.into_iter().map(|link| link.url).collect(),
    )
}

/// Page analyzer
#[derive(Debug, Clone)]
pub struct Analyzer {
    prober: Prober,
    deadline: Duration,
}

impl Analyzer {
    /// Creates an analyzer
    ///
    /// # Arguments
    ///
    /// * `prober` - Link prober
    /// * `deadline` - Budget for a whole analysis in [`Analyzer::analyze_with_deadline`]
    pub fn new(prober: Prober, deadline: Duration) -> Self {
        Self { prober, deadline }
    }

    /// Creates an analyzer from the analyzer configuration
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(
            Prober::from_config(config)?,
            config.analysis_timeout(),
        ))
    }

    /// Analyzes a downloaded page
    ///
    /// # Arguments
    ///
    /// * `base_url` - URL the page was downloaded from
    /// * `content` - Raw page bytes
    /// * `cancel` - Cancels pending link probes; cancelled probes count as inaccessible
    ///
    /// # Returns
    ///
    /// * `Ok(AnalysisResult)` - The complete result
    /// * `Err(AnalysisError)` - The HTML could not be parsed
    pub async fn analyze(
        &self,
        base_url: &str,
        content: &[u8],
        cancel: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        let facts = extract(content)?;

        let links = match resolve_and_classify(&facts.raw_links, base_url) {
            Ok(links) => links,
            Err(e) => {
                tracing::error!("Link classification failed: {}", e);
                Vec::new()
            }
        };

        let urls: Vec<String> = links.iter().map(|link| link.url.clone()).collect();
        let inaccessible_link_count = self.prober.count_inaccessible(&urls, cancel).await;

        let (internal_links, external_links) = partition_links(links);

        tracing::info!(
            "Analyzed {}: {} internal, {} external, {} inaccessible link(s)",
            base_url,
            internal_links.len(),
            external_links.len(),
            inaccessible_link_count
        );

        Ok(AnalysisResult {
            html_version: facts.html_version,
            title: facts.title,
            headings: facts.headings,
            has_login_form: facts.has_login_form,
            internal_links,
            external_links,
            inaccessible_link_count,
        })
    }

    /// Analyzes a page under the configured deadline
    ///
    /// Probes still pending when the deadline passes, or when `parent` is
    /// cancelled, are cancelled and counted as inaccessible.
    pub async fn analyze_with_deadline(
        &self,
        base_url: &str,
        content: &[u8],
        parent: &CancellationToken,
    ) -> Result<AnalysisResult, AnalysisError> {
        let cancel = parent.child_token();

        let timer = {
            let cancel = cancel.clone();
            let deadline = self.deadline;
            tokio::spawn(async move {
                tokio::time::sleep(deadline).await;
                tracing::debug!("Analysis deadline of {:?} reached", deadline);
                cancel.cancel();
            })
        };

        let result = self.analyze(base_url, content, &cancel).await;
        timer.abort();

        result
    }
}
