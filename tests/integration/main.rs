//! Integration tests for the page analysis engine
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! downloader, the prober and full analyses end-to-end.

mod analysis_tests;
mod download_tests;
mod probe_tests;
