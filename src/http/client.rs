use anyhow::{Context, Result};
use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;

use crate::config::FetchSettings;

/// HTTP client dressed up as a browser.
///
/// Credentials are never attached here; per-call headers (including the
/// gateway keys) are supplied by the caller so the same client serves
/// both the credential-less document store and the keyed gateway.
pub struct BrowserClient {
    client: Client,
}

impl BrowserClient {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    pub async fn get(
        &self,
        url: &str,
        headers: HeaderMap,
    ) -> reqwest::Result<reqwest::Response> {
        self.client.get(url).headers(headers).send().await
    }
}
