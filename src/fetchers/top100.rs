use chrono::Utc;
use log::{debug, info};

use crate::config::AppConfig;
use crate::domain::models::{RankEntry, RankingEnvelope};
use crate::errors::EngineError;
use crate::http::BrowserClient;
use crate::query::RankingQuery;

/// Stage-1 fetcher: one CDN document covering ranks 1-100.
///
/// The document is keyed by (type, category) and bundles every sub-event
/// of that category, so the result is filtered client-side to the exact
/// gender+category requested. Whatever goes wrong here surfaces as the
/// same `ApiConnection` error; the cause is only logged.
pub struct Top100Fetcher<'a> {
    client: &'a BrowserClient,
    config: &'a AppConfig,
}

impl<'a> Top100Fetcher<'a> {
    pub fn new(client: &'a BrowserClient, config: &'a AppConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch(&self, query: &RankingQuery) -> Result<Vec<RankEntry>, EngineError> {
        let url = self.build_url(query);
        info!("Fetching top 100 document: {}", url);

        let envelope = self.fetch_envelope(&url).await?;
        let entries = filter_sub_event(envelope.result, &query.sub_event_code());
        info!(
            "Top 100 document yielded {} entries for sub-event {}",
            entries.len(),
            query.sub_event_code()
        );
        Ok(entries)
    }

    async fn fetch_envelope(&self, url: &str) -> Result<RankingEnvelope, EngineError> {
        let response = self
            .client
            .get(url, self.config.browser_headers())
            .await
            .map_err(|e| connection_failed("request", e))?;

        let response = response
            .error_for_status()
            .map_err(|e| connection_failed("status", e))?;

        response
            .json::<RankingEnvelope>()
            .await
            .map_err(|e| connection_failed("decode", e))
    }

    fn build_url(&self, query: &RankingQuery) -> String {
        // Millisecond timestamp defeats the CDN cache.
        format!(
            "{}/{}?q={}",
            self.config.endpoints.doc_base_url,
            query.doc_name(),
            Utc::now().timestamp_millis()
        )
    }
}

fn connection_failed(stage: &str, cause: reqwest::Error) -> EngineError {
    debug!("Top 100 fetch failed at {}: {}", stage, cause);
    EngineError::ApiConnection
}

/// Keep only entries of the requested sub-event; the document may bundle
/// several (e.g. MS and WS in one SINGLES document).
pub fn filter_sub_event(entries: Vec<RankEntry>, sub_event_code: &str) -> Vec<RankEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.sub_event_code == sub_event_code)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, sub_event: &str, position: u32) -> RankEntry {
        serde_json::from_value(json!({
            "IttfId": id,
            "PlayerName": "PLAYER Test",
            "SubEventCode": sub_event,
            "RankingPosition": position,
            "Points": 100.0
        }))
        .unwrap()
    }

    #[test]
    fn filter_keeps_only_matching_sub_event() {
        let bundled = vec![
            entry("1", "MS", 1),
            entry("2", "WS", 1),
            entry("3", "MS", 2),
            entry("4", "WS", 2),
        ];
        let filtered = filter_sub_event(bundled, "MS");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|e| e.sub_event_code == "MS"));
        assert_eq!(filtered[0].ranking_position, 1);
        assert_eq!(filtered[1].ranking_position, 2);
    }

    #[test]
    fn filter_of_unknown_sub_event_is_empty() {
        let bundled = vec![entry("1", "MS", 1)];
        assert!(filter_sub_event(bundled, "XD").is_empty());
    }
}
