use chrono::Utc;
use log::{debug, info};
use reqwest::StatusCode;

use crate::config::{AppConfig, TRACING_HEADER};
use crate::domain::models::{RankEntry, RankingEnvelope};
use crate::errors::EngineError;
use crate::http::BrowserClient;
use crate::query::{Category, Depth, RankingQuery};
use crate::rate_limiter::WindowThrottle;

/// Ranks per gateway request. Also the boundary between stage 1 and
/// stage 2: the paginated fetch always starts at `WINDOW_SIZE + 1`.
pub const WINDOW_SIZE: u32 = 100;

/// Stage-2 fetcher: sequential, throttled windows of 100 against the
/// rate-limited gateway, starting at rank 101.
///
/// The gateway sits behind a bot firewall whose tolerance is rate-based,
/// so windows are issued strictly one at a time with a sleep in between.
/// A 401 without the gateway's tracing header is the firewall talking;
/// everything else transport-shaped is passed through verbatim.
pub struct RemainderFetcher<'a> {
    client: &'a BrowserClient,
    config: &'a AppConfig,
}

impl<'a> RemainderFetcher<'a> {
    pub fn new(client: &'a BrowserClient, config: &'a AppConfig) -> Self {
        Self { client, config }
    }

    pub async fn fetch(&self, query: &RankingQuery) -> Result<Vec<RankEntry>, EngineError> {
        let mut throttle = WindowThrottle::new(query.request_delay_ms);
        let mut collected: Vec<RankEntry> = Vec::new();
        let mut start_rank = WINDOW_SIZE + 1;

        loop {
            throttle.wait().await;
            let end_rank = start_rank + WINDOW_SIZE - 1;

            let window = self.fetch_window(query, start_rank, end_rank).await?;
            if window.is_empty() {
                // Ranking exhausted; not an error.
                debug!("Window {}-{} empty, ranking exhausted", start_rank, end_rank);
                break;
            }

            collected.extend(window);
            if target_reached(query.depth, collected.len()) {
                break;
            }
            start_rank += WINDOW_SIZE;
        }

        info!("Paginated remainder collected {} entries", collected.len());
        Ok(collected)
    }

    async fn fetch_window(
        &self,
        query: &RankingQuery,
        start_rank: u32,
        end_rank: u32,
    ) -> Result<Vec<RankEntry>, EngineError> {
        let url = self.build_url(query, start_rank, end_rank);
        debug!("Fetching ranks {}-{}: {}", start_rank, end_rank, url);

        let response = self
            .client
            .get(&url, self.config.gateway_headers())
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;

        let has_trace = response.headers().contains_key(TRACING_HEADER);
        if is_firewall_block(response.status(), has_trace) {
            return Err(EngineError::FirewallBlocked {
                status: response.status().as_u16(),
                start_rank,
                end_rank,
            });
        }

        let response = response
            .error_for_status()
            .map_err(|e| EngineError::Network(e.to_string()))?;

        let envelope = response
            .json::<RankingEnvelope>()
            .await
            .map_err(|e| EngineError::Network(e.to_string()))?;
        Ok(envelope.result)
    }

    fn build_url(&self, query: &RankingQuery, start_rank: u32, end_rank: u32) -> String {
        format!(
            "{}/{}?CategoryCode={}&SubEventCode={}&StartRank={}&EndRank={}&q={}",
            self.config.endpoints.api_base_url,
            endpoint_name(query.category),
            query.ranking_type.code(),
            query.sub_event_code(),
            start_rank,
            end_rank,
            Utc::now().timestamp_millis()
        )
    }
}

/// Pairs rankings live on their own gateway route; singles and
/// per-individual doubles share the other.
pub fn endpoint_name(category: Category) -> &'static str {
    match category {
        Category::DoublesPairs => "GetRankingPairs",
        Category::Singles | Category::DoublesIndividuals => "GetRankingIndividuals",
    }
}

/// Firewall signature: rejected for authorization without the gateway
/// ever seeing the request.
pub fn is_firewall_block(status: StatusCode, has_tracing_header: bool) -> bool {
    status == StatusCode::UNAUTHORIZED && !has_tracing_header
}

/// Stage 2 only owes `target - WINDOW_SIZE` entries; stage 1 covers the
/// rest. `All` never stops early.
pub fn target_reached(depth: Depth, collected: usize) -> bool {
    match depth {
        Depth::All => false,
        Depth::Top(n) => collected as u32 >= n.saturating_sub(WINDOW_SIZE),
    }
}
