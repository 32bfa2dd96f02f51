use log::info;

use crate::config::AppConfig;
use crate::domain::models::RankEntry;
use crate::errors::EngineError;
use crate::fetchers::remainder::RemainderFetcher;
use crate::fetchers::top100::Top100Fetcher;
use crate::http::BrowserClient;
use crate::query::{Depth, RankingQuery};

/// Drives both ranking stages and merges their output.
pub struct RankingsService<'a> {
    top100: Top100Fetcher<'a>,
    remainder: RemainderFetcher<'a>,
}

impl<'a> RankingsService<'a> {
    pub fn new(client: &'a BrowserClient, config: &'a AppConfig) -> Self {
        Self {
            top100: Top100Fetcher::new(client, config),
            remainder: RemainderFetcher::new(client, config),
        }
    }

    pub async fn fetch(&self, query: &RankingQuery) -> Result<Vec<RankEntry>, EngineError> {
        let top = self.top100.fetch(query).await?;

        // Fast path: anything within the first hundred never touches the
        // rate-limited gateway.
        if !query.depth.needs_remainder() {
            return Ok(combine(top, Vec::new(), query.depth));
        }

        let rest = self.remainder.fetch(query).await?;
        let combined = combine(top, rest, query.depth);
        info!("Aggregated ranking list of {} entries", combined.len());
        Ok(combined)
    }
}

/// Concatenate stage-1 and stage-2 output and apply the depth cutoff.
/// Truncation is idempotent: applying it twice changes nothing.
pub fn combine(
    top100: Vec<RankEntry>,
    remainder: Vec<RankEntry>,
    depth: Depth,
) -> Vec<RankEntry> {
    let mut combined = top100;
    combined.extend(remainder);
    if let Depth::Top(n) = depth {
        combined.truncate(n as usize);
    }
    combined
}
