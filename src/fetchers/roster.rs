use log::info;

use crate::config::AppConfig;
use crate::domain::models::{RosterEnvelope, RosterRecord};
use crate::errors::EngineError;
use crate::http::BrowserClient;

/// Downloads the complete roster snapshot.
///
/// Deliberately uncached: every resolution re-fetches the dump so the
/// engine never serves a stale identity. Transport failures pass the
/// underlying message through.
pub async fn fetch_roster(
    client: &BrowserClient,
    config: &AppConfig,
) -> Result<Vec<RosterRecord>, EngineError> {
    let url = format!("{}?limit=100000", config.endpoints.roster_url);
    info!("Fetching full roster snapshot");

    let response = client
        .get(&url, config.browser_headers())
        .await
        .map_err(|e| EngineError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| EngineError::Network(e.to_string()))?;

    let envelope = response
        .json::<RosterEnvelope>()
        .await
        .map_err(|e| EngineError::Network(e.to_string()))?;

    info!("Roster snapshot holds {} players", envelope.result.len());
    Ok(envelope.result)
}
