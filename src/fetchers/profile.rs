use log::info;

use crate::config::AppConfig;
use crate::domain::models::ProfileResponse;
use crate::errors::EngineError;
use crate::http::BrowserClient;

/// Fetches the raw profile document for one player id.
///
/// An id the upstream does not know still answers 200, just without a
/// `player` field; that case becomes `PlayerNotFound` here so callers
/// never see a half-empty bundle.
pub async fn fetch_profile_document(
    client: &BrowserClient,
    config: &AppConfig,
    ittf_id: &str,
) -> Result<ProfileResponse, EngineError> {
    let url = format!("{}/{}", config.endpoints.profile_base_url, ittf_id);
    info!("Fetching profile for ittfId {}", ittf_id);

    let response = client
        .get(&url, config.browser_headers())
        .await
        .map_err(|e| EngineError::Network(e.to_string()))?
        .error_for_status()
        .map_err(|e| EngineError::Network(e.to_string()))?;

    let profile = response
        .json::<ProfileResponse>()
        .await
        .map_err(|e| EngineError::Network(e.to_string()))?;

    if profile.player.is_none() {
        return Err(EngineError::PlayerNotFound(ittf_id.to_string()));
    }
    Ok(profile)
}
