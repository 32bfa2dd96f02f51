use log::{info, warn};
use serde_json::Value;

use crate::config::AppConfig;
use crate::domain::models::{PlayerIdentity, ProfileBundle, RosterRecord};
use crate::errors::EngineError;
use crate::fetchers::profile::fetch_profile_document;
use crate::fetchers::roster::fetch_roster;
use crate::http::BrowserClient;
use crate::query::{ensure_alphabetic, NameQuery, ProfileOptions, ProfileQuery};
use crate::services::resolver::PlayerResolver;

/// Assembles a player's profile bundle: base or extended player record,
/// ranking history and statistics.
pub struct ProfileAssembler<'a> {
    client: &'a BrowserClient,
    config: &'a AppConfig,
}

impl<'a> ProfileAssembler<'a> {
    pub fn new(client: &'a BrowserClient, config: &'a AppConfig) -> Self {
        Self { client, config }
    }

    pub async fn assemble(
        &self,
        query: &ProfileQuery,
        options: &ProfileOptions,
    ) -> Result<ProfileBundle, EngineError> {
        let ittf_id = self.establish_id(query).await?;
        let response = fetch_profile_document(self.client, self.config, &ittf_id).await?;

        // fetch_profile_document guarantees the player field is present.
        let mut player = response.player.unwrap_or(Value::Null);

        if options.include_extended_details {
            let roster = fetch_roster(self.client, self.config).await?;
            player = merge_extended(player, &roster, &ittf_id);
        }

        Ok(ProfileBundle {
            player,
            ranking: response.ranking,
            stats: response.stats,
        })
    }

    /// A name search must land on exactly one player before any profile
    /// URL is built; an ambiguous resolution is an explicit error, never
    /// a mis-query.
    async fn establish_id(&self, query: &ProfileQuery) -> Result<String, EngineError> {
        match query {
            ProfileQuery::IttfId(id) => {
                if *id <= 0 {
                    return Err(EngineError::InvalidId);
                }
                Ok(id.to_string())
            }
            ProfileQuery::FullName(name) => {
                ensure_alphabetic(name)?;
                let resolver = PlayerResolver::new(self.client, self.config);
                let matches = resolver
                    .resolve(&NameQuery::FullName(name.clone()))
                    .await?;
                let ittf_id = single_match(name, &matches)?;
                info!("Resolved \"{}\" to ittfId {}", name, ittf_id);
                Ok(ittf_id)
            }
        }
    }
}

/// Exactly one resolved identity yields an id; anything else is an
/// explicit `AmbiguousResult` (the resolver has already rejected the
/// zero-match case with its own guidance).
pub fn single_match(name: &str, matches: &[PlayerIdentity]) -> Result<String, EngineError> {
    match matches {
        [only] => Ok(only.ittf_id.clone()),
        _ => Err(EngineError::AmbiguousResult {
            name: name.to_string(),
            count: matches.len(),
        }),
    }
}

/// Swap the base player record for the extended roster record with the
/// same id (string compare, as the upstream mixes number and string
/// ids). Ranking and statistics are never touched.
pub fn merge_extended(base: Value, roster: &[RosterRecord], ittf_id: &str) -> Value {
    match roster.iter().find(|record| record.ittf_id == ittf_id) {
        Some(record) => serde_json::to_value(record).unwrap_or(base),
        None => {
            warn!("No roster record for ittfId {}, keeping base record", ittf_id);
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(id: &str, family_first: &str) -> PlayerIdentity {
        PlayerIdentity {
            ittf_id: id.to_string(),
            family_name_first: family_first.to_string(),
        }
    }

    fn roster() -> Vec<RosterRecord> {
        vec![serde_json::from_value(json!({
            "IttfId": "121404",
            "PlayerGivenName": "Zhendong",
            "PlayerFamilyName": "FAN",
            "PlayerFamilyNameFirst": "FAN Zhendong",
            "CountryCode": "CHN",
            "Handedness": "R",
            "CareerWins": 512
        }))
        .unwrap()]
    }

    #[test]
    fn merge_replaces_base_with_extended_record() {
        let base = json!({"IttfId": "121404", "Org": "CHN"});
        let merged = merge_extended(base, &roster(), "121404");
        assert_eq!(merged.get("Handedness"), Some(&json!("R")));
        assert_eq!(merged.get("CareerWins"), Some(&json!(512)));
        assert_eq!(merged.get("PlayerFamilyNameFirst"), Some(&json!("FAN Zhendong")));
    }

    #[test]
    fn merge_keeps_base_when_roster_lacks_id() {
        let base = json!({"IttfId": "999999", "Org": "???"});
        let merged = merge_extended(base.clone(), &roster(), "999999");
        assert_eq!(merged, base);
    }

    #[test]
    fn single_match_yields_the_id() {
        let matches = vec![identity("121404", "FAN Zhendong")];
        assert_eq!(single_match("FAN Zhendong", &matches).unwrap(), "121404");
    }

    #[test]
    fn multiple_matches_are_ambiguous() {
        let matches = vec![
            identity("132992", "LEBRUN Alexis"),
            identity("135923", "LEBRUN Felix"),
        ];
        let err = single_match("Lebrun", &matches).unwrap_err();
        assert!(matches!(
            err,
            EngineError::AmbiguousResult { count: 2, .. }
        ));
        assert!(err.to_string().contains("matched 2 players"));
    }

    #[tokio::test]
    async fn non_positive_id_is_rejected_before_any_fetch() {
        let config = AppConfig::new();
        let client = BrowserClient::new(&config.fetch).unwrap();
        let assembler = ProfileAssembler::new(&client, &config);

        let err = assembler
            .assemble(&ProfileQuery::IttfId(-50), &ProfileOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid ittfId! Must be a positive integer.");

        let err = assembler
            .assemble(&ProfileQuery::IttfId(0), &ProfileOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidId));
    }
}
