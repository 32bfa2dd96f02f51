use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of a ranking list. Wire names are the gateway's PascalCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankEntry {
    #[serde(rename = "IttfId")]
    pub ittf_id: String,
    #[serde(rename = "PlayerName")]
    pub display_name: String,
    #[serde(rename = "CountryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "SubEventCode")]
    pub sub_event_code: String,
    #[serde(rename = "RankingPosition")]
    pub ranking_position: u32,
    #[serde(rename = "PreviousRank", default)]
    pub previous_rank: Option<u32>,
    #[serde(rename = "Points", default)]
    pub points: f64,
    #[serde(rename = "PublishDate", default)]
    pub publish_date: Option<String>,
}

/// Versioned envelope shared by the ranking document, the paginated
/// gateway and the roster dump.
#[derive(Debug, Deserialize)]
pub struct RankingEnvelope {
    #[serde(rename = "Result", default)]
    pub result: Vec<RankEntry>,
}

/// A resolved (possibly one of several) identity match.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlayerIdentity {
    #[serde(rename = "ittfId")]
    pub ittf_id: String,
    #[serde(rename = "familyNameFirst")]
    pub family_name_first: String,
}

/// One record of the full roster snapshot. Base identity fields are
/// typed; extended attributes (handedness, equipment, career stats) vary
/// by player and are kept as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRecord {
    #[serde(rename = "IttfId")]
    pub ittf_id: String,
    #[serde(rename = "PlayerGivenName", default)]
    pub given_name: String,
    #[serde(rename = "PlayerFamilyName", default)]
    pub family_name: String,
    #[serde(rename = "PlayerFamilyNameFirst", default)]
    pub family_name_first: String,
    #[serde(rename = "CountryCode", default)]
    pub country_code: Option<String>,
    #[serde(rename = "Org", default)]
    pub organization_code: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Age", default)]
    pub age: Option<Value>,
    #[serde(rename = "Dob", default)]
    pub dob: Option<String>,
    #[serde(flatten)]
    pub extended: serde_json::Map<String, Value>,
}

impl RosterRecord {
    pub fn identity(&self) -> PlayerIdentity {
        PlayerIdentity {
            ittf_id: self.ittf_id.clone(),
            family_name_first: self.family_name_first.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RosterEnvelope {
    #[serde(rename = "Result", default)]
    pub result: Vec<RosterRecord>,
}

/// Per-year ranking history of a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RankingHistory {
    #[serde(rename = "LastPos", default)]
    pub last_pos: Vec<Value>,
    #[serde(rename = "BestPos", default)]
    pub best_pos: Vec<Value>,
}

/// Match statistics of a profile, split by discipline. The per-year
/// breakdown is passed through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total: Value,
    #[serde(default)]
    pub indiv: Value,
    #[serde(default)]
    pub doubles: Value,
}

/// Raw profile endpoint response. `player` stays optional here so the
/// assembler can distinguish "unknown id" from a real record.
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub player: Option<Value>,
    #[serde(default)]
    pub ranking: RankingHistory,
    #[serde(default)]
    pub stats: Statistics,
}

/// Assembled profile: base or extended player record plus history and
/// statistics.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileBundle {
    pub player: Value,
    pub ranking: RankingHistory,
    pub stats: Statistics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rank_entry_parses_gateway_shape() {
        let entry: RankEntry = serde_json::from_value(json!({
            "IttfId": "121404",
            "PlayerName": "FAN Zhendong",
            "CountryCode": "CHN",
            "SubEventCode": "MS",
            "RankingPosition": 1,
            "PreviousRank": 2,
            "Points": 8475.0,
            "PublishDate": "2026-08-25"
        }))
        .unwrap();
        assert_eq!(entry.ittf_id, "121404");
        assert_eq!(entry.ranking_position, 1);
        assert_eq!(entry.previous_rank, Some(2));
    }

    #[test]
    fn roster_record_keeps_extended_attributes() {
        let record: RosterRecord = serde_json::from_value(json!({
            "IttfId": "132992",
            "PlayerGivenName": "Alexis",
            "PlayerFamilyName": "LEBRUN",
            "PlayerFamilyNameFirst": "LEBRUN Alexis",
            "CountryCode": "FRA",
            "Handedness": "R",
            "Racket": {"blade": "custom"}
        }))
        .unwrap();
        assert_eq!(record.extended.get("Handedness"), Some(&json!("R")));
        assert!(record.extended.contains_key("Racket"));
        assert_eq!(record.identity().family_name_first, "LEBRUN Alexis");
    }

    #[test]
    fn envelope_defaults_to_empty_result() {
        let env: RankingEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(env.result.is_empty());
    }

    #[test]
    fn profile_response_distinguishes_missing_player() {
        let resp: ProfileResponse = serde_json::from_value(json!({})).unwrap();
        assert!(resp.player.is_none());

        let resp: ProfileResponse = serde_json::from_value(json!({
            "player": {"IttfId": "121404"},
            "ranking": {"LastPos": [], "BestPos": [{"Year": 2024, "Pos": 1}]}
        }))
        .unwrap();
        assert!(resp.player.is_some());
        assert_eq!(resp.ranking.best_pos.len(), 1);
    }
}
