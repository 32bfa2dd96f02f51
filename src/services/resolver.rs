use log::info;

use crate::config::AppConfig;
use crate::domain::models::{PlayerIdentity, RosterRecord};
use crate::errors::{EngineError, SearchKind};
use crate::fetchers::roster::fetch_roster;
use crate::http::BrowserClient;
use crate::query::{ensure_alphabetic, NameQuery};

/// Resolves a name query to player identities against a fresh roster
/// snapshot. Matching is exact equality after canonicalization, so
/// `"leBruN"` and `"LEBRUN"` resolve identically.
pub struct PlayerResolver<'a> {
    client: &'a BrowserClient,
    config: &'a AppConfig,
}

impl<'a> PlayerResolver<'a> {
    pub fn new(client: &'a BrowserClient, config: &'a AppConfig) -> Self {
        Self { client, config }
    }

    /// Zero matches is an error (with guidance); one or many are returned
    /// as-is. Callers needing a single id must check cardinality.
    pub async fn resolve(&self, query: &NameQuery) -> Result<Vec<PlayerIdentity>, EngineError> {
        ensure_alphabetic(query.payload())?;

        let roster = fetch_roster(self.client, self.config).await?;
        let matches = match_roster(&roster, query);
        if matches.is_empty() {
            return Err(EngineError::NotFound(search_kind(query)));
        }
        info!(
            "Resolved \"{}\" to {} player(s)",
            query.payload(),
            matches.len()
        );
        Ok(matches)
    }
}

fn search_kind(query: &NameQuery) -> SearchKind {
    match query {
        NameQuery::FullName(_) => SearchKind::FullName,
        NameQuery::GivenName(_) => SearchKind::GivenName,
        NameQuery::FamilyName(_) => SearchKind::FamilyName,
    }
}

/// Apply the query's matching rule across the roster.
pub fn match_roster(records: &[RosterRecord], query: &NameQuery) -> Vec<PlayerIdentity> {
    match query {
        NameQuery::FullName(raw) => {
            let wanted = canonical_full_name(raw);
            records
                .iter()
                .filter(|r| r.family_name_first == wanted)
                .map(RosterRecord::identity)
                .collect()
        }
        NameQuery::GivenName(raw) => {
            let wanted = capitalize_first(raw);
            records
                .iter()
                .filter(|r| r.given_name == wanted)
                .map(RosterRecord::identity)
                .collect()
        }
        NameQuery::FamilyName(raw) => {
            let wanted = raw.to_uppercase();
            records
                .iter()
                .filter(|r| r.family_name == wanted)
                .map(RosterRecord::identity)
                .collect()
        }
    }
}

/// Canonical family-name-first form: first whitespace token upper-cased
/// as the family name, the rest capitalized as the given name.
/// `"fan zhendong"` becomes `"FAN Zhendong"`.
pub fn canonical_full_name(raw: &str) -> String {
    let mut tokens = raw.split_whitespace();
    let family = match tokens.next() {
        Some(t) => t.to_uppercase(),
        None => return String::new(),
    };
    let given = capitalize_first(&tokens.collect::<Vec<_>>().join(" "));
    if given.is_empty() {
        family
    } else {
        format!("{} {}", family, given)
    }
}

/// First letter upper-cased, everything after lower-cased.
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, given: &str, family: &str) -> RosterRecord {
        serde_json::from_value(json!({
            "IttfId": id,
            "PlayerGivenName": given,
            "PlayerFamilyName": family,
            "PlayerFamilyNameFirst": format!("{} {}", family, given),
        }))
        .unwrap()
    }

    fn roster() -> Vec<RosterRecord> {
        vec![
            record("121404", "Zhendong", "FAN"),
            record("132992", "Alexis", "LEBRUN"),
            record("135923", "Felix", "LEBRUN"),
            record("117821", "Hugo", "CALDERANO"),
            record("202345", "Hugo", "HANASHIRO"),
        ]
    }

    #[test]
    fn full_name_canonicalization() {
        assert_eq!(canonical_full_name("FAN Zhendong"), "FAN Zhendong");
        assert_eq!(canonical_full_name("fan ZHENDONG"), "FAN Zhendong");
        assert_eq!(canonical_full_name("lebrun alexis"), "LEBRUN Alexis");
        assert_eq!(canonical_full_name("FAN"), "FAN");
        assert_eq!(canonical_full_name(""), "");
    }

    #[test]
    fn full_name_matches_exactly_one() {
        let matches = match_roster(&roster(), &NameQuery::FullName("fan zhendong".into()));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].ittf_id, "121404");
    }

    #[test]
    fn family_name_match_is_case_insensitive() {
        let upper = match_roster(&roster(), &NameQuery::FamilyName("LEBRUN".into()));
        let mixed = match_roster(&roster(), &NameQuery::FamilyName("leBruN".into()));
        assert_eq!(upper, mixed);
        assert!(upper.len() > 1);
    }

    #[test]
    fn given_name_returns_every_holder() {
        let matches = match_roster(&roster(), &NameQuery::GivenName("hugo".into()));
        assert_eq!(matches.len(), 2);
    }

    #[test]
    fn no_match_yields_empty() {
        let matches = match_roster(&roster(), &NameQuery::FamilyName("WALDNER".into()));
        assert!(matches.is_empty());
    }
}
