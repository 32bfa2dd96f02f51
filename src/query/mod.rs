//! Query parameter normalization and validation.
//!
//! All validation happens here, before any network call. Raw string
//! parameters are case-folded once and checked against closed enums;
//! mutually-exclusive search fields are tagged variants so exclusivity
//! holds by construction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::EngineError;

/// Competition type. Youth lumps U15/U18/U21 together upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingType {
    Youth,
    Senior,
}

impl RankingType {
    pub const OPTIONS: &'static str = "YOU, SEN";

    pub fn code(self) -> &'static str {
        match self {
            Self::Youth => "YOU",
            Self::Senior => "SEN",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "YOU" => Some(Self::Youth),
            "SEN" => Some(Self::Senior),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Mixed,
}

impl Gender {
    pub const OPTIONS: &'static str = "M, W, X";

    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "W",
            Self::Mixed => "X",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "M" => Some(Self::Male),
            "W" => Some(Self::Female),
            "X" => Some(Self::Mixed),
            _ => None,
        }
    }
}

/// Ranking category: singles, doubles ranked as pairs, doubles ranked
/// per individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Singles,
    DoublesPairs,
    DoublesIndividuals,
}

impl Category {
    pub const OPTIONS: &'static str = "S, D, DI";

    pub fn code(self) -> &'static str {
        match self {
            Self::Singles => "S",
            Self::DoublesPairs => "D",
            Self::DoublesIndividuals => "DI",
        }
    }

    /// Name used in the CDN document filename.
    pub fn doc_name(self) -> &'static str {
        match self {
            Self::Singles => "SINGLES",
            Self::DoublesPairs => "DOUBLES_PAIRS",
            Self::DoublesIndividuals => "DOUBLES_INDIVIDUALS",
        }
    }

    pub fn is_doubles(self) -> bool {
        !matches!(self, Self::Singles)
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "S" => Some(Self::Singles),
            "D" => Some(Self::DoublesPairs),
            "DI" => Some(Self::DoublesIndividuals),
            _ => None,
        }
    }
}

/// How deep a ranking fetch should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    All,
    Top(u32),
}

impl Depth {
    /// Parse `"all"` or a positive integer.
    pub fn parse(raw: &str) -> Result<Self, EngineError> {
        if raw == "all" {
            return Ok(Self::All);
        }
        match raw.parse::<u32>() {
            Ok(n) if n > 0 => Ok(Self::Top(n)),
            _ => Err(EngineError::InvalidDepth),
        }
    }

    /// Ranks beyond 100 are only served by the paginated gateway.
    pub fn needs_remainder(self) -> bool {
        match self {
            Self::All => true,
            Self::Top(n) => n > 100,
        }
    }
}

/// A fully validated ranking request.
#[derive(Debug, Clone, Copy)]
pub struct RankingQuery {
    pub ranking_type: RankingType,
    pub gender: Gender,
    pub category: Category,
    pub depth: Depth,
    pub request_delay_ms: u64,
}

impl RankingQuery {
    /// Validate raw parameters in a fixed order: type, gender, category,
    /// topN, requestDelay, then the cross-field gender/category check.
    pub fn parse(
        raw_type: &str,
        raw_gender: &str,
        raw_category: &str,
        raw_top_n: &str,
        request_delay_ms: i64,
    ) -> Result<Self, EngineError> {
        let ranking_type = RankingType::from_token(&raw_type.to_uppercase())
            .ok_or_else(|| EngineError::Validation {
                field: "type",
                value: raw_type.to_string(),
                options: RankingType::OPTIONS,
            })?;

        let gender = Gender::from_token(&raw_gender.to_uppercase()).ok_or_else(|| {
            EngineError::Validation {
                field: "gender",
                value: raw_gender.to_string(),
                options: Gender::OPTIONS,
            }
        })?;

        let category = Category::from_token(&raw_category.to_uppercase()).ok_or_else(|| {
            EngineError::Validation {
                field: "category",
                value: raw_category.to_string(),
                options: Category::OPTIONS,
            }
        })?;

        let depth = Depth::parse(raw_top_n)?;

        if request_delay_ms <= 0 {
            return Err(EngineError::InvalidDelay);
        }

        if gender == Gender::Mixed && !category.is_doubles() {
            return Err(EngineError::Combination);
        }

        Ok(Self {
            ranking_type,
            gender,
            category,
            depth,
            request_delay_ms: request_delay_ms as u64,
        })
    }

    /// Sub-event code used both in document filtering and as a gateway
    /// parameter, e.g. `MS`, `WD`, `XDI`.
    pub fn sub_event_code(&self) -> String {
        format!("{}{}", self.gender.code(), self.category.code())
    }

    /// CDN document name for this query, e.g. `SEN_SINGLES.json`.
    pub fn doc_name(&self) -> String {
        format!(
            "{}_{}.json",
            self.ranking_type.code(),
            self.category.doc_name()
        )
    }
}

/// Exactly one way to look a player up by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameQuery {
    FullName(String),
    GivenName(String),
    FamilyName(String),
}

impl NameQuery {
    /// Build from optional CLI-style fields, enforcing mutual exclusivity.
    pub fn from_options(
        full_name: Option<String>,
        given_name: Option<String>,
        family_name: Option<String>,
    ) -> Result<Self, EngineError> {
        let supplied = [&full_name, &given_name, &family_name]
            .iter()
            .filter(|f| f.is_some())
            .count();
        if supplied > 1 {
            return Err(EngineError::MultipleSearchMethods(
                "playerFullName, playerGivenName, or playerFamilyName",
            ));
        }
        full_name
            .map(Self::FullName)
            .or(given_name.map(Self::GivenName))
            .or(family_name.map(Self::FamilyName))
            .ok_or(EngineError::MissingSearchMethod(
                "playerFullName, playerGivenName, or playerFamilyName",
            ))
    }

    pub fn payload(&self) -> &str {
        match self {
            Self::FullName(s) | Self::GivenName(s) | Self::FamilyName(s) => s,
        }
    }
}

/// Exactly one way to select a player profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileQuery {
    FullName(String),
    IttfId(i64),
}

impl ProfileQuery {
    pub fn from_options(
        full_name: Option<String>,
        ittf_id: Option<i64>,
    ) -> Result<Self, EngineError> {
        match (full_name, ittf_id) {
            (Some(_), Some(_)) => Err(EngineError::MultipleSearchMethods(
                "playerFullName or ittfId",
            )),
            (Some(name), None) => Ok(Self::FullName(name)),
            (None, Some(id)) => Ok(Self::IttfId(id)),
            (None, None) => Err(EngineError::MissingSearchMethod(
                "playerFullName or ittfId",
            )),
        }
    }
}

/// Options for profile assembly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileOptions {
    pub include_extended_details: bool,
}

static ALPHABETIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+$").unwrap());

/// Latin letters and spaces only; everything else is rejected before any
/// roster fetch.
pub fn ensure_alphabetic(input: &str) -> Result<(), EngineError> {
    if ALPHABETIC.is_match(input) {
        Ok(())
    } else {
        Err(EngineError::InvalidCharacters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(t: &str, g: &str, c: &str, top: &str, delay: i64) -> Result<RankingQuery, EngineError> {
        RankingQuery::parse(t, g, c, top, delay)
    }

    #[test]
    fn accepts_lowercase_tokens() {
        let q = parse("sen", "m", "s", "100", 2000).unwrap();
        assert_eq!(q.ranking_type, RankingType::Senior);
        assert_eq!(q.gender, Gender::Male);
        assert_eq!(q.category, Category::Singles);
    }

    #[test]
    fn rejects_unknown_type_with_options_list() {
        let err = parse("S", "M", "S", "100", 2000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid type: S. Valid options are: YOU, SEN"
        );
    }

    #[test]
    fn rejects_unknown_gender_and_category() {
        let err = parse("SEN", "Q", "S", "100", 2000).unwrap_err();
        assert_eq!(err.to_string(), "Invalid gender: Q. Valid options are: M, W, X");
        let err = parse("SEN", "M", "T", "100", 2000).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid category: T. Valid options are: S, D, DI"
        );
    }

    #[test]
    fn validation_order_reports_type_before_gender() {
        // Both type and gender are bad; type wins.
        let err = parse("XX", "Q", "S", "100", 2000).unwrap_err();
        assert!(err.to_string().starts_with("Invalid type"));
    }

    #[test]
    fn depth_accepts_all_and_positive_integers() {
        assert_eq!(Depth::parse("all").unwrap(), Depth::All);
        assert_eq!(Depth::parse("250").unwrap(), Depth::Top(250));
        assert!(Depth::parse("0").is_err());
        assert!(Depth::parse("-5").is_err());
        assert!(Depth::parse("ten").is_err());
        assert!(Depth::parse("ALL").is_err());
    }

    #[test]
    fn rejects_non_positive_delay() {
        let err = parse("SEN", "M", "S", "100", 0).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDelay));
    }

    #[test]
    fn mixed_gender_requires_doubles() {
        let err = parse("SEN", "X", "S", "100", 2000).unwrap_err();
        assert!(matches!(err, EngineError::Combination));
        assert!(parse("SEN", "X", "D", "100", 2000).is_ok());
        assert!(parse("SEN", "X", "DI", "100", 2000).is_ok());
    }

    #[test]
    fn sub_event_and_doc_names() {
        let q = parse("SEN", "M", "S", "100", 2000).unwrap();
        assert_eq!(q.sub_event_code(), "MS");
        assert_eq!(q.doc_name(), "SEN_SINGLES.json");

        let q = parse("YOU", "X", "DI", "100", 2000).unwrap();
        assert_eq!(q.sub_event_code(), "XDI");
        assert_eq!(q.doc_name(), "YOU_DOUBLES_INDIVIDUALS.json");
    }

    #[test]
    fn remainder_needed_only_beyond_100() {
        assert!(!Depth::Top(100).needs_remainder());
        assert!(Depth::Top(101).needs_remainder());
        assert!(Depth::All.needs_remainder());
    }

    #[test]
    fn name_query_rejects_multiple_fields() {
        let err = NameQuery::from_options(
            Some("FAN Zhendong".into()),
            Some("Zhendong".into()),
            None,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only one of playerFullName, playerGivenName, or playerFamilyName should be provided"
        );
    }

    #[test]
    fn name_query_requires_at_least_one_field() {
        let err = NameQuery::from_options(None, None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "One of playerFullName, playerGivenName, or playerFamilyName must be provided"
        );
    }

    #[test]
    fn profile_query_requires_at_least_one_field() {
        let err = ProfileQuery::from_options(None, None).unwrap_err();
        assert_eq!(err.to_string(), "One of playerFullName or ittfId must be provided");
    }

    #[test]
    fn profile_query_rejects_multiple_fields() {
        let err = ProfileQuery::from_options(Some("FAN Zhendong".into()), Some(121404)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only one of playerFullName or ittfId should be provided"
        );
    }

    #[test]
    fn alphabetic_check_allows_letters_and_spaces_only() {
        assert!(ensure_alphabetic("FAN Zhendong").is_ok());
        assert!(ensure_alphabetic("Lebrun").is_ok());
        assert!(ensure_alphabetic("Fan2").is_err());
        assert!(ensure_alphabetic("O'Neill").is_err());
        assert!(ensure_alphabetic("").is_err());
    }
}
