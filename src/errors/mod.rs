use thiserror::Error;

/// Which name field a roster lookup was keyed on.
///
/// Carried inside [`EngineError::NotFound`] so the guidance text can point
/// at the right example input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    FullName,
    GivenName,
    FamilyName,
}

/// Every failure the engine surfaces to callers.
///
/// Messages are part of the public contract: callers (and tests) match on
/// them, so they stay stable even when the underlying cause changes.
/// Nothing is retried internally; each error is raised to the immediate
/// caller as-is.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid {field}: {value}. Valid options are: {options}")]
    Validation {
        field: &'static str,
        value: String,
        options: &'static str,
    },

    #[error("topN must be a positive integer or \"all\"")]
    InvalidDepth,

    #[error("requestDelay must be a positive integer (milliseconds)")]
    InvalidDelay,

    #[error("Mixed gender ('X') requires a doubles category ('D' or 'DI').")]
    Combination,

    /// Stage-1 fetch or parse failure. The root cause is logged but not
    /// included here, keeping the message stable across transport errors,
    /// bad status codes and malformed documents.
    #[error("Unable to fetch rankings for the top 100 range.")]
    ApiConnection,

    /// Stage-2 request rejected by the upstream bot firewall: HTTP 401
    /// without the gateway's request-tracing header.
    #[error(
        "Upstream firewall blocked the request (HTTP {status}) while fetching ranks \
         {start_rank}-{end_rank}. Increase requestDelay and try again."
    )]
    FirewallBlocked {
        status: u16,
        start_rank: u32,
        end_rank: u32,
    },

    /// Stage-2 transport or decode failure; the underlying message is
    /// passed through verbatim.
    #[error("{0}")]
    Network(String),

    #[error("Only one of {0} should be provided")]
    MultipleSearchMethods(&'static str),

    #[error("One of {0} must be provided")]
    MissingSearchMethod(&'static str),

    #[error(
        "Input cannot contain any numbers or special characters, \
         only roman alphabet characters A-Z/a-z."
    )]
    InvalidCharacters,

    #[error("Invalid ittfId! Must be a positive integer.")]
    InvalidId,

    #[error("{}", not_found_guidance(*.0))]
    NotFound(SearchKind),

    #[error(
        "No player found for ittfId {0}. Ensure the id belongs to a ranked \
         ITTF player (e.g. 121404 for FAN Zhendong)."
    )]
    PlayerNotFound(String),

    #[error(
        "Full name \"{name}\" matched {count} players; search by ittfId instead."
    )]
    AmbiguousResult { name: String, count: usize },
}

fn not_found_guidance(kind: SearchKind) -> &'static str {
    match kind {
        SearchKind::FullName => {
            "Cannot find player's full name in the database. Ensure that family name \
             comes first, followed by given name (e.g. \"ARUNA Quadri\", and not \
             \"QUADRI Aruna\")"
        }
        SearchKind::GivenName => {
            "Cannot find given name in the database. Ensure that the spelling is \
             correct and that there is a ranked ITTF player with this given name \
             (e.g. \"Hugo\", for Hugo Calderano, Hugo Hanashiro, etc.)"
        }
        SearchKind::FamilyName => {
            "Cannot find family name in the database. Ensure that the spelling is \
             correct and that there is a ranked ITTF player with this family name \
             (e.g. \"Lebrun\", for Alexis Lebrun, Felix Lebrun, etc.)"
        }
    }
}
