use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};

/// Upstream endpoints. The document store serves the CDN-cached top-100
/// snapshots; the gateway serves the paginated remainder and the roster
/// dump; profiles come from the public ranking site.
pub struct EndpointSettings {
    pub doc_base_url: &'static str,
    pub api_base_url: &'static str,
    pub roster_url: &'static str,
    pub profile_base_url: &'static str,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            doc_base_url: "https://wttwebcmsprod.azureedge.net/rankings",
            api_base_url: "https://wttcmsapigateway-new.azure-api.net/ttu/Rankings",
            roster_url: "https://wttcmsapigateway-new.azure-api.net/ttu/Players/GetPlayers",
            profile_base_url: "https://ranking.ittf.com/public/s/player/profile",
        }
    }
}

/// Request shaping: how the client presents itself to the upstream.
pub struct FetchSettings {
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub default_delay_ms: u64,
    pub site_origin: &'static str,
    pub site_referer: &'static str,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            // Matches the Chrome build whose traffic the static keys were
            // captured from.
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
            timeout_secs: 30,
            default_delay_ms: 2000,
            site_origin: "https://www.worldtabletennis.com",
            site_referer: "https://www.worldtabletennis.com/",
        }
    }
}

/// Static subscription keys replayed from captured site traffic. The
/// gateway requires both on every paginated request.
pub struct ApiKeys {
    pub primary_header: &'static str,
    pub primary_value: &'static str,
    pub secondary_header: &'static str,
    pub secondary_value: &'static str,
}

impl Default for ApiKeys {
    fn default() -> Self {
        Self {
            primary_header: "ocp-apim-subscription-key",
            primary_value: "3b8fecbffa0d4b0b9ccf3b1f5b9a9a68",
            secondary_header: "subscription-key",
            secondary_value: "9b4b76b7a2d4468db3a5d82f74e9a2cf",
        }
    }
}

/// Response header the gateway attaches to every request it actually
/// processed. A 401 without it means the bot firewall dropped the request
/// before it reached the API.
pub const TRACING_HEADER: &str = "apim-request-id";

pub struct AppConfig {
    pub endpoints: EndpointSettings,
    pub fetch: FetchSettings,
    pub keys: ApiKeys,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            endpoints: EndpointSettings::default(),
            fetch: FetchSettings::default(),
            keys: ApiKeys::default(),
        }
    }

    /// Headers for the credential-less document fetch: plain browser
    /// imitation.
    pub fn browser_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ORIGIN, HeaderValue::from_static(self.fetch.site_origin));
        headers.insert(REFERER, HeaderValue::from_static(self.fetch.site_referer));
        headers
    }

    /// Headers for the paginated gateway: browser imitation plus both
    /// static subscription keys.
    pub fn gateway_headers(&self) -> HeaderMap {
        let mut headers = self.browser_headers();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
        headers.insert(
            HeaderName::from_static(self.keys.primary_header),
            HeaderValue::from_static(self.keys.primary_value),
        );
        headers.insert(
            HeaderName::from_static(self.keys.secondary_header),
            HeaderValue::from_static(self.keys.secondary_value),
        );
        headers
    }
}
