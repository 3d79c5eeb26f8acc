//! Fetch settings and the endpoint table.
//!
//! Settings are built once and handed to a [`Session`](crate::Session);
//! every request of a run then uses the same timeout, headers and hosts.

use std::collections::BTreeMap;
use std::time::Duration;

use url::Url;

use crate::error::HttpError;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Browser user agent the self-serve portal expects.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:10.0.7) Gecko/20100101 Firefox/10.0.7 Iceweasel/10.0.7";

// ============================================================================
// Endpoints
// ============================================================================

/// Identity-provider and carrier URLs.
///
/// Only the two hosts are configurable; paths are fixed by the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    identity_host: String,
    api_host: String,
}

impl Endpoints {
    /// Production identity-provider host.
    pub const DEFAULT_IDENTITY_HOST: &'static str = "https://rogers-fido.janraincapture.com";

    /// Production carrier self-serve API host.
    pub const DEFAULT_API_HOST: &'static str = "https://www.fido.ca/pages/api/selfserve";

    /// Creates an endpoint table for custom hosts.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::InvalidUrl` if either host is not an absolute
    /// http(s) URL.
    pub fn new(identity_host: &str, api_host: &str) -> Result<Self, HttpError> {
        Ok(Self {
            identity_host: normalize_host(identity_host)?,
            api_host: normalize_host(api_host)?,
        })
    }

    /// Identity-provider host, without trailing slash.
    pub fn identity_host(&self) -> &str {
        &self.identity_host
    }

    /// Carrier API host, without trailing slash.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }

    /// Form sign-in endpoint.
    pub fn sign_in(&self) -> String {
        format!("{}/widget/traditional_signin.jsonp", self.identity_host)
    }

    /// Token ("get result") endpoint.
    pub fn token(&self) -> String {
        format!("{}/widget/get_result.jsonp", self.identity_host)
    }

    /// Account number endpoint.
    pub fn account(&self) -> String {
        format!("{}/v3/login", self.api_host)
    }

    /// Phone number listing endpoint.
    pub fn numbers(&self) -> String {
        format!("{}/v2/accountOverview", self.api_host)
    }

    /// Account balance endpoint (same overview resource as the listing).
    pub fn balance(&self) -> String {
        format!("{}/v2/accountOverview", self.api_host)
    }

    /// Loyalty-currency balance endpoint.
    pub fn loyalty(&self) -> String {
        format!("{}/v1/wireless/rewards/basicinfo", self.api_host)
    }

    /// Usage endpoint.
    pub fn usage(&self) -> String {
        format!("{}/v1/postpaid/dashboard/usage", self.api_host)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            identity_host: Self::DEFAULT_IDENTITY_HOST.to_string(),
            api_host: Self::DEFAULT_API_HOST.to_string(),
        }
    }
}

fn normalize_host(host: &str) -> Result<String, HttpError> {
    let parsed = Url::parse(host).map_err(|e| HttpError::InvalidUrl(format!("{host}: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(HttpError::InvalidUrl(format!("{host}: not an http(s) URL")));
    }
    Ok(host.trim_end_matches('/').to_string())
}

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Timeout applied to each individual request.
    pub timeout: Duration,
    /// Headers sent with every request.
    pub headers: BTreeMap<String, String>,
    /// Where requests go.
    pub endpoints: Endpoints,
}

impl Default for FetchSettings {
    fn default() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), DEFAULT_USER_AGENT.to_string());

        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            headers,
            endpoints: Endpoints::default(),
        }
    }
}

impl FetchSettings {
    /// Creates settings with a custom timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds or replaces a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Replaces the User-Agent header.
    pub fn with_user_agent(self, user_agent: impl Into<String>) -> Self {
        self.with_header("User-Agent", user_agent)
    }

    /// Creates settings pointing at other hosts.
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FetchSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(15));
        assert_eq!(
            settings.headers.get("User-Agent").map(String::as_str),
            Some(DEFAULT_USER_AGENT)
        );
    }

    #[test]
    fn test_settings_builder() {
        let settings = FetchSettings::default()
            .with_timeout(Duration::from_secs(60))
            .with_header("Accept-Language", "en-US");

        assert_eq!(settings.timeout, Duration::from_secs(60));
        assert_eq!(settings.headers.len(), 2);
    }

    #[test]
    fn test_user_agent_replaces_default() {
        let settings = FetchSettings::default().with_user_agent("fidousage-test");
        assert_eq!(settings.headers.len(), 1);
        assert_eq!(
            settings.headers.get("User-Agent").map(String::as_str),
            Some("fidousage-test")
        );
    }

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::default();
        assert_eq!(
            endpoints.sign_in(),
            "https://rogers-fido.janraincapture.com/widget/traditional_signin.jsonp"
        );
        assert_eq!(
            endpoints.token(),
            "https://rogers-fido.janraincapture.com/widget/get_result.jsonp"
        );
        assert_eq!(
            endpoints.account(),
            "https://www.fido.ca/pages/api/selfserve/v3/login"
        );
        assert_eq!(endpoints.numbers(), endpoints.balance());
        assert_eq!(
            endpoints.loyalty(),
            "https://www.fido.ca/pages/api/selfserve/v1/wireless/rewards/basicinfo"
        );
        assert_eq!(
            endpoints.usage(),
            "https://www.fido.ca/pages/api/selfserve/v1/postpaid/dashboard/usage"
        );
    }

    #[test]
    fn test_custom_endpoints_trim_slash() {
        let endpoints = Endpoints::new("http://127.0.0.1:8080/", "http://127.0.0.1:8080/api").unwrap();
        assert_eq!(endpoints.identity_host(), "http://127.0.0.1:8080");
        assert_eq!(endpoints.account(), "http://127.0.0.1:8080/api/v3/login");
    }

    #[test]
    fn test_invalid_endpoints() {
        assert!(Endpoints::new("not-a-url", "http://ok.example").is_err());
        assert!(Endpoints::new("ftp://files.example", "http://ok.example").is_err());
    }
}
