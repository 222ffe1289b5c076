//! REST client for the zone directory API.

mod directory;
mod error;
mod http;
mod types;

use std::time::Duration;

use reqwest::Client;

pub(crate) use error::ErrorContext;
pub(crate) use types::ApiEnvelope;

/// Service ceiling on mutations per change call.
pub const MAX_CHANGES_PER_CALL: usize = 1000;
/// Service ceiling on items per listing page.
pub const MAX_LIST_ITEMS: u32 = 500;

/// Default connection timeout (seconds).
const CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// REST implementation of [`ZoneDirectory`](crate::ZoneDirectory).
///
/// Holds its own [`reqwest::Client`]; there is no ambient global client or
/// credential resolution. Construct one handle per run and pass it down.
pub struct RestZoneDirectory {
    pub(crate) client: Client,
    pub(crate) api_token: String,
    pub(crate) base_url: String,
}

impl RestZoneDirectory {
    /// Client for the regional default endpoint.
    #[must_use]
    pub fn new(api_token: String, region: &str) -> Self {
        Self::with_endpoint(api_token, endpoint_for_region(region))
    }

    /// Client for an explicit endpoint, e.g. a staging deployment or a
    /// local test server. A trailing slash on the endpoint is tolerated.
    #[must_use]
    pub fn with_endpoint(api_token: String, endpoint: impl Into<String>) -> Self {
        let mut base_url = endpoint.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: build_http_client(),
            api_token,
            base_url,
        }
    }
}

/// Regional default endpoint for the directory API.
fn endpoint_for_region(region: &str) -> String {
    format!("https://dns.{region}.zonedir.cloud/v2")
}

/// HTTP client with explicit timeouts.
fn build_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}
