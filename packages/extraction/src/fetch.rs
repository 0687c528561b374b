//! Single-shot document retrieval.

use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::FetchError;
use crate::status;

/// Outcome of the one outbound call made for a request.
///
/// Non-2xx statuses are data, not errors; the status and its reason
/// pair travel with the body so callers can surface them verbatim.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub status_code: u16,
    pub status_short: Option<&'static str>,
    pub status_long: Option<&'static str>,
    /// Response body decoded as text.
    pub raw_body: String,
}

impl FetchResult {
    fn new(status_code: u16, raw_body: String) -> Self {
        let (status_short, status_long) = match status::message(status_code) {
            Some((short, long)) => (Some(short), Some(long)),
            None => (None, None),
        };
        Self {
            status_code,
            status_short,
            status_long,
            raw_body,
        }
    }
}

/// Fetches one document per request with the caller's User-Agent.
pub struct DocumentFetcher {
    client: reqwest::Client,
}

impl DocumentFetcher {
    /// Create a fetcher with a default client (30s timeout).
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Perform the single outbound GET for a request.
    ///
    /// The URL is scheme-normalized first. The call is never retried,
    /// and the status code is reported rather than treated as failure.
    pub async fn fetch(&self, url: &str, user_agent: &str) -> Result<FetchResult, FetchError> {
        let url = normalize_url(url);
        let parsed = Url::parse(&url).map_err(|_| FetchError::InvalidUrl { url: url.clone() })?;

        debug!(url = %parsed, "fetching document");
        let response = self
            .client
            .get(parsed)
            .header("User-Agent", user_agent)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let raw_body = response.text().await?;
        debug!(status = status_code, bytes = raw_body.len(), "document fetched");

        Ok(FetchResult::new(status_code, raw_body))
    }
}

/// Prefix `http://` when the first four characters lower-cased are not
/// `"http"`. Applying this twice is a no-op.
pub fn normalize_url(url: &str) -> String {
    let has_scheme = url
        .get(..4)
        .map(|prefix| prefix.eq_ignore_ascii_case("http"))
        .unwrap_or(false);
    if has_scheme {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
