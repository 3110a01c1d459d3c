// listings.rs
use crate::domain::Listing;
use crate::provider::ProviderError;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("lostfound_maps/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the upstream listings service. One best-effort
/// request per page render; retries, caching and pagination stay out of
/// this layer.
#[derive(Debug)]
pub struct ListingsProvider {
    client: Client,
    base: Url,
}

impl ListingsProvider {
    pub fn new(base: &str) -> Result<Self, ProviderError> {
        let base = Url::parse(base)
            .map_err(|e| ProviderError::Config(format!("bad base URL {base:?}: {e}")))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        Ok(Self { client, base })
    }

    /// Fetch the full listing collection from `GET /api/listings`.
    pub fn fetch_listings(&self) -> Result<Vec<Listing>, ProviderError> {
        let url = self
            .base
            .join("/api/listings")
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ProviderError::Network(format!(
                "{url} returned HTTP {status}"
            )));
        }

        let mut listings = Self::parse_body(&text)?;

        // Picture paths come back relative to the provider, not to us.
        for listing in &mut listings {
            if let Some(picture) = &listing.picture {
                listing.picture = Some(absolute_picture_url(&self.base, picture));
            }
        }

        Ok(listings)
    }

    /// Decode a response body into listing records. Split out from the
    /// HTTP round trip so it can be exercised without a live provider.
    pub fn parse_body(body: &str) -> Result<Vec<Listing>, ProviderError> {
        let data: Value =
            serde_json::from_str(body).map_err(|e| ProviderError::JsonParse(e.to_string()))?;

        let arr = data.as_array().ok_or_else(|| {
            ProviderError::UnexpectedShape("expected a JSON array of listings".to_string())
        })?;

        let listings: Result<Vec<_>, _> = arr
            .iter()
            .map(|v| serde_json::from_value(v.clone()))
            .collect();

        listings.map_err(|e| ProviderError::Deserialize(e.to_string()))
    }
}

/// Resolve a possibly-relative picture path against the provider base.
/// A path that refuses to join is passed through untouched.
pub fn absolute_picture_url(base: &Url, picture: &str) -> String {
    base.join(picture)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| picture.to_string())
}
