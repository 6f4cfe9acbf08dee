//! # Relay Client
//!
//! Fetches upstream text through a CORS-stripping relay
//! (allorigins-style). The relay takes the real target as a `url` query
//! parameter and answers with a JSON envelope whose `contents` field
//! holds the raw upstream body.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::config::ResolvedConfig;

use super::source::{FetchError, ProblemSource};

/// The relay's response envelope. Only `contents` matters; the relay
/// also sends status metadata we ignore.
#[derive(Deserialize, Debug)]
struct RelayEnvelope {
    contents: String,
}

/// HTTP problem source going through the relay endpoint.
pub struct RelayClient {
    relay_base_url: String,
    listing_url: String,
    problem_url: String,
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new(
        relay_base_url: String,
        listing_url: String,
        problem_url: String,
        timeout: Duration,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            relay_base_url,
            listing_url,
            problem_url,
            client,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(
            config.relay_base_url.clone(),
            config.listing_url.clone(),
            config.problem_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// The per-problem target URL for an id.
    fn problem_target(&self, id: u32) -> String {
        self.problem_url.replace("{id}", &id.to_string())
    }

    /// GET `relay_base_url?url=<target>` and unwrap the envelope.
    ///
    /// The target travels as a query parameter; reqwest's query
    /// serializer percent-encodes it.
    async fn fetch_contents(&self, target: &str) -> Result<String, FetchError> {
        info!("Relay request: target={}", target);

        let response = self
            .client
            .get(&self.relay_base_url)
            .query(&[("url", target)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        debug!("Relay response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Relay error: {} - {}", status, message);
            return Err(FetchError::Api { status, message });
        }

        let envelope: RelayEnvelope = response
            .json()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        debug!("Relay contents: {} bytes", envelope.contents.len());
        Ok(envelope.contents)
    }
}

#[async_trait]
impl ProblemSource for RelayClient {
    fn name(&self) -> &str {
        "relay"
    }

    async fn fetch_listing(&self) -> Result<String, FetchError> {
        self.fetch_contents(&self.listing_url).await
    }

    async fn fetch_problem(&self, id: u32) -> Result<String, FetchError> {
        let target = self.problem_target(id);
        self.fetch_contents(&target).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RelayClient {
        RelayClient::new(
            "https://relay.example/get".to_string(),
            "https://upstream.example/list".to_string(),
            "https://upstream.example/problem={id}".to_string(),
            Duration::from_secs(5),
        )
    }

    #[test]
    fn test_problem_target_substitutes_id() {
        let client = test_client();
        assert_eq!(
            client.problem_target(42),
            "https://upstream.example/problem=42"
        );
    }

    #[test]
    fn test_envelope_decodes() {
        let envelope: RelayEnvelope =
            serde_json::from_str(r#"{"contents":"raw text","status":{"http_code":200}}"#).unwrap();
        assert_eq!(envelope.contents, "raw text");
    }
}
