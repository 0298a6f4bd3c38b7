// Adapters layer: concrete implementations of the domain ports for external systems.

use crate::domain::ports::{CatalogSource, ConfigProvider};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Reqwest-backed client for the BoardGameGeek XML API v2.
pub struct BggClient {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl BggClient {
    pub fn new(config: &impl ConfigProvider) -> Self {
        Self {
            base_url: config.api_base_url().trim_end_matches('/').to_string(),
            client: Client::new(),
            timeout: config.upstream_timeout(),
        }
    }

    async fn fetch_xml(&self, path: &str, query: &[(&str, &str)]) -> Result<String> {
        let url = format!("{}/{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(&url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl CatalogSource for BggClient {
    async fn plays_xml(&self, username: &str) -> Result<String> {
        self.fetch_xml("plays", &[("username", username)]).await
    }

    async fn thing_xml(&self, game_id: &str) -> Result<String> {
        self.fetch_xml("thing", &[("id", game_id), ("stats", "1")])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    struct MockConfig {
        api_base_url: String,
    }

    impl ConfigProvider for MockConfig {
        fn api_base_url(&self) -> &str {
            &self.api_base_url
        }

        fn upstream_timeout(&self) -> Duration {
            Duration::from_secs(5)
        }
    }

    fn client_for(server: &MockServer) -> BggClient {
        BggClient::new(&MockConfig {
            // Trailing slash should be tolerated.
            api_base_url: format!("{}/", server.base_url()),
        })
    }

    #[tokio::test]
    async fn test_plays_request_carries_username() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/plays").query_param("username", "alice");
            then.status(200)
                .header("Content-Type", "text/xml")
                .body(r#"<plays username="alice" total="0"/>"#);
        });

        let xml = client_for(&server).plays_xml("alice").await.unwrap();

        mock.assert();
        assert!(xml.contains("alice"));
    }

    #[tokio::test]
    async fn test_thing_request_asks_for_stats() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/thing")
                .query_param("id", "30549")
                .query_param("stats", "1");
            then.status(200)
                .header("Content-Type", "text/xml")
                .body("<items/>");
        });

        client_for(&server).thing_xml("30549").await.unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_upstream_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/plays");
            then.status(502);
        });

        let err = client_for(&server).plays_xml("alice").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::UpstreamStatus { status: 502 }
        ));
    }
}
