use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Read-only view of the settings the upstream client needs.
pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn upstream_timeout(&self) -> Duration;
}

/// Transport to the catalog API: returns raw XML text or a transport error.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn plays_xml(&self, username: &str) -> Result<String>;
    async fn thing_xml(&self, game_id: &str) -> Result<String>;
}
