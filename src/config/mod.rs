use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_positive_number, validate_socket_addr, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "bgg-gateway")]
#[command(about = "JSON gateway in front of the BoardGameGeek XML API")]
pub struct CliConfig {
    #[arg(long, env = "BGG_GATEWAY_BIND", default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    #[arg(
        long,
        env = "BGG_API_URL",
        default_value = "https://boardgamegeek.com/xmlapi2"
    )]
    pub api_base_url: String,

    #[arg(long, env = "BGG_UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    pub upstream_timeout_secs: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_socket_addr("bind_addr", &self.bind_addr)?;
        validate_positive_number("upstream_timeout_secs", self.upstream_timeout_secs, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            bind_addr: "127.0.0.1:3000".to_string(),
            api_base_url: "https://boardgamegeek.com/xmlapi2".to_string(),
            upstream_timeout_secs: 10,
            verbose: false,
            log_json: false,
        }
    }

    #[test]
    fn test_default_config_validates() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let mut config = base_config();
        config.api_base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.bind_addr = "nonsense".to_string();
        assert!(config.validate().is_err());

        let mut config = base_config();
        config.upstream_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
