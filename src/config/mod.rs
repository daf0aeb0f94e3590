use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub quote_service: QuoteServiceConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Swap fee as a fraction of gross output (0.005 = 0.5%).
    pub fee_rate: f64,
    /// Applied when a trade request carries no slippage tolerance.
    pub default_slippage_bps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteServiceConfig {
    /// When enabled, live quotes supersede locally computed estimates.
    pub enabled: bool,
    pub base_url: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("PASSKEY_DASH"))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<()> {
        // Validate required fields
        if !(0.0..=1.0).contains(&self.engine.fee_rate) {
            anyhow::bail!("Fee rate must be within [0, 1]");
        }
        if self.engine.default_slippage_bps > 10_000 {
            anyhow::bail!("Default slippage must be within [0, 10000] bps");
        }
        if self.quote_service.enabled && self.quote_service.base_url.is_empty() {
            anyhow::bail!("Quote service base URL is required when the service is enabled");
        }
        Ok(())
    }

    pub fn is_quote_service_enabled(&self) -> bool {
        self.quote_service.enabled
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fee_rate: 0.005, // 0.5%
            default_slippage_bps: 50,
        }
    }
}

impl Default for QuoteServiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "https://lite-api.jup.ag/swap/v1".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_fee_rate_is_rejected() {
        let mut config = AppConfig::default();
        config.engine.fee_rate = 1.5;
        assert!(config.validate().is_err());

        config.engine.fee_rate = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_default_slippage_is_rejected() {
        let mut config = AppConfig::default();
        config.engine.default_slippage_bps = 20_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn enabled_quote_service_requires_base_url() {
        let mut config = AppConfig::default();
        config.quote_service.enabled = true;
        config.quote_service.base_url.clear();
        assert!(config.validate().is_err());
    }
}
