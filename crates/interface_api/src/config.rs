//! API configuration

use core_kernel::{Currency, Money};
use domain_partnership::CostsConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Fee for registering a partnership, in pounds
    pub registration_cost: Decimal,
    /// Fee for changing the name of a registered partnership, in pounds
    pub post_transition_update_name_cost: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            registration_cost: dec!(100.00),
            post_transition_update_name_cost: dec!(20.00),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_` prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The filing fees handed to the domain services
    pub fn costs(&self) -> CostsConfig {
        CostsConfig {
            registration: Money::new(self.registration_cost, Currency::GBP),
            post_transition_update_name: Money::new(
                self.post_transition_update_name_cost,
                Currency::GBP,
            ),
        }
    }
}
