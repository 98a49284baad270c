//! # Configuration
//!
//! Settings are layered, later sources winning:
//!
//! 1. built-in defaults
//! 2. `config/default.{toml,yaml,json}` (optional)
//! 3. `config/{APP_ENV}.{toml,yaml,json}` (optional, `APP_ENV` defaults to `development`)
//! 4. `KITCHEN__`-prefixed environment variables, `__` between sections
//!
//! A `.env` file in the working directory is loaded into the environment first.
//!
//! ```bash
//! KITCHEN__STORE__BUFFER_SIZE=64
//! KITCHEN__ORDERS__ALLOWED_STATUSES=Pending,Ready,Delivered
//! KITCHEN__LOG__FORMAT=json
//! ```

use crate::clients::DEFAULT_PASSCODE_ATTEMPTS;
use crate::model::OrderStatus;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "KITCHEN";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KitchenConfig {
    pub store: StoreSettings,
    pub orders: OrderSettings,
    pub clients: ClientSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreSettings {
    /// Request channel capacity of each table actor.
    pub buffer_size: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderSettings {
    /// Statuses an order may be set to.
    pub allowed_statuses: Vec<OrderStatus>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientSettings {
    /// Passcode draws per client registration before giving up.
    pub passcode_attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogSettings {
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    Json,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            store: StoreSettings { buffer_size: 32 },
            orders: OrderSettings {
                allowed_statuses: OrderStatus::ALL.to_vec(),
            },
            clients: ClientSettings {
                passcode_attempts: DEFAULT_PASSCODE_ATTEMPTS,
            },
            log: LogSettings {
                format: LogFormat::Compact,
            },
        }
    }
}

impl KitchenConfig {
    /// Loads configuration from files and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_with(Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration using `environment` as the top layer.
    pub fn load_with(environment: Environment) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let defaults: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.as_str()).collect();

        let config = Config::builder()
            .set_default("store.buffer_size", 32)?
            .set_default("orders.allowed_statuses", defaults)?
            .set_default("clients.passcode_attempts", i64::from(DEFAULT_PASSCODE_ATTEMPTS))?
            .set_default("log.format", "compact")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                environment
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("orders.allowed_statuses"),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.store.buffer_size == 0 {
            return Err(ConfigError::Message("store.buffer_size must be positive".into()));
        }
        if self.orders.allowed_statuses.is_empty() {
            return Err(ConfigError::Message("orders.allowed_statuses must not be empty".into()));
        }
        if self.clients.passcode_attempts == 0 {
            return Err(ConfigError::Message("clients.passcode_attempts must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let config = KitchenConfig::load_with(environment(&[])).unwrap();
        assert_eq!(config, KitchenConfig::default());
    }

    #[test]
    fn test_environment_overrides() {
        let config = KitchenConfig::load_with(environment(&[
            ("KITCHEN__STORE__BUFFER_SIZE", "8"),
            ("KITCHEN__ORDERS__ALLOWED_STATUSES", "Pending,Delivered"),
            ("KITCHEN__LOG__FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.store.buffer_size, 8);
        assert_eq!(
            config.orders.allowed_statuses,
            vec![OrderStatus::Pending, OrderStatus::Delivered]
        );
        assert_eq!(config.log.format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = KitchenConfig::load_with(environment(&[(
            "KITCHEN__ORDERS__ALLOWED_STATUSES",
            "Pending,Shipped",
        )]));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_buffer_is_rejected() {
        let result = KitchenConfig::load_with(environment(&[("KITCHEN__STORE__BUFFER_SIZE", "0")]));
        assert!(result.is_err());
    }
}
