//! Gateway configuration.

use crate::error::ConfigError;

/// Environment variable consulted by `GatewayConfig::from_env`.
pub const BASE_URL_VAR: &str = "ACCOUNT_API_ADDR";

/// Where the account collection resource lives,
/// e.g. `http://localhost:8080/v1/organisation/accounts`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    base_url: String,
}

impl GatewayConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Read the base URL from `ACCOUNT_API_ADDR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Err(ConfigError::MissingVar(BASE_URL_VAR)),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
