use std::fmt::{Debug, Formatter};

use crate::{ApiTier, ValidationError};

pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub const ENV_API_KEY: &str = "GECKO_API_KEY";
pub const ENV_API_TIER: &str = "GECKO_API_TIER";
pub const ENV_TIMEOUT_MS: &str = "GECKO_TIMEOUT_MS";

/// Construction options for [`crate::CoinGeckoClient`].
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub tier: ApiTier,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(ApiTier::Demo)
    }
}

impl ClientConfig {
    pub fn new(tier: ApiTier) -> Self {
        Self {
            api_key: None,
            tier,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn demo() -> Self {
        Self::new(ApiTier::Demo)
    }

    pub fn pro(api_key: impl Into<String>) -> Self {
        Self::new(ApiTier::Pro).with_api_key(api_key)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Reads `GECKO_API_KEY`, `GECKO_API_TIER` and `GECKO_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tier = match lookup(ENV_API_TIER) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => ApiTier::Demo,
        };

        let timeout_ms = match lookup(ENV_TIMEOUT_MS) {
            Some(value) if !value.trim().is_empty() => parse_timeout(&value)?,
            _ => DEFAULT_TIMEOUT_MS,
        };

        let api_key = lookup(ENV_API_KEY).filter(|key| !key.trim().is_empty());

        Ok(Self {
            api_key,
            tier,
            timeout_ms,
        })
    }
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("tier", &self.tier)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

fn parse_timeout(value: &str) -> Result<u64, ValidationError> {
    match value.trim().parse::<u64>() {
        Ok(timeout_ms) if timeout_ms > 0 => Ok(timeout_ms),
        _ => Err(ValidationError::InvalidTimeout {
            value: value.to_owned(),
        }),
    }
}
