use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// CoinGecko access level. Selects both the base host and the name of the
/// query parameter that carries the API key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiTier {
    #[default]
    Demo,
    Pro,
}

impl ApiTier {
    pub const ALL: [Self; 2] = [Self::Demo, Self::Pro];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Pro => "pro",
        }
    }

    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Demo => "https://api.coingecko.com/api/v3",
            Self::Pro => "https://pro-api.coingecko.com/api/v3",
        }
    }

    pub const fn key_param(self) -> &'static str {
        match self {
            Self::Demo => "x-cg-demo-api-key",
            Self::Pro => "x-cg-pro-api-key",
        }
    }
}

impl Display for ApiTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiTier {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "pro" => Ok(Self::Pro),
            other => Err(ValidationError::InvalidTier {
                value: other.to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tier_case_insensitively() {
        assert_eq!(ApiTier::from_str("PRO").expect("must parse"), ApiTier::Pro);
        assert_eq!(ApiTier::from_str(" demo ").expect("must parse"), ApiTier::Demo);
    }

    #[test]
    fn rejects_unknown_tier() {
        let err = ApiTier::from_str("enterprise").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTier { .. }));
    }

    #[test]
    fn each_tier_has_its_own_host_and_key_param() {
        assert_eq!(ApiTier::Demo.base_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(ApiTier::Demo.key_param(), "x-cg-demo-api-key");
        assert_eq!(ApiTier::Pro.base_url(), "https://pro-api.coingecko.com/api/v3");
        assert_eq!(ApiTier::Pro.key_param(), "x-cg-pro-api-key");
    }
}
