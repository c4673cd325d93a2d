use serde::{Deserialize, Serialize};

/// Raw body of `GET /ping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    pub gecko_says: String,
}

/// Interpreted server health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Active,
    Inactive,
}

impl ApiStatus {
    /// CoinGecko answers a healthy ping with a greeting ending in "To the Moon!".
    pub fn from_greeting(greeting: &str) -> Self {
        if greeting.contains("the Moon!") {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Result of the health check, serialized as `{"status": "active"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: ApiStatus,
}

impl From<&Ping> for StatusReport {
    fn from(ping: &Ping) -> Self {
        Self {
            status: ApiStatus::from_greeting(&ping.gecko_says),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_greeting_means_active() {
        assert_eq!(ApiStatus::from_greeting("(V3) To the Moon!"), ApiStatus::Active);
        assert_eq!(ApiStatus::from_greeting("To the Moon!"), ApiStatus::Active);
    }

    #[test]
    fn anything_else_means_inactive() {
        assert_eq!(ApiStatus::from_greeting("hello"), ApiStatus::Inactive);
        assert_eq!(ApiStatus::from_greeting("to the moon"), ApiStatus::Inactive);
    }

    #[test]
    fn report_serializes_lowercase_status() {
        let report = StatusReport {
            status: ApiStatus::Active,
        };
        assert_eq!(
            serde_json::to_string(&report).expect("must serialize"),
            r#"{"status":"active"}"#
        );
    }
}
