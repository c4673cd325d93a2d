use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetPlatform {
    pub id: String,
    #[serde(default)]
    pub chain_identifier: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub shortname: Option<String>,
}
