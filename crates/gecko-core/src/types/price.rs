use std::collections::BTreeMap;

/// `{coin id or contract address: {currency or metric: value}}`.
///
/// Metric keys include `usd_market_cap`, `usd_24h_vol`, `usd_24h_change` and
/// `last_updated_at` when the matching `include_*` flag is set.
pub type Price = BTreeMap<String, BTreeMap<String, Option<f64>>>;
