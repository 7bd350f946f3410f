use serde::{Deserialize, Serialize};

/// A vault or tokenized asset as registered with the recommendation engine.
///
/// Field ranges are not validated; out-of-range tiers or negative durations are scored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub address: String,
    pub name: String,
    /// 1 (lowest risk) ..= 5 (highest risk).
    pub risk_tier: i32,
    pub target_duration_days: i64,
    /// Expected annual yield in percent (7.5 = 7.5%).
    pub expected_yield: f64,
    pub asset_type: String,
    pub strategy: Option<String>,
    pub assets: Vec<String>,
}

impl AssetRecord {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            risk_tier: 0,
            target_duration_days: 0,
            expected_yield: 0.0,
            asset_type: String::new(),
            strategy: None,
            assets: Vec::new(),
        }
    }

    pub fn with_risk_tier(mut self, risk_tier: i32) -> Self {
        self.risk_tier = risk_tier;
        self
    }

    pub fn with_target_duration_days(mut self, days: i64) -> Self {
        self.target_duration_days = days;
        self
    }

    pub fn with_expected_yield(mut self, expected_yield: f64) -> Self {
        self.expected_yield = expected_yield;
        self
    }

    pub fn with_asset_type(mut self, asset_type: impl Into<String>) -> Self {
        self.asset_type = asset_type.into();
        self
    }

    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    pub fn with_assets(mut self, assets: Vec<String>) -> Self {
        self.assets = assets;
        self
    }
}
