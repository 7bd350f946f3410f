use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultRecommendation {
    pub vault_address: String,
    pub vault_name: String,
    /// 0..=100, how well the vault fits the caller's preferences.
    pub match_score: f64,
    pub risk_tier: i32,
    pub expected_yield: f64,
    pub timeframe_match: bool,
    pub reasoning: String,
}
