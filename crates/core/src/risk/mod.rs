pub mod error;
pub mod model;

pub use error::RiskProfileError;

use crate::time;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskInput {
    pub asset_address: String,
    pub asset_type: String,
    /// Basis-points-like units: 500 => 5.0%.
    pub annual_yield_bps: i64,
    /// Unix seconds; 0 means no fixed maturity.
    pub maturity_timestamp: i64,
    pub risk_tier: i32,
    /// Defaults to the wall clock when absent.
    pub now_timestamp: Option<i64>,
}

/// Standardized risk breakdown for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSignature {
    pub asset_address: String,
    pub asset_type: String,
    pub risk_tier: i32,
    /// Percent.
    pub annual_yield: f64,
    pub maturity_days: i64,
    /// Years.
    pub duration: f64,
    /// 0..=100, higher is better.
    pub credit_score: f64,
    /// 0.0..=1.0, annualized.
    pub volatility: f64,
    /// 0..=100, higher is better.
    pub liquidity_score: f64,
    /// 0..=100, lower is better.
    pub counterparty_risk: f64,
}

/// Computes risk signatures and keeps the latest one per asset address.
///
/// The cache preserves first-insertion order; re-simulating an address replaces its entry in
/// place.
#[derive(Debug, Default)]
pub struct RiskProfiler {
    signatures: Vec<RiskSignature>,
    index: HashMap<String, usize>,
}

impl RiskProfiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn simulate_risk(&mut self, input: RiskInput) -> RiskSignature {
        let now = time::resolve_now(input.now_timestamp);
        let maturity_days = time::days_until_maturity(input.maturity_timestamp, now);
        let duration = time::days_to_years(maturity_days);

        let yield_pct = model::yield_pct_from_bps(input.annual_yield_bps);
        let base = model::base_profile(&input.asset_type);

        let credit_score = model::credit_score(input.risk_tier, yield_pct);
        let volatility = model::volatility(&base, input.risk_tier, yield_pct);
        let liquidity_score = model::liquidity_score(&base, maturity_days, input.risk_tier);
        let counterparty_risk = model::counterparty_risk(&base, input.risk_tier, credit_score);

        let signature = RiskSignature {
            asset_address: input.asset_address,
            asset_type: input.asset_type,
            risk_tier: input.risk_tier,
            annual_yield: yield_pct,
            maturity_days,
            duration,
            credit_score,
            volatility,
            liquidity_score,
            counterparty_risk,
        };

        tracing::debug!(
            asset_address = %signature.asset_address,
            asset_type = %signature.asset_type,
            credit_score = signature.credit_score,
            volatility = signature.volatility,
            liquidity_score = signature.liquidity_score,
            counterparty_risk = signature.counterparty_risk,
            "simulated risk signature"
        );

        self.store(signature.clone());
        signature
    }

    fn store(&mut self, signature: RiskSignature) {
        match self.index.get(&signature.asset_address) {
            Some(&pos) => self.signatures[pos] = signature,
            None => {
                self.index
                    .insert(signature.asset_address.clone(), self.signatures.len());
                self.signatures.push(signature);
            }
        }
    }

    pub fn get_signature(&self, asset_address: &str) -> Result<&RiskSignature, RiskProfileError> {
        self.index
            .get(asset_address)
            .map(|&pos| &self.signatures[pos])
            .ok_or_else(|| RiskProfileError::NotFound {
                asset_address: asset_address.to_string(),
            })
    }

    pub fn list_signatures(&self) -> &[RiskSignature] {
        &self.signatures
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}
