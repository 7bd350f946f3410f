use crate::domain::asset::AssetRecord;
use crate::risk::RiskInput;
use serde::{Deserialize, Serialize};

/// Catalog entry as supplied by a catalog provider.
///
/// Only `address` is required. Everything else falls back to 0 / 0.0 / empty so that a sparse
/// record still registers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub address: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub risk_tier: Option<i32>,
    /// Days.
    #[serde(default, alias = "target_duration_days")]
    pub target_duration: Option<i64>,
    #[serde(default)]
    pub expected_yield: Option<f64>,
    #[serde(default)]
    pub asset_type: Option<String>,
    #[serde(default)]
    pub strategy: Option<String>,
    #[serde(default)]
    pub assets: Option<Vec<String>>,
}

/// A catalog document: either a bare array of entries or `{ "vaults": [...] }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    Entries(Vec<CatalogEntry>),
    Wrapped { vaults: Vec<CatalogEntry> },
}

impl CatalogDocument {
    pub fn into_records(self) -> Vec<AssetRecord> {
        let entries = match self {
            CatalogDocument::Entries(entries) => entries,
            CatalogDocument::Wrapped { vaults } => vaults,
        };
        entries.into_iter().map(CatalogEntry::into_record).collect()
    }
}

impl CatalogEntry {
    pub fn into_record(self) -> AssetRecord {
        let address = self.address.trim().to_string();

        let mut defaulted = Vec::new();
        if self.risk_tier.is_none() {
            defaulted.push("risk_tier");
        }
        if self.target_duration.is_none() {
            defaulted.push("target_duration");
        }
        if self.expected_yield.is_none() {
            defaulted.push("expected_yield");
        }
        if !defaulted.is_empty() {
            tracing::debug!(%address, ?defaulted, "catalog entry missing fields; using defaults");
        }

        let strategy = self
            .strategy
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        AssetRecord {
            address,
            name: self.name.map(|s| s.trim().to_string()).unwrap_or_default(),
            risk_tier: self.risk_tier.unwrap_or(0),
            target_duration_days: self.target_duration.unwrap_or(0),
            expected_yield: self.expected_yield.unwrap_or(0.0),
            asset_type: self.asset_type.unwrap_or_default(),
            strategy,
            assets: self.assets.unwrap_or_default(),
        }
    }
}

/// Tokenized asset as handed to the risk profiler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskRequest {
    pub address: String,
    pub asset_type: String,
    /// Basis-points-like units: 500 => 5.0%.
    pub annual_yield: i64,
    /// Unix seconds; 0 means no fixed maturity.
    #[serde(default)]
    pub maturity_timestamp: i64,
    pub risk_tier: i32,
    #[serde(default)]
    pub now_timestamp: Option<i64>,
}

impl From<RiskRequest> for RiskInput {
    fn from(req: RiskRequest) -> Self {
        RiskInput {
            asset_address: req.address,
            asset_type: req.asset_type,
            annual_yield_bps: req.annual_yield,
            maturity_timestamp: req.maturity_timestamp,
            risk_tier: req.risk_tier,
            now_timestamp: req.now_timestamp,
        }
    }
}
