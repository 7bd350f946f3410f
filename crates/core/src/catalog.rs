use crate::domain::asset::AssetRecord;
use crate::domain::contract::CatalogDocument;
use anyhow::Context;

/// Supplies the asset records a recommendation engine ranks.
pub trait CatalogProvider {
    fn provider_name(&self) -> &'static str;

    fn load_assets(&self) -> anyhow::Result<Vec<AssetRecord>>;
}

/// Catalog decoded from an in-memory JSON document.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    raw: String,
}

impl JsonCatalog {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CatalogProvider for JsonCatalog {
    fn provider_name(&self) -> &'static str {
        "json"
    }

    fn load_assets(&self) -> anyhow::Result<Vec<AssetRecord>> {
        let doc = serde_json::from_str::<CatalogDocument>(&self.raw)
            .context("catalog is not a JSON array of vaults or an object with a `vaults` array")?;
        let records = doc.into_records();
        tracing::debug!(count = records.len(), "decoded json catalog");
        Ok(records)
    }
}

/// The three reference vaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCatalog;

impl CatalogProvider for DemoCatalog {
    fn provider_name(&self) -> &'static str {
        "demo"
    }

    fn load_assets(&self) -> anyhow::Result<Vec<AssetRecord>> {
        Ok(vec![
            AssetRecord::new("0x111...", "Conservative Short-Term Vault")
                .with_risk_tier(1)
                .with_target_duration_days(180)
                .with_expected_yield(5.0)
                .with_strategy("conservative-short-term"),
            AssetRecord::new("0x222...", "Balanced Diversified Vault")
                .with_risk_tier(3)
                .with_target_duration_days(1095)
                .with_expected_yield(7.5)
                .with_strategy("balanced-diversified"),
            AssetRecord::new("0x333...", "High-Yield Long-Term Vault")
                .with_risk_tier(5)
                .with_target_duration_days(3650)
                .with_expected_yield(12.0)
                .with_strategy("high-yield-long-term"),
        ])
    }
}
