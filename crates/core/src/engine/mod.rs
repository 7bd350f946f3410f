pub mod reasoning;
pub mod scoring;

use crate::domain::asset::AssetRecord;
use crate::domain::preferences::UserPreferences;
use crate::domain::recommendation::VaultRecommendation;

pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_MIN_MATCH_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Number of recommendations returned when the caller does not ask for a specific count.
    pub default_limit: usize,

    /// Records scoring below this are dropped before truncation.
    pub min_match_score: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
        }
    }
}

impl EngineOptions {
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var("PRAXOS_DEFAULT_LIMIT").ok().as_deref(),
            std::env::var("PRAXOS_MIN_MATCH_SCORE").ok().as_deref(),
        )
    }

    /// Applies raw overrides on top of the defaults; unparsable or non-finite values are ignored.
    pub fn from_values(default_limit: Option<&str>, min_match_score: Option<&str>) -> Self {
        let mut out = Self::default();

        if let Some(n) = default_limit.and_then(|s| s.trim().parse::<usize>().ok()) {
            out.default_limit = n;
        }

        if let Some(n) = min_match_score.and_then(|s| s.trim().parse::<f64>().ok()) {
            if n.is_finite() {
                out.min_match_score = n;
            }
        }

        out
    }
}

/// Ranks registered vaults against a caller's preferences.
///
/// The registry is append-only and keeps insertion order, which is also the tie-break order
/// for equal scores.
#[derive(Debug, Default)]
pub struct RecommendationEngine {
    registry: Vec<AssetRecord>,
    options: EngineOptions,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            registry: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Appends a record. No deduplication and no range checks.
    pub fn register(&mut self, record: AssetRecord) {
        tracing::debug!(
            address = %record.address,
            name = %record.name,
            risk_tier = record.risk_tier,
            position = self.registry.len(),
            "registered vault"
        );
        self.registry.push(record);
    }

    pub fn register_all(&mut self, records: impl IntoIterator<Item = AssetRecord>) {
        for record in records {
            self.register(record);
        }
    }

    pub fn registry(&self) -> &[AssetRecord] {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Recommendations using the configured default limit.
    pub fn recommend_default(&self, prefs: &UserPreferences) -> Vec<VaultRecommendation> {
        self.recommend(prefs, self.options.default_limit)
    }

    /// Scores every registered record, drops those under the minimum match score, sorts by
    /// descending score (stable) and keeps the first `limit`.
    pub fn recommend(&self, prefs: &UserPreferences, limit: usize) -> Vec<VaultRecommendation> {
        let mut out: Vec<VaultRecommendation> = Vec::with_capacity(self.registry.len());

        for record in &self.registry {
            let breakdown = scoring::score(record, prefs);
            tracing::debug!(
                address = %record.address,
                risk_tier_match = breakdown.risk_tier_match,
                timeframe_match = breakdown.timeframe_match,
                yield_match = breakdown.yield_match,
                total = breakdown.total,
                "scored vault"
            );

            if breakdown.total < self.options.min_match_score {
                continue;
            }

            out.push(VaultRecommendation {
                vault_address: record.address.clone(),
                vault_name: record.name.clone(),
                match_score: breakdown.total,
                risk_tier: record.risk_tier,
                expected_yield: record.expected_yield,
                timeframe_match: breakdown.timeframe_match,
                reasoning: reasoning::generate_reasoning(record, prefs, &breakdown),
            });
        }

        let candidates = out.len();
        out.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        out.truncate(limit);

        tracing::info!(
            registered = self.registry.len(),
            candidates,
            returned = out.len(),
            timeframe = %prefs.timeframe,
            risk_tolerance = %prefs.risk_tolerance,
            "computed vault recommendations"
        );

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogProvider, DemoCatalog};
    use crate::domain::preferences::{RiskTolerance, Timeframe};

    fn vault(address: &str, tier: i32, days: i64, yield_pct: f64) -> AssetRecord {
        AssetRecord::new(address, format!("Vault {address}"))
            .with_risk_tier(tier)
            .with_target_duration_days(days)
            .with_expected_yield(yield_pct)
    }

    fn balanced_medium() -> UserPreferences {
        UserPreferences::new(Timeframe::Medium, RiskTolerance::Balanced, 10_000.0)
            .with_min_yield(6.0)
    }

    #[test]
    fn options_parse_overrides() {
        let opts = EngineOptions::from_values(Some("3"), Some(" 70.5 "));
        assert_eq!(opts.default_limit, 3);
        assert_eq!(opts.min_match_score, 70.5);
    }

    #[test]
    fn options_ignore_unparsable_and_non_finite_values() {
        assert_eq!(EngineOptions::from_values(None, None), EngineOptions::default());
        assert_eq!(
            EngineOptions::from_values(Some("lots"), Some("high")),
            EngineOptions::default()
        );
        assert_eq!(
            EngineOptions::from_values(Some("-1"), Some("NaN")),
            EngineOptions::default()
        );
        assert_eq!(
            EngineOptions::from_values(None, Some("inf")).min_match_score,
            DEFAULT_MIN_MATCH_SCORE
        );
    }

    #[test]
    fn engine_exposes_options_and_registry() {
        let options = EngineOptions::from_values(Some("1"), None);
        let mut engine = RecommendationEngine::with_options(options.clone());
        assert_eq!(engine.options(), &options);
        assert!(engine.is_empty());

        engine.register(vault("a", 3, 700, 7.0));
        engine.register(vault("b", 2, 700, 7.0));
        let addresses: Vec<_> = engine.registry().iter().map(|r| r.address.as_str()).collect();
        assert_eq!(addresses, ["a", "b"]);
        assert_eq!(engine.recommend_default(&balanced_medium()).len(), 1);
    }

    #[test]
    fn preferred_asset_types_do_not_change_scores() {
        let mut engine = RecommendationEngine::new();
        engine.register(
            vault("bond", 3, 700, 7.0)
                .with_asset_type("corporate-bond")
                .with_assets(vec!["corporate-bond".to_string()]),
        );
        engine.register(vault("reit", 3, 700, 7.0).with_asset_type("real-estate"));

        let plain = engine.recommend(&balanced_medium(), 5);
        let preferring = engine.recommend(
            &balanced_medium().with_preferred_asset_types(vec!["corporate-bond".to_string()]),
            5,
        );
        assert_eq!(plain, preferring);
        assert_eq!(preferring[0].match_score, preferring[1].match_score);
        assert_eq!(preferring[0].vault_address, "bond");
    }

    #[test]
    fn empty_registry_returns_nothing() {
        let engine = RecommendationEngine::new();
        assert!(engine.recommend(&balanced_medium(), 5).is_empty());
    }

    #[test]
    fn demo_catalog_ranks_medium_vault_first() {
        let mut engine = RecommendationEngine::new();
        engine.register_all(DemoCatalog.load_assets().unwrap());

        let recs = engine.recommend_default(&balanced_medium());
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].vault_name, "Balanced Diversified Vault");
        assert!((recs[0].match_score - 95.0).abs() < 1e-9);
        assert!(recs[0].timeframe_match);

        // tier 5: 50*0.4 + 50*0.3 + 100*0.2 + 5
        assert_eq!(recs[1].vault_name, "High-Yield Long-Term Vault");
        assert!((recs[1].match_score - 60.0).abs() < 1e-9);

        // tier 1: 50*0.4 + 50*0.3 + (5/6*100)*0.2 + 5
        assert_eq!(recs[2].vault_name, "Conservative Short-Term Vault");
        assert!((recs[2].match_score - (40.0 + 50.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn drops_scores_below_fifty() {
        let mut engine = RecommendationEngine::new();
        // 20*0.4 + 50*0.3 + 0*0.2 + 5 = 28
        engine.register(vault("far", 5, 30, 0.0));
        engine.register(vault("near", 3, 700, 8.0));

        let prefs = UserPreferences::new(Timeframe::Medium, RiskTolerance::Conservative, 0.0)
            .with_min_yield(6.0);
        let recs = engine.recommend(&prefs, 10);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].vault_address, "near");
        assert!(recs.iter().all(|r| r.match_score >= 50.0));
    }

    #[test]
    fn truncates_to_limit_and_sorts_descending() {
        let mut engine = RecommendationEngine::new();
        for (i, tier) in [1, 2, 3, 4, 5, 3, 2].into_iter().enumerate() {
            engine.register(vault(&format!("v{i}"), tier, 400 + i as i64 * 100, 7.0));
        }

        let prefs = balanced_medium();
        let recs = engine.recommend(&prefs, 3);
        assert_eq!(recs.len(), 3);
        assert!(recs
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));

        assert!(engine.recommend(&prefs, 0).is_empty());
        assert_eq!(engine.recommend_default(&prefs).len(), DEFAULT_LIMIT);
    }

    #[test]
    fn equal_scores_keep_registration_order() {
        let mut engine = RecommendationEngine::new();
        engine.register(vault("first", 3, 700, 7.0));
        engine.register(vault("middle", 3, 700, 7.0).with_strategy("balanced-diversified"));
        engine.register(vault("second", 3, 700, 7.0));
        engine.register(vault("worse", 1, 30, 7.0));

        let recs = engine.recommend(&balanced_medium(), 10);
        let order: Vec<_> = recs.iter().map(|r| r.vault_address.as_str()).collect();
        assert_eq!(order, ["first", "middle", "second", "worse"]);
    }

    #[test]
    fn duplicate_registrations_rank_twice() {
        let mut engine = RecommendationEngine::new();
        let record = vault("dup", 3, 700, 7.0);
        engine.register(record.clone());
        engine.register(record);

        let recs = engine.recommend(&balanced_medium(), 5);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], recs[1]);
    }

    #[test]
    fn recommend_is_idempotent() {
        let mut engine = RecommendationEngine::new();
        engine.register_all(DemoCatalog.load_assets().unwrap());
        engine.register(vault("extra", 4, 2000, 9.0));

        let prefs = balanced_medium();
        let first = engine.recommend(&prefs, 5);
        let second = engine.recommend(&prefs, 5);
        assert_eq!(first, second);
        assert_eq!(engine.len(), 4);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let options = EngineOptions {
            default_limit: 2,
            min_match_score: 90.0,
        };
        let mut engine = RecommendationEngine::with_options(options);
        engine.register_all(DemoCatalog.load_assets().unwrap());

        let recs = engine.recommend_default(&balanced_medium());
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].risk_tier, 3);
    }

    #[test]
    fn reasoning_is_attached() {
        let mut engine = RecommendationEngine::new();
        engine.register(vault("0x222", 3, 1095, 7.5));
        let recs = engine.recommend(&balanced_medium(), 1);
        assert_eq!(
            recs[0].reasoning,
            "Risk tier 3 aligns well with your balanced risk tolerance. \
             Timeframe matches your medium-term investment preference. \
             Expected yield: 7.50%."
        );
    }
}
