use crate::domain::asset::AssetRecord;
use crate::domain::preferences::UserPreferences;
use crate::engine::scoring::ScoreBreakdown;

const FALLBACK: &str = "This vault may be suitable based on your preferences";

/// Deterministic explanation assembled from fixed sentences, in a fixed order.
pub fn generate_reasoning(
    record: &AssetRecord,
    prefs: &UserPreferences,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut reasons = Vec::with_capacity(3);

    if breakdown.risk_tier_match >= 80.0 {
        reasons.push(format!(
            "Risk tier {} aligns well with your {} risk tolerance",
            record.risk_tier,
            prefs.risk_tolerance.name()
        ));
    }

    if breakdown.timeframe_match {
        reasons.push(format!(
            "Timeframe matches your {}-term investment preference",
            prefs.timeframe.label()
        ));
    }

    if record.expected_yield > 0.0 {
        reasons.push(format!("Expected yield: {:.2}%", record.expected_yield));
    }

    if reasons.is_empty() {
        reasons.push(FALLBACK.to_string());
    }

    format!("{}.", reasons.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::preferences::{RiskTolerance, Timeframe};
    use crate::engine::scoring;

    fn explain(record: &AssetRecord, prefs: &UserPreferences) -> String {
        generate_reasoning(record, prefs, &scoring::score(record, prefs))
    }

    #[test]
    fn all_sentences_in_order() {
        let record = AssetRecord::new("0x222", "Balanced")
            .with_risk_tier(3)
            .with_target_duration_days(1095)
            .with_expected_yield(7.5);
        let prefs = UserPreferences::new(Timeframe::Medium, RiskTolerance::Balanced, 10_000.0);
        assert_eq!(
            explain(&record, &prefs),
            "Risk tier 3 aligns well with your balanced risk tolerance. \
             Timeframe matches your medium-term investment preference. \
             Expected yield: 7.50%."
        );
    }

    #[test]
    fn adjacent_tier_still_counts_as_aligned() {
        let record = AssetRecord::new("0x1", "Bond")
            .with_risk_tier(2)
            .with_target_duration_days(3650);
        let prefs = UserPreferences::new(Timeframe::Short, RiskTolerance::Conservative, 0.0);
        assert_eq!(
            explain(&record, &prefs),
            "Risk tier 2 aligns well with your conservative risk tolerance."
        );
    }

    #[test]
    fn falls_back_when_nothing_applies() {
        let record = AssetRecord::new("0x1", "Far")
            .with_risk_tier(5)
            .with_target_duration_days(3650);
        let prefs = UserPreferences::new(Timeframe::Short, RiskTolerance::Conservative, 0.0);
        assert_eq!(
            explain(&record, &prefs),
            "This vault may be suitable based on your preferences."
        );
    }

    #[test]
    fn yield_is_rendered_with_two_decimals() {
        let record = AssetRecord::new("0x1", "Y")
            .with_risk_tier(5)
            .with_target_duration_days(3650)
            .with_expected_yield(12.0);
        let prefs = UserPreferences::new(Timeframe::Short, RiskTolerance::Conservative, 0.0);
        assert_eq!(explain(&record, &prefs), "Expected yield: 12.00%.");
    }
}
