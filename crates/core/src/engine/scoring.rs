//! Pure scoring functions behind [`super::RecommendationEngine`].
//!
//! The composite is a fixed weighted sum of four components, each on a 0..=100 scale.

use crate::domain::asset::AssetRecord;
use crate::domain::preferences::{RiskTolerance, Timeframe, UserPreferences};
use serde::Serialize;

pub const RISK_WEIGHT: f64 = 0.4;
pub const TIMEFRAME_WEIGHT: f64 = 0.3;
pub const YIELD_WEIGHT: f64 = 0.2;
pub const ASSET_TYPE_WEIGHT: f64 = 0.1;

pub const SHORT_TERM_MAX_DAYS: i64 = 365;
pub const MEDIUM_TERM_MAX_DAYS: i64 = 1095;

const NEUTRAL: f64 = 50.0;
const MAX_SCORE: f64 = 100.0;

/// Step function on ordinal distance between the tier and the tolerance level.
pub fn risk_tier_match(risk_tier: i32, tolerance: RiskTolerance) -> f64 {
    match (i64::from(risk_tier) - i64::from(tolerance.level())).abs() {
        0 => 100.0,
        1 => 80.0,
        2 => 50.0,
        _ => 20.0,
    }
}

pub fn timeframe_matches(target_duration_days: i64, timeframe: Timeframe) -> bool {
    match timeframe {
        Timeframe::Short => target_duration_days <= SHORT_TERM_MAX_DAYS,
        Timeframe::Medium => {
            target_duration_days > SHORT_TERM_MAX_DAYS
                && target_duration_days <= MEDIUM_TERM_MAX_DAYS
        }
        Timeframe::Long => target_duration_days > MEDIUM_TERM_MAX_DAYS,
    }
}

/// An unmatched timeframe is neutral-negative, never disqualifying.
pub fn timeframe_score(matched: bool) -> f64 {
    if matched {
        100.0
    } else {
        NEUTRAL
    }
}

/// Full credit at or above `min_yield`, proportional credit below it, neutral when unset.
///
/// A threshold of zero counts as unset.
pub fn yield_match(expected_yield: f64, min_yield: Option<f64>) -> f64 {
    match min_yield {
        Some(min) if min != 0.0 => {
            if expected_yield >= min {
                100.0
            } else {
                (expected_yield / min * 100.0).max(0.0)
            }
        }
        _ => NEUTRAL,
    }
}

/// Placeholder: always neutral. The record's asset types are not compared against the
/// caller's preferred types yet.
pub fn asset_type_match(_record: &AssetRecord, _preferred: Option<&[String]>) -> f64 {
    NEUTRAL
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub risk_tier_match: f64,
    pub timeframe_match: bool,
    pub yield_match: f64,
    pub asset_type_match: f64,
    pub total: f64,
}

pub fn score(record: &AssetRecord, prefs: &UserPreferences) -> ScoreBreakdown {
    let risk_tier_match = risk_tier_match(record.risk_tier, prefs.risk_tolerance);
    let timeframe_match = timeframe_matches(record.target_duration_days, prefs.timeframe);
    let yield_match = yield_match(record.expected_yield, prefs.min_yield);
    let asset_type_match = asset_type_match(record, prefs.preferred_asset_types.as_deref());

    let total = risk_tier_match * RISK_WEIGHT
        + timeframe_score(timeframe_match) * TIMEFRAME_WEIGHT
        + yield_match * YIELD_WEIGHT
        + asset_type_match * ASSET_TYPE_WEIGHT;

    ScoreBreakdown {
        risk_tier_match,
        timeframe_match,
        yield_match,
        asset_type_match,
        total: total.min(MAX_SCORE),
    }
}
