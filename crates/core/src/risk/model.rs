//! Heuristic risk formulas.
//!
//! Every metric is derived from the declared asset type, risk tier, yield and remaining
//! maturity only. Bounded metrics are clamped into their documented ranges regardless of how
//! extreme the inputs are.

/// Per-asset-type starting points for the heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseProfile {
    pub volatility: f64,
    pub liquidity: f64,
    pub counterparty_risk: f64,
}

const DEFAULT_BASE: BaseProfile = BaseProfile {
    volatility: 0.15,
    liquidity: 50.0,
    counterparty_risk: 40.0,
};

pub fn base_profile(asset_type: &str) -> BaseProfile {
    match asset_type {
        "corporate-bond" => BaseProfile {
            volatility: 0.05,
            liquidity: 70.0,
            counterparty_risk: 15.0,
        },
        "real-estate" => BaseProfile {
            volatility: 0.12,
            liquidity: 40.0,
            counterparty_risk: 25.0,
        },
        "startup-fund" => BaseProfile {
            volatility: 0.35,
            liquidity: 20.0,
            counterparty_risk: 60.0,
        },
        "revenue-sharing" => BaseProfile {
            volatility: 0.20,
            liquidity: 50.0,
            counterparty_risk: 35.0,
        },
        "credit-risk-pool" => BaseProfile {
            volatility: 0.15,
            liquidity: 60.0,
            counterparty_risk: 30.0,
        },
        _ => DEFAULT_BASE,
    }
}

/// Basis-points-like input to percent: 500 => 5.0.
pub fn yield_pct_from_bps(annual_yield_bps: i64) -> f64 {
    annual_yield_bps as f64 / 100.0
}

/// 0..=100. Lower tiers start higher; yield adds a bonus capped at 10 points.
pub fn credit_score(risk_tier: i32, yield_pct: f64) -> f64 {
    let base = 100.0 - f64::from(risk_tier) * 15.0;
    let yield_bonus = (yield_pct * 0.5).min(10.0);
    (base + yield_bonus).clamp(0.0, 100.0)
}

/// Annualized, 0.0..=1.0.
pub fn volatility(base: &BaseProfile, risk_tier: i32, yield_pct: f64) -> f64 {
    let tier_multiplier = 1.0 + (f64::from(risk_tier) - 1.0) * 0.3;
    let mut vol = base.volatility * tier_multiplier;
    if yield_pct > 10.0 {
        vol *= 1.2;
    }
    vol.clamp(0.0, 1.0)
}

fn maturity_bonus(maturity_days: i64) -> f64 {
    match maturity_days {
        d if d <= 0 => 0.0,
        d if d < 90 => 20.0,
        d if d < 365 => 10.0,
        _ => -10.0,
    }
}

/// 0..=100, higher is more liquid.
pub fn liquidity_score(base: &BaseProfile, maturity_days: i64, risk_tier: i32) -> f64 {
    let tier_adjustment = (6.0 - f64::from(risk_tier)) * 5.0;
    (base.liquidity + maturity_bonus(maturity_days) + tier_adjustment).clamp(0.0, 100.0)
}

/// 0..=100, lower is better.
pub fn counterparty_risk(base: &BaseProfile, risk_tier: i32, credit_score: f64) -> f64 {
    let tier_adjustment = (f64::from(risk_tier) - 1.0) * 10.0;
    let credit_adjustment = (100.0 - credit_score) / 2.0;
    (base.counterparty_risk + tier_adjustment + credit_adjustment).clamp(0.0, 100.0)
}
