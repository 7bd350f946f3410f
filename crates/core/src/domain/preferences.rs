use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal risk appetite, 1 (conservative) to 5 (aggressive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RiskTolerance {
    Conservative = 1,
    Moderate = 2,
    Balanced = 3,
    Growth = 4,
    Aggressive = 5,
}

impl RiskTolerance {
    pub const ALL: [RiskTolerance; 5] = [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Balanced,
        RiskTolerance::Growth,
        RiskTolerance::Aggressive,
    ];

    pub fn level(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            RiskTolerance::Conservative => "conservative",
            RiskTolerance::Moderate => "moderate",
            RiskTolerance::Balanced => "balanced",
            RiskTolerance::Growth => "growth",
            RiskTolerance::Aggressive => "aggressive",
        }
    }
}

impl TryFrom<u8> for RiskTolerance {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(RiskTolerance::Conservative),
            2 => Ok(RiskTolerance::Moderate),
            3 => Ok(RiskTolerance::Balanced),
            4 => Ok(RiskTolerance::Growth),
            5 => Ok(RiskTolerance::Aggressive),
            other => Err(format!("risk tolerance must be 1..=5 (got {other})")),
        }
    }
}

impl From<RiskTolerance> for u8 {
    fn from(t: RiskTolerance) -> Self {
        t as u8
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Up to one year.
    Short,
    /// More than one year, up to three.
    Medium,
    /// More than three years.
    Long,
}

impl Timeframe {
    pub fn label(self) -> &'static str {
        match self {
            Timeframe::Short => "short",
            Timeframe::Medium => "medium",
            Timeframe::Long => "long",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "short" => Ok(Timeframe::Short),
            "medium" => Ok(Timeframe::Medium),
            "long" => Ok(Timeframe::Long),
            other => bail!("unknown timeframe {other:?} (expected short, medium or long)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    pub timeframe: Timeframe,
    pub risk_tolerance: RiskTolerance,
    /// Informational; not used in scoring.
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub min_yield: Option<f64>,
    #[serde(default)]
    pub preferred_asset_types: Option<Vec<String>>,
}

impl UserPreferences {
    pub fn new(timeframe: Timeframe, risk_tolerance: RiskTolerance, amount: f64) -> Self {
        Self {
            timeframe,
            risk_tolerance,
            amount,
            min_yield: None,
            preferred_asset_types: None,
        }
    }

    pub fn with_min_yield(mut self, min_yield: f64) -> Self {
        self.min_yield = Some(min_yield);
        self
    }

    pub fn with_preferred_asset_types(mut self, types: Vec<String>) -> Self {
        self.preferred_asset_types = Some(types);
        self
    }
}
